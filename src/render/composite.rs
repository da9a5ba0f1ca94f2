//! Composite dispatch: scratch staging and delegation to the compose
//! backend.
//!
//! The dispatcher performs no pixel math. It sizes a per-call scanline
//! scratch buffer, assembles the operation descriptor, and hands both to
//! the external [`ComposeBackend`].

use tracing::trace;

use crate::foundation::error::{PigmentError, PigmentResult};
use crate::image::model::Image;

/// Operator codes forwarded to the compose backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CompositeOp {
    /// Clear the destination.
    Clear,
    /// Copy source.
    Src,
    /// Leave the destination.
    Dst,
    /// Source over destination.
    Over,
    /// Destination over source.
    OverReverse,
    /// Source where the destination is.
    In,
    /// Destination where the source is.
    InReverse,
    /// Source where the destination is not.
    Out,
    /// Destination where the source is not.
    OutReverse,
    /// Source atop destination.
    Atop,
    /// Destination atop source.
    AtopReverse,
    /// Exclusive-or coverage.
    Xor,
    /// Saturating channel sum.
    Add,
    /// Add, limited by remaining destination headroom.
    Saturate,
}

/// Assembled description of one rectangular compositing call.
#[derive(Clone, Copy, Debug)]
pub struct CompositeRequest<'a> {
    /// Operator code.
    pub op: CompositeOp,
    /// Source image.
    pub src: &'a Image,
    /// Optional mask image.
    pub mask: Option<&'a Image>,
    /// Destination image.
    pub dest: &'a Image,
    /// Sample origin in the source.
    pub src_origin: (i16, i16),
    /// Sample origin in the mask.
    pub mask_origin: (i16, i16),
    /// Write origin in the destination.
    pub dest_origin: (i16, i16),
    /// Rectangle width in pixels.
    pub width: u16,
    /// Rectangle height in pixels.
    pub height: u16,
}

/// The external rectangular-compose service.
///
/// Given the assembled request and a caller-owned scratch buffer, performs
/// the per-pixel blend over the requested rectangle. Fire-and-forget from
/// this crate's perspective: it returns no status.
pub trait ComposeBackend {
    /// Blend one rectangle, using `scratch` as per-call pixel workspace.
    fn compose(&mut self, request: &CompositeRequest<'_>, scratch: &mut [u32]);
}

/// Pixel capacity of the stack-resident scanline scratch buffer.
pub const SCANLINE_BUFFER_LENGTH: usize = 2048;

/// Stage scratch space and forward one rectangle to `backend`.
///
/// The default scratch is a stack buffer of [`SCANLINE_BUFFER_LENGTH`] `* 3`
/// words. A `width` beyond that capacity switches to a heap buffer of
/// `width * 3` words, reserved fallibly and freed when the call returns;
/// reservation failure surfaces as [`PigmentError::Allocation`] with nothing
/// composed. A zero-area rectangle is a successful no-op.
#[tracing::instrument(skip(backend, src, mask, dest))]
pub fn composite_rect<B: ComposeBackend + ?Sized>(
    backend: &mut B,
    op: CompositeOp,
    src: &Image,
    mask: Option<&Image>,
    dest: &Image,
    src_origin: (i16, i16),
    mask_origin: (i16, i16),
    dest_origin: (i16, i16),
    width: u16,
    height: u16,
) -> PigmentResult<()> {
    if width == 0 || height == 0 {
        return Ok(());
    }

    let mut stack_buffer = [0u32; SCANLINE_BUFFER_LENGTH * 3];
    let mut heap_buffer = Vec::new();
    let scratch: &mut [u32] = if usize::from(width) > SCANLINE_BUFFER_LENGTH {
        let words = usize::from(width) * 3;
        heap_buffer
            .try_reserve_exact(words)
            .map_err(|_| PigmentError::allocation("scanline scratch reservation failed"))?;
        heap_buffer.resize(words, 0);
        trace!(width, words, "scanline wider than stack scratch, using heap buffer");
        &mut heap_buffer
    } else {
        &mut stack_buffer
    };

    let request = CompositeRequest {
        op,
        src,
        mask,
        dest,
        src_origin,
        mask_origin,
        dest_origin,
        width,
        height,
    };
    backend.compose(&request, scratch);

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
