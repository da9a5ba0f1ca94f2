//! Opaque clip-region collaborator.
//!
//! The geometry engine that unions and intersects rectangle sets lives
//! outside this crate. The image model only initializes, copies, and drops
//! regions; it never looks inside one.

/// An integer rectangle spanning `x1..x2` by `y1..y2`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RectI {
    /// Left edge, inclusive.
    pub x1: i32,
    /// Top edge, inclusive.
    pub y1: i32,
    /// Right edge, exclusive.
    pub x2: i32,
    /// Bottom edge, exclusive.
    pub y2: i32,
}

/// An opaque rectangle set restricting which pixels participate in
/// compositing.
///
/// `Region::empty` is the init operation of the region service contract,
/// `Clone` is its copy, and `Drop` is its destroy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    rects: Vec<RectI>,
}

impl Region {
    /// A region covering no pixels.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a region from a caller-owned rectangle list (copied).
    pub fn from_rects(rects: &[RectI]) -> Self {
        Self {
            rects: rects.to_vec(),
        }
    }

    /// Whether the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Release the rectangle storage and reinitialize as empty.
    pub(crate) fn reset(&mut self) {
        self.rects = Vec::new();
    }
}
