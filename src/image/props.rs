//! Property mutators for the shared image attributes.
//!
//! Owning setters follow a free-then-replace contract: the previous owned
//! value is dropped and the new one, when supplied, is copied in. The two
//! exceptions are spelled out on [`Image::set_transform`] (address-identity
//! short-circuit) and [`Image::set_indexed`] (non-owning link).

use std::rc::Rc;

use crate::foundation::error::{PigmentError, PigmentResult};
use crate::foundation::fixed::{Fixed, Transform};
use crate::image::model::{Image, ImageKind, ImageKindTag, Palette, ReadPixelFn, WritePixelFn};
use crate::region::Region;

/// How sampling behaves outside the image's defined extent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Repeat {
    /// Outside samples are transparent.
    #[default]
    None,
    /// Tile the image.
    Normal,
    /// Clamp to the nearest edge pixel.
    Pad,
    /// Mirror at each edge.
    Reflect,
}

/// Sampling filter selector.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum FilterKind {
    /// Whatever the backend considers cheapest.
    Fast,
    /// Backend-chosen quality/speed balance.
    Good,
    /// Backend-chosen best quality.
    Best,
    /// Nearest-neighbor sampling.
    #[default]
    Nearest,
    /// Bilinear interpolation.
    Bilinear,
    /// Convolution with the kernel from the filter parameter array.
    Convolution,
}

/// Optional raw-memory pixel accessor pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessorFns {
    /// Read hook, if installed.
    pub read: Option<ReadPixelFn>,
    /// Write hook, if installed.
    pub write: Option<WritePixelFn>,
}

impl Image {
    /// Replace the clip region with a deep copy of `region`, or reset the
    /// owned region to empty when `None`. A borrowed region is never stored.
    pub fn set_clip_region(&self, region: Option<&Region>) {
        let mut inner = self.0.borrow_mut();
        match region {
            Some(region) => inner.clip_region = region.clone(),
            None => inner.clip_region.reset(),
        }
    }

    /// Replace the owned transform with a copy of `transform`, or drop it
    /// when `None`.
    ///
    /// When `transform` is the stored allocation itself the call is a no-op.
    /// That is an address comparison, not value equality: a cheap identity
    /// check, intentionally nothing more.
    pub fn set_transform(&self, transform: Option<&Transform>) {
        let mut inner = self.0.borrow_mut();
        if let (Some(current), Some(new)) = (inner.transform.as_deref(), transform)
            && std::ptr::eq(current, new)
        {
            return;
        }

        inner.transform = transform.map(|t| Box::new(*t));
    }

    /// Set the repeat policy.
    pub fn set_repeat(&self, repeat: Repeat) {
        self.0.borrow_mut().repeat = repeat;
    }

    /// Set the filter kind and replace the owned parameter array with a copy
    /// of `params` (empty when `None`).
    pub fn set_filter(&self, filter: FilterKind, params: Option<&[Fixed]>) {
        let mut inner = self.0.borrow_mut();
        inner.filter = filter;
        inner.filter_params = params.map(<[Fixed]>::to_vec).unwrap_or_default();
    }

    /// Store a non-owning link to an indexed palette, or clear it.
    ///
    /// Only bitmap images carry a palette; any other variant is rejected
    /// with no state change. The palette is observed weakly
    /// (copying it would be far too expensive), so the caller must keep the
    /// `Rc` alive
    /// for as long as the image samples through it. A dropped palette shows
    /// up as `None` from [`super::model::Bitmap::palette`] rather than a
    /// dangling pointer.
    pub fn set_indexed(&self, palette: Option<&Rc<Palette>>) -> PigmentResult<()> {
        let mut inner = self.0.borrow_mut();
        let ImageKind::Bitmap(bitmap) = &mut inner.kind else {
            return Err(PigmentError::validation(
                "indexed palettes apply to bitmap images only",
            ));
        };

        bitmap.set_palette(palette.map(Rc::downgrade));
        Ok(())
    }

    /// Link `alpha` as this image's alpha map, offset by `(x, y)`, or unlink
    /// with `None`.
    ///
    /// A non-bitmap `alpha` is rejected with no state change, as is linking
    /// an image directly to itself (the one cycle this crate can catch
    /// cheaply; a transitive alpha-map cycle is not detected and will leak).
    /// When the link actually changes, the previous target is released and
    /// the new one acquired. The origin offset is overwritten on every
    /// successful call, whether or not the link changed.
    pub fn set_alpha_map(&self, alpha: Option<&Image>, x: i16, y: i16) -> PigmentResult<()> {
        if let Some(alpha) = alpha {
            if alpha.kind() != ImageKindTag::Bitmap {
                return Err(PigmentError::validation(
                    "alpha map must be a bitmap image",
                ));
            }
            if self.ptr_eq(alpha) {
                return Err(PigmentError::validation(
                    "an image cannot be its own alpha map",
                ));
            }
        }

        let mut inner = self.0.borrow_mut();
        let unchanged = match (&inner.alpha_map, alpha) {
            (Some(current), Some(new)) => current.ptr_eq(new),
            (None, None) => true,
            _ => false,
        };
        if !unchanged {
            // Dropping the old handle here is the cascading release.
            inner.alpha_map = alpha.cloned();
        }
        inner.alpha_origin = (x, y);

        Ok(())
    }

    /// Set the component-alpha flag.
    pub fn set_component_alpha(&self, component_alpha: bool) {
        self.0.borrow_mut().component_alpha = component_alpha;
    }

    /// Install (or clear) the raw-memory pixel accessor hooks.
    pub fn set_accessors(&self, read: Option<ReadPixelFn>, write: Option<WritePixelFn>) {
        let mut inner = self.0.borrow_mut();
        inner.accessors = AccessorFns { read, write };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/image/props.rs"]
mod tests;
