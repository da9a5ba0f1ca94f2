//! Pigment is the image object model for a 2-D pixel compositing pipeline.
//!
//! An [`Image`] is a reference-counted handle over one of five pixel-source
//! variants (flat color, linear/radial/conical gradient, or a raw bitmap),
//! carrying the attributes every source shares: clip region, affine
//! transform, sampling filter, repeat policy, an optional alpha-map image,
//! and pluggable memory accessors.
//!
//! # Model overview
//!
//! 1. **Construct**: one constructor per variant ([`Image::solid_fill`],
//!    [`Image::linear_gradient`], [`Image::radial_gradient`],
//!    [`Image::conical_gradient`], [`Image::bitmap`]); a fresh handle's
//!    count is 1.
//! 2. **Configure**: the `set_*` mutators replace owned attributes
//!    copy-by-copy; rejections leave prior state untouched.
//! 3. **Link**: a bitmap image can serve as another image's alpha map,
//!    sharing ownership through the handle's count.
//! 4. **Dispatch**: [`composite_rect`] stages a scanline scratch buffer and
//!    forwards one rectangle to an external [`ComposeBackend`].
//!
//! The per-pixel blend math, clip-region geometry, and format conversion
//! are external collaborators behind narrow seams ([`Region`],
//! [`ComposeBackend`]); this crate never does pixel math.
//!
//! Key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: handles are `Rc`-based and `!Send`; concurrent
//!   callers serialize externally.
//! - **Deterministic geometry**: coordinates are 16.16 fixed point; floats
//!   appear only in the radial gradient's precomputed coefficients.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod image;
mod region;
mod render;

pub use foundation::color::Color;
pub use foundation::error::{PigmentError, PigmentResult};
pub use foundation::fixed::{CircleFixed, Fixed, PointFixed, Transform};
pub use image::gradient::{Gradient, GradientStop, RadialCoefficients, SourceClass};
pub use image::model::{
    Bitmap, ConicalGradient, Image, ImageKind, ImageKindTag, LinearGradient, Palette, PixelFormat,
    RadialGradient, ReadPixelFn, SolidFill, WritePixelFn,
};
pub use image::props::{AccessorFns, FilterKind, Repeat};
pub use region::{RectI, Region};
pub use render::composite::{
    ComposeBackend, CompositeOp, CompositeRequest, SCANLINE_BUFFER_LENGTH, composite_rect,
};
