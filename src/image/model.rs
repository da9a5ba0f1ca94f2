//! The image handle: variants, constructors, and the shared lifecycle.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::foundation::color::Color;
use crate::foundation::error::{PigmentError, PigmentResult};
use crate::foundation::fixed::{CircleFixed, Fixed, PointFixed, Transform};
use crate::image::gradient::{Gradient, GradientStop, RadialCoefficients, SourceClass};
use crate::image::props::{AccessorFns, FilterKind, Repeat};
use crate::region::Region;

/// Pixel format code carried by bitmap images.
///
/// This model stores and forwards the code; interpreting the bit layout is
/// the compose service's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    /// 32-bit ARGB.
    A8R8G8B8,
    /// 32-bit RGB with a padding byte.
    X8R8G8B8,
    /// 16-bit 565 RGB.
    R5G6B5,
    /// 8-bit alpha only.
    A8,
    /// 8-bit palette index.
    C8,
    /// 1-bit alpha only.
    A1,
}

impl PixelFormat {
    /// Storage width of one pixel in bits.
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::A8R8G8B8 | PixelFormat::X8R8G8B8 => 32,
            PixelFormat::R5G6B5 => 16,
            PixelFormat::A8 | PixelFormat::C8 => 8,
            PixelFormat::A1 => 1,
        }
    }
}

/// An indexed-color palette mapping pixel indices to packed ARGB words.
///
/// Palettes are observed by bitmap images without ownership; see
/// [`Image::set_indexed`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    /// Packed ARGB entry per pixel index.
    pub entries: Vec<u32>,
}

/// Read callback: fetch the packed word at `index` from pixel memory.
pub type ReadPixelFn = fn(bits: &[u32], index: usize) -> u32;

/// Write callback: store the packed word at `index` into pixel memory.
pub type WritePixelFn = fn(bits: &mut [u32], index: usize, value: u32);

/// Flat-color source.
#[derive(Clone, Copy, Debug)]
pub struct SolidFill {
    /// The packed ARGB word, truncated per [`Color::to_packed_argb`].
    pub color: u32,
    class: SourceClass,
}

impl SolidFill {
    /// Current source classification.
    pub fn class(&self) -> SourceClass {
        self.class
    }

    /// Record a refined classification.
    pub fn set_class(&mut self, class: SourceClass) {
        self.class = class;
    }
}

/// Gradient along the axis between two points.
#[derive(Clone, Debug)]
pub struct LinearGradient {
    /// Shared stop storage.
    pub gradient: Gradient,
    /// Axis start point.
    pub p1: PointFixed,
    /// Axis end point.
    pub p2: PointFixed,
}

/// Gradient between two circles.
#[derive(Clone, Debug)]
pub struct RadialGradient {
    /// Shared stop storage.
    pub gradient: Gradient,
    /// Inner circle.
    pub c1: CircleFixed,
    /// Outer circle.
    pub c2: CircleFixed,
    /// Quadratic coefficients precomputed at construction.
    pub coefficients: RadialCoefficients,
}

/// Gradient swept by angle around a center.
#[derive(Clone, Debug)]
pub struct ConicalGradient {
    /// Shared stop storage.
    pub gradient: Gradient,
    /// Sweep center.
    pub center: PointFixed,
    /// Start angle, 16.16 fixed point.
    pub angle: Fixed,
}

/// Raw pixel-buffer source.
#[derive(Clone, Debug)]
pub struct Bitmap {
    format: PixelFormat,
    width: i32,
    height: i32,
    bits: Vec<u32>,
    stride_words: i32,
    palette: Option<Weak<Palette>>,
}

impl Bitmap {
    /// Pixel format code.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The pixel words.
    pub fn bits(&self) -> &[u32] {
        &self.bits
    }

    /// Mutable access to the pixel words.
    pub fn bits_mut(&mut self) -> &mut [u32] {
        &mut self.bits
    }

    /// Row stride in 32-bit words (byte stride divided by four).
    pub fn stride_words(&self) -> i32 {
        self.stride_words
    }

    /// The linked palette, if one was set and the caller still keeps it
    /// alive. A `None` after [`Image::set_indexed`] succeeded means the
    /// caller dropped the palette early.
    pub fn palette(&self) -> Option<Rc<Palette>> {
        self.palette.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_palette(&mut self, palette: Option<Weak<Palette>>) {
        self.palette = palette;
    }
}

#[derive(Clone, Debug)]
/// The closed set of image variants.
pub enum ImageKind {
    /// Flat color.
    Solid(SolidFill),
    /// Linear gradient.
    Linear(LinearGradient),
    /// Radial gradient.
    Radial(RadialGradient),
    /// Conical gradient.
    Conical(ConicalGradient),
    /// Raw pixel buffer.
    Bitmap(Bitmap),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Variant discriminant without payload.
pub enum ImageKindTag {
    /// Flat color.
    Solid,
    /// Linear gradient.
    LinearGradient,
    /// Radial gradient.
    RadialGradient,
    /// Conical gradient.
    ConicalGradient,
    /// Raw pixel buffer.
    Bitmap,
}

/// Attribute record shared by every variant.
#[derive(Debug)]
pub(crate) struct ImageInner {
    pub(crate) kind: ImageKind,
    pub(crate) clip_region: Region,
    pub(crate) transform: Option<Box<Transform>>,
    pub(crate) repeat: Repeat,
    pub(crate) filter: FilterKind,
    pub(crate) filter_params: Vec<Fixed>,
    pub(crate) alpha_map: Option<Image>,
    pub(crate) alpha_origin: (i16, i16),
    pub(crate) component_alpha: bool,
    pub(crate) accessors: AccessorFns,
}

/// A reference-counted handle to a 2-D pixel source.
///
/// Cloning the handle (or calling [`Image::acquire`]) raises the count by
/// one; dropping it (or calling [`Image::release`]) lowers it by one. When
/// the last handle drops, every exclusively owned attribute is released and
/// the alpha-map link, if any, is released in turn, cascading into the
/// target's own destruction if that was its last reference.
///
/// Handles are single-threaded (`!Send`); callers needing cross-thread use
/// must serialize externally, one owner per image.
#[derive(Clone, Debug)]
pub struct Image(pub(crate) Rc<RefCell<ImageInner>>);

impl Image {
    fn from_kind(kind: ImageKind) -> Image {
        Image(Rc::new(RefCell::new(ImageInner {
            kind,
            clip_region: Region::empty(),
            transform: None,
            repeat: Repeat::None,
            filter: FilterKind::Nearest,
            filter_params: Vec::new(),
            alpha_map: None,
            alpha_origin: (0, 0),
            component_alpha: false,
            accessors: AccessorFns::default(),
        })))
    }

    /// Create a flat-color image; the color is packed once, up front.
    pub fn solid_fill(color: Color) -> Image {
        Image::from_kind(ImageKind::Solid(SolidFill {
            color: color.to_packed_argb(),
            class: SourceClass::Unknown,
        }))
    }

    /// Create a linear gradient along `p1..p2`.
    ///
    /// Requires at least two stops; the stop array is copied.
    pub fn linear_gradient(
        p1: PointFixed,
        p2: PointFixed,
        stops: &[GradientStop],
    ) -> PigmentResult<Image> {
        if stops.len() < 2 {
            return Err(PigmentError::validation(
                "linear gradient needs at least two stops",
            ));
        }

        let gradient = Gradient::new(stops)?;
        Ok(Image::from_kind(ImageKind::Linear(LinearGradient {
            gradient,
            p1,
            p2,
        })))
    }

    /// Create a radial gradient between `inner` and `outer` circles.
    ///
    /// Requires at least two stops. The quadratic coefficients the radial
    /// evaluator needs are computed here, once.
    pub fn radial_gradient(
        inner: CircleFixed,
        outer: CircleFixed,
        stops: &[GradientStop],
    ) -> PigmentResult<Image> {
        if stops.len() < 2 {
            return Err(PigmentError::validation(
                "radial gradient needs at least two stops",
            ));
        }

        let gradient = Gradient::new(stops)?;
        Ok(Image::from_kind(ImageKind::Radial(RadialGradient {
            gradient,
            c1: inner,
            c2: outer,
            coefficients: RadialCoefficients::compute(inner, outer),
        })))
    }

    /// Create a conical gradient swept around `center` from `angle`.
    ///
    /// Unlike the other gradient kinds this enforces no two-stop minimum;
    /// the shared initializer rejects only an empty stop array.
    pub fn conical_gradient(
        center: PointFixed,
        angle: Fixed,
        stops: &[GradientStop],
    ) -> PigmentResult<Image> {
        let gradient = Gradient::new(stops)?;
        Ok(Image::from_kind(ImageKind::Conical(ConicalGradient {
            gradient,
            center,
            angle,
        })))
    }

    /// Create a bitmap image over `bits`, or over a zero-filled allocation
    /// when `bits` is `None`.
    ///
    /// `byte_stride` must be a non-negative multiple of four; it is stored
    /// as a count of 32-bit words. A supplied buffer must cover
    /// `stride_words * height` words.
    pub fn bitmap(
        format: PixelFormat,
        width: i32,
        height: i32,
        bits: Option<Vec<u32>>,
        byte_stride: i32,
    ) -> PigmentResult<Image> {
        if width < 0 || height < 0 {
            return Err(PigmentError::validation(
                "bitmap dimensions must be non-negative",
            ));
        }
        if byte_stride < 0 || !(byte_stride as usize).is_multiple_of(4) {
            return Err(PigmentError::validation(
                "bitmap byte stride must be a non-negative multiple of 4",
            ));
        }

        let stride_words = byte_stride / 4;
        let words = stride_words as usize * height as usize;
        let bits = match bits {
            Some(bits) => {
                if bits.len() < words {
                    return Err(PigmentError::validation(
                        "pixel buffer shorter than stride * height",
                    ));
                }
                bits
            }
            None => vec![0; words],
        };

        Ok(Image::from_kind(ImageKind::Bitmap(Bitmap {
            format,
            width,
            height,
            bits,
            stride_words,
            palette: None,
        })))
    }

    /// Take an additional reference and return the aliased handle.
    pub fn acquire(&self) -> Image {
        self.clone()
    }

    /// Give up this reference.
    ///
    /// The last release destroys the image: clip region, transform, filter
    /// parameters, and gradient storage are freed, and a linked alpha map is
    /// released in turn. A handle cannot be released twice; `release`
    /// consumes it.
    pub fn release(self) {
        drop(self);
    }

    /// Number of live handles to this image.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Whether two handles alias the same image.
    pub fn ptr_eq(&self, other: &Image) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Variant discriminant.
    pub fn kind(&self) -> ImageKindTag {
        match self.0.borrow().kind {
            ImageKind::Solid(_) => ImageKindTag::Solid,
            ImageKind::Linear(_) => ImageKindTag::LinearGradient,
            ImageKind::Radial(_) => ImageKindTag::RadialGradient,
            ImageKind::Conical(_) => ImageKindTag::ConicalGradient,
            ImageKind::Bitmap(_) => ImageKindTag::Bitmap,
        }
    }

    /// Run `f` over the variant payload.
    pub fn with_kind<R>(&self, f: impl FnOnce(&ImageKind) -> R) -> R {
        f(&self.0.borrow().kind)
    }

    /// Run `f` over the variant payload with mutable access.
    ///
    /// This is how a compose backend writes destination pixels
    /// ([`Bitmap::bits_mut`]) and how an evaluator refines gradient state
    /// ([`Gradient::set_class`], [`Gradient::set_color_table`]).
    pub fn with_kind_mut<R>(&self, f: impl FnOnce(&mut ImageKind) -> R) -> R {
        f(&mut self.0.borrow_mut().kind)
    }

    /// Copy of the clip region.
    pub fn clip_region(&self) -> Region {
        self.0.borrow().clip_region.clone()
    }

    /// The stored transform, if any.
    pub fn transform(&self) -> Option<Transform> {
        self.0.borrow().transform.as_deref().copied()
    }

    /// Current repeat policy.
    pub fn repeat(&self) -> Repeat {
        self.0.borrow().repeat
    }

    /// Current filter kind.
    pub fn filter(&self) -> FilterKind {
        self.0.borrow().filter
    }

    /// Copy of the filter parameter array.
    pub fn filter_params(&self) -> Vec<Fixed> {
        self.0.borrow().filter_params.clone()
    }

    /// A fresh handle to the linked alpha map, if any (raises its count for
    /// as long as the returned handle lives).
    pub fn alpha_map(&self) -> Option<Image> {
        self.0.borrow().alpha_map.clone()
    }

    /// Alpha-map origin offset.
    pub fn alpha_origin(&self) -> (i16, i16) {
        self.0.borrow().alpha_origin
    }

    /// Component-alpha flag.
    pub fn component_alpha(&self) -> bool {
        self.0.borrow().component_alpha
    }

    /// Currently installed pixel accessors.
    pub fn accessors(&self) -> AccessorFns {
        self.0.borrow().accessors
    }
}

#[cfg(test)]
#[path = "../../tests/unit/image/model.rs"]
mod tests;
