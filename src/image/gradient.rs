//! Gradient stop storage and the radial precomputation.

use crate::foundation::color::Color;
use crate::foundation::error::{PigmentError, PigmentResult};
use crate::foundation::fixed::{CircleFixed, Fixed};

/// A (position, color) pair along a gradient's parametric axis.
///
/// Positions are 16.16 fixed point in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Parametric position of the stop.
    pub position: Fixed,
    /// Color at that position.
    pub color: Color,
}

/// Classification of a source image, refined lazily by external evaluators
/// once a scan direction is known (via [`Gradient::set_class`] or
/// [`super::model::SolidFill::set_class`]). Construction always starts at
/// `Unknown`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum SourceClass {
    /// Not yet classified.
    #[default]
    Unknown,
    /// Constant along scanlines.
    Horizontal,
    /// Constant down columns.
    Vertical,
}

/// Shared record embedded in each gradient image variant.
///
/// The stop array is a private copy of the caller's; the caller may free or
/// mutate its original after construction without affecting the image. The
/// color lookup table is absent until an evaluator builds one.
#[derive(Clone, Debug)]
pub struct Gradient {
    stops: Vec<GradientStop>,
    stop_range: u16,
    color_table: Option<Vec<u32>>,
    class: SourceClass,
}

impl Gradient {
    /// Shared initializer for the three gradient variants.
    ///
    /// Rejects only an empty stop array; per-variant minimums are enforced
    /// by the constructors that need them.
    pub(crate) fn new(stops: &[GradientStop]) -> PigmentResult<Self> {
        if stops.is_empty() {
            return Err(PigmentError::validation(
                "gradient needs at least one stop",
            ));
        }

        Ok(Self {
            stops: stops.to_vec(),
            stop_range: 0xffff,
            color_table: None,
            class: SourceClass::Unknown,
        })
    }

    /// The stored stop array.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Stop-range constant consumed by evaluators.
    pub fn stop_range(&self) -> u16 {
        self.stop_range
    }

    /// Precomputed color lookup table, if an evaluator has built one.
    pub fn color_table(&self) -> Option<&[u32]> {
        self.color_table.as_deref()
    }

    /// Current source classification.
    pub fn class(&self) -> SourceClass {
        self.class
    }

    /// Record a refined classification.
    pub fn set_class(&mut self, class: SourceClass) {
        self.class = class;
    }

    /// Install (or drop) a precomputed color lookup table.
    ///
    /// Evaluators build the table from the stop array; this record only
    /// stores it. Reachable through
    /// [`super::model::Image::with_kind_mut`].
    pub fn set_color_table(&mut self, table: Option<Vec<u32>>) {
        self.color_table = table;
    }
}

/// Coefficients of the quadratic the radial evaluator solves per sample,
/// computed once at construction.
///
/// For inner circle c1 and outer circle c2: `cdx = c2.x - c1.x`,
/// `cdy = c2.y - c1.y`, `dr = c2.radius - c1.radius`, and
/// `a = cdx^2 + cdy^2 - dr^2`. An `a` near zero means the gradient is
/// degenerate (conical-like); the value is stored as-is and left to the
/// evaluator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RadialCoefficients {
    /// Center delta, x.
    pub cdx: f64,
    /// Center delta, y.
    pub cdy: f64,
    /// Radius delta.
    pub dr: f64,
    /// Quadratic-form coefficient.
    pub a: f64,
}

impl RadialCoefficients {
    pub(crate) fn compute(inner: CircleFixed, outer: CircleFixed) -> Self {
        let cdx = (outer.x - inner.x).to_f64();
        let cdy = (outer.y - inner.y).to_f64();
        let dr = (outer.radius - inner.radius).to_f64();

        Self {
            cdx,
            cdy,
            dr,
            a: cdx * cdx + cdy * cdy - dr * dr,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/image/gradient.rs"]
mod tests;
