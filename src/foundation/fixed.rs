//! 16.16 fixed-point scalars and the geometry built on them.
//!
//! All image-space coordinates in this crate are deterministic scaled
//! integers; conversion to `f64` happens only for the closed-form radial
//! gradient precomputation.

use std::ops::{Add, Neg, Sub};

/// A 16.16 fixed-point scalar.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct Fixed(i32);

impl Fixed {
    /// Zero.
    pub const ZERO: Fixed = Fixed(0);
    /// 1.0 in 16.16 form.
    pub const ONE: Fixed = Fixed(1 << 16);

    /// Reinterpret raw 16.16 bits as a scalar.
    pub fn from_raw(bits: i32) -> Self {
        Fixed(bits)
    }

    /// The raw 16.16 bits.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Build from an integer value.
    pub fn from_int(v: i16) -> Self {
        Fixed(i32::from(v) << 16)
    }

    /// Build from a float, rounding toward zero.
    pub fn from_f64(v: f64) -> Self {
        Fixed((v * 65536.0) as i32)
    }

    /// Convert to a float.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / 65536.0
    }

    /// Integer part, rounding toward negative infinity.
    pub fn to_int_floor(self) -> i32 {
        self.0 >> 16
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

/// A point in 16.16 fixed-point image space.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PointFixed {
    /// Horizontal coordinate.
    pub x: Fixed,
    /// Vertical coordinate.
    pub y: Fixed,
}

impl PointFixed {
    /// Build a point from its coordinates.
    pub fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }
}

/// A circle in 16.16 fixed-point image space: center plus radius.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CircleFixed {
    /// Center x.
    pub x: Fixed,
    /// Center y.
    pub y: Fixed,
    /// Radius.
    pub radius: Fixed,
}

impl CircleFixed {
    /// Build a circle from its center and radius.
    pub fn new(x: Fixed, y: Fixed, radius: Fixed) -> Self {
        Self { x, y, radius }
    }
}

/// A 3x3 affine transform in 16.16 fixed point, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    /// Row-major matrix entries.
    pub matrix: [[Fixed; 3]; 3],
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform {
        matrix: [
            [Fixed::ONE, Fixed::ZERO, Fixed::ZERO],
            [Fixed::ZERO, Fixed::ONE, Fixed::ZERO],
            [Fixed::ZERO, Fixed::ZERO, Fixed::ONE],
        ],
    };

    /// A pure translation by `(tx, ty)`.
    pub fn translate(tx: Fixed, ty: Fixed) -> Self {
        let mut t = Transform::IDENTITY;
        t.matrix[0][2] = tx;
        t.matrix[1][2] = ty;
        t
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}
