//! Shared foundation types: errors, fixed-point geometry, color.

pub mod color;
pub mod error;
pub mod fixed;
