//! The image object model: variants, lifecycle, and property mutators.

pub mod gradient;
pub mod model;
pub mod props;
