//! Dispatch seam toward the external compose service.

pub mod composite;
