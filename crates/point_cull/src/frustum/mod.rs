//! View frustum culling.
//!
//! Planes are stored as half-spaces with the inside on the positive side:
//! `dot(normal, p) + d >= 0`. A frustum is six such planes extracted from a
//! combined view-projection matrix.

pub mod plane;
pub mod volume;

pub use plane::Plane;
pub use volume::{Containment, DepthRange, Frustum};
