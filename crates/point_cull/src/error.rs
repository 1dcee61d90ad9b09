//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while building the index or deriving a frustum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CullError {
  /// Bounds cannot be reduced from zero points.
  #[error("cannot compute bounds of an empty point set")]
  EmptyPointSet,

  /// A point coordinate was NaN or infinite.
  #[error("point {index} has a non-finite coordinate")]
  NonFinitePoint { index: usize },

  /// A plane's normal had zero (or non-finite) length and cannot be normalised.
  #[error("plane normal has length {length}, cannot normalise")]
  DegeneratePlane { length: f32 },

  /// The combined view-projection matrix is singular or contains NaN/inf.
  #[error("view-projection matrix is singular or non-finite (determinant {determinant})")]
  DegenerateViewProjection { determinant: f32 },

  /// Per-node draw ranges were requested before `Octree::pack` was called.
  #[error("octree has not been packed; per-node draw ranges are unavailable")]
  OctreeNotPacked,
}
