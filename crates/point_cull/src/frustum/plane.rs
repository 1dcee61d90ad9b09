//! Plane - oriented half-space.

use glam::{Vec3, Vec4};

use crate::error::CullError;

/// Half-space `dot(normal, p) + d >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
  pub normal: Vec3,
  pub d: f32,
}

impl Plane {
  /// Plane `a*x + b*y + c*z + d = 0`.
  pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
    Self {
      normal: Vec3::new(a, b, c),
      d,
    }
  }

  /// Plane from packed coefficients `(a, b, c, d)`.
  #[inline]
  pub fn from_vec4(coefficients: Vec4) -> Self {
    Self {
      normal: coefficients.truncate(),
      d: coefficients.w,
    }
  }

  /// Packed coefficients `(a, b, c, d)`.
  #[inline]
  pub fn to_vec4(&self) -> Vec4 {
    self.normal.extend(self.d)
  }

  /// Scale all four coefficients so the normal has unit length.
  ///
  /// Distances measured against the result are in world units.
  pub fn normalized(&self) -> Result<Self, CullError> {
    let length = self.normal.length();
    if !length.is_finite() || length == 0.0 {
      return Err(CullError::DegeneratePlane { length });
    }
    Ok(Self {
      normal: self.normal / length,
      d: self.d / length,
    })
  }

  /// Signed distance from the plane; negative means outside.
  #[inline]
  pub fn signed_distance(&self, point: Vec3) -> f32 {
    self.normal.dot(point) + self.d
  }
}

#[cfg(test)]
#[path = "plane_test.rs"]
mod plane_test;
