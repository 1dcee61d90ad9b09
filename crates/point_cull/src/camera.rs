//! Camera - view/projection state and its derived frustum.
//!
//! Input handling lives outside this crate. Hosts push new matrices through
//! [`Camera::set_view`] / [`Camera::set_projection`] and the frustum is
//! recomputed the next time it is read.

use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Vec3};

use crate::bounds::Aabb3;
use crate::error::CullError;
use crate::frustum::{DepthRange, Frustum};

/// Perspective lens parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraLens {
  /// Vertical field of view in radians.
  pub fov_y: f32,
  /// Viewport width / height.
  pub aspect: f32,
  /// Near clip distance (> 0).
  pub near: f32,
  /// Far clip distance (> near).
  pub far: f32,
}

impl CameraLens {
  /// Right-handed perspective matrix for the given depth convention.
  pub fn projection(&self, depth: DepthRange) -> Mat4 {
    match depth {
      DepthRange::ZeroToOne => Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far),
      DepthRange::NegativeOneToOne => {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
      }
    }
  }
}

impl Default for CameraLens {
  fn default() -> Self {
    Self {
      fov_y: FRAC_PI_4,
      aspect: 800.0 / 600.0,
      near: 0.01,
      far: 10000.0,
    }
  }
}

/// Camera owning a view and a projection matrix.
#[derive(Clone, Debug)]
pub struct Camera {
  view: Mat4,
  projection: Mat4,
  depth: DepthRange,
  frustum: Option<Frustum>,
}

impl Camera {
  pub fn new(view: Mat4, projection: Mat4, depth: DepthRange) -> Self {
    Self {
      view,
      projection,
      depth,
      frustum: None,
    }
  }

  /// Right-handed, +Y up camera at `eye` looking at `target`.
  pub fn look_at(eye: Vec3, target: Vec3, lens: CameraLens) -> Self {
    let depth = DepthRange::ZeroToOne;
    Self::new(Mat4::look_at_rh(eye, target, Vec3::Y), lens.projection(depth), depth)
  }

  #[inline]
  pub fn view(&self) -> &Mat4 {
    &self.view
  }

  #[inline]
  pub fn projection(&self) -> &Mat4 {
    &self.projection
  }

  #[inline]
  pub fn depth_range(&self) -> DepthRange {
    self.depth
  }

  /// World-space eye position, if the view matrix is invertible.
  pub fn position(&self) -> Option<Vec3> {
    let inverse = self.view.inverse();
    inverse.is_finite().then(|| inverse.w_axis.truncate())
  }

  pub fn set_view(&mut self, view: Mat4) {
    self.view = view;
    self.frustum = None;
  }

  pub fn set_projection(&mut self, projection: Mat4) {
    self.projection = projection;
    self.frustum = None;
  }

  /// Re-aim the camera, keeping its projection.
  pub fn look_from(&mut self, eye: Vec3, target: Vec3) {
    self.set_view(Mat4::look_at_rh(eye, target, Vec3::Y));
  }

  /// Frustum for the current matrices, recomputed after any change.
  ///
  /// A failed extraction is not cached, so the next call retries.
  pub fn frustum(&mut self) -> Result<Frustum, CullError> {
    if let Some(frustum) = self.frustum {
      return Ok(frustum);
    }
    let frustum = Frustum::from_view_projection(&self.view, &self.projection, self.depth)?;
    self.frustum = Some(frustum);
    Ok(frustum)
  }

  /// Check if a box is visible under the current matrices.
  pub fn is_box_visible(&mut self, aabb: &Aabb3) -> Result<bool, CullError> {
    Ok(self.frustum()?.is_box_visible(aabb))
  }
}

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;
