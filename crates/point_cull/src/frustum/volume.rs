//! Frustum - six planes extracted from a view-projection matrix.

use glam::{Mat4, Vec3, Vec4};

use super::Plane;
use crate::bounds::Aabb3;
use crate::constants::FRUSTUM_PLANE_COUNT;
use crate::error::CullError;

/// Clip-space depth convention of the projection matrix.
///
/// Decides which row combination bounds the near plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DepthRange {
  /// Depth in `[0, w]` (`Mat4::perspective_rh`, Direct3D, wgpu, Vulkan).
  #[default]
  ZeroToOne,
  /// Depth in `[-w, w]` (`Mat4::perspective_rh_gl`, OpenGL).
  NegativeOneToOne,
}

/// Relation between a box and the frustum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
  /// Entirely outside at least one plane.
  Outside,
  /// Crosses at least one plane (or is conservatively assumed to).
  Intersecting,
  /// Inside all six planes.
  Inside,
}

/// View frustum: planes ordered left, right, bottom, top, near, far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
  pub planes: [Plane; FRUSTUM_PLANE_COUNT],
}

impl Frustum {
  pub const LEFT: usize = 0;
  pub const RIGHT: usize = 1;
  pub const BOTTOM: usize = 2;
  pub const TOP: usize = 3;
  pub const NEAR: usize = 4;
  pub const FAR: usize = 5;

  /// Build from separate view and projection matrices.
  ///
  /// glam uses column vectors, so the combined transform is
  /// `projection * view` (world -> view -> clip).
  pub fn from_view_projection(
    view: &Mat4,
    projection: &Mat4,
    depth: DepthRange,
  ) -> Result<Self, CullError> {
    Self::from_matrix(&(*projection * *view), depth)
  }

  /// Build from a combined view-projection matrix.
  ///
  /// Each plane is a sum or difference of the clip-space `w` row with one of
  /// the `x`, `y`, `z` rows, normalised so distances are in world units.
  pub fn from_matrix(view_projection: &Mat4, depth: DepthRange) -> Result<Self, CullError> {
    let determinant = view_projection.determinant();
    if !view_projection.is_finite() || !determinant.is_finite() || determinant == 0.0 {
      return Err(CullError::DegenerateViewProjection { determinant });
    }

    let x = view_projection.row(0);
    let y = view_projection.row(1);
    let z = view_projection.row(2);
    let w = view_projection.row(3);

    let near = match depth {
      DepthRange::ZeroToOne => z,
      DepthRange::NegativeOneToOne => w + z,
    };

    let rows: [Vec4; FRUSTUM_PLANE_COUNT] = [w + x, w - x, w + y, w - y, near, w - z];
    let mut planes = [Plane::new(0.0, 0.0, 0.0, 0.0); FRUSTUM_PLANE_COUNT];
    for (plane, row) in planes.iter_mut().zip(rows) {
      *plane = Plane::from_vec4(row).normalized()?;
    }
    Ok(Self { planes })
  }

  /// Conservative AABB visibility test.
  ///
  /// For each plane, takes the box corner furthest along the plane normal
  /// (`max` where the normal component is >= 0, else `min`). If even that
  /// corner is behind the plane, the whole box is outside the half-space and
  /// the test fails immediately. Boxes near a frustum edge may pass while
  /// lying outside the frustum; a box that intersects it never fails.
  ///
  /// This deliberately differs from the literal negative-vertex check
  /// (`min` where the normal component is >= 0, rejecting when that corner
  /// is behind any plane). That check also rejects boxes straddling a
  /// plane, so it can cull visible geometry. It survives as
  /// `classify_box(aabb) == Containment::Inside`.
  pub fn is_box_visible(&self, aabb: &Aabb3) -> bool {
    self
      .planes
      .iter()
      .all(|plane| plane.signed_distance(positive_vertex(plane, aabb)) >= 0.0)
  }

  /// Classify a box as outside, intersecting, or fully inside.
  ///
  /// `Outside` agrees with [`Frustum::is_box_visible`]. `Inside` additionally
  /// requires the corner nearest each plane (the negative vertex) to be on
  /// the inner side.
  pub fn classify_box(&self, aabb: &Aabb3) -> Containment {
    let mut result = Containment::Inside;
    for plane in &self.planes {
      if plane.signed_distance(positive_vertex(plane, aabb)) < 0.0 {
        return Containment::Outside;
      }
      if plane.signed_distance(negative_vertex(plane, aabb)) < 0.0 {
        result = Containment::Intersecting;
      }
    }
    result
  }

  /// Check if a point is inside all six planes.
  pub fn contains_point(&self, point: Vec3) -> bool {
    self.planes.iter().all(|plane| plane.signed_distance(point) >= 0.0)
  }
}

/// Box corner with the smallest signed distance to `plane`.
#[inline]
fn negative_vertex(plane: &Plane, aabb: &Aabb3) -> Vec3 {
  Vec3::select(plane.normal.cmpge(Vec3::ZERO), aabb.min, aabb.max)
}

/// Box corner with the largest signed distance to `plane`.
#[inline]
fn positive_vertex(plane: &Plane, aabb: &Aabb3) -> Vec3 {
  Vec3::select(plane.normal.cmpge(Vec3::ZERO), aabb.max, aabb.min)
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
