//! Point sources - where the cloud comes from.
//!
//! Loading and file formats are out of scope; the viewer only needs a
//! finite list of coordinates plus a box covering all of them.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bounds::Aabb3;
use crate::error::CullError;

/// Producer of a finite point set.
pub trait PointSource {
  /// Produce the points. Order carries no meaning beyond insertion order.
  fn generate(&mut self) -> Vec<Vec3>;
}

/// Fixed points, for fixtures and pre-loaded data.
impl PointSource for Vec<Vec3> {
  fn generate(&mut self) -> Vec<Vec3> {
    self.clone()
  }
}

/// Uniform random points inside an axis-aligned cube centered on the origin.
///
/// Seeded, so the same source always yields the same cloud.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformCubeSource {
  /// Number of points to generate.
  pub count: usize,
  /// Half the cube's edge length.
  pub half_extent: f32,
  /// RNG seed.
  pub seed: u64,
}

impl Default for UniformCubeSource {
  fn default() -> Self {
    Self {
      count: 1000,
      half_extent: 50.0,
      seed: 0,
    }
  }
}

impl PointSource for UniformCubeSource {
  fn generate(&mut self) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(self.seed);
    let range = -self.half_extent..=self.half_extent;
    (0..self.count)
      .map(|_| {
        Vec3::new(
          rng.random_range(range.clone()),
          rng.random_range(range.clone()),
          rng.random_range(range.clone()),
        )
      })
      .collect()
  }
}

/// A point set together with the box that covers it.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
  pub points: Vec<Vec3>,
  pub bounds: Aabb3,
}

impl PointCloud {
  /// Wrap points, reducing their bounds. Empty sets are rejected.
  pub fn new(points: Vec<Vec3>) -> Result<Self, CullError> {
    let bounds = Aabb3::from_points(&points)?;
    Ok(Self { points, bounds })
  }

  /// Pull a cloud from any source.
  pub fn from_source<S: PointSource + ?Sized>(source: &mut S) -> Result<Self, CullError> {
    Self::new(source.generate())
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.points.len()
  }

  /// Always false for a constructed cloud.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }
}
