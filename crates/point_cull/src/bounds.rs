//! Axis-aligned bounding box used for octree cells and frustum tests.

use glam::Vec3;

use crate::error::CullError;

/// Single-precision axis-aligned bounding box.
///
/// Defines the spatial extent of an octree node. Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
	/// Minimum corner (inclusive).
	pub min: Vec3,
	/// Maximum corner (inclusive).
	pub max: Vec3,
}

impl Aabb3 {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Create a new AABB from center and half-extents.
	pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
		Self {
			min: center - half_extents,
			max: center + half_extents,
		}
	}

	/// Reduce a point set to its componentwise min/max box.
	///
	/// Rejects empty input instead of returning an inverted (+inf, -inf) box,
	/// and rejects NaN/inf coordinates which would poison the reduction.
	pub fn from_points(points: &[Vec3]) -> Result<Self, CullError> {
		let (first, rest) = points.split_first().ok_or(CullError::EmptyPointSet)?;
		if !first.is_finite() {
			return Err(CullError::NonFinitePoint { index: 0 });
		}

		let mut min = *first;
		let mut max = *first;
		for (offset, point) in rest.iter().enumerate() {
			if !point.is_finite() {
				return Err(CullError::NonFinitePoint { index: offset + 1 });
			}
			min = min.min(*point);
			max = max.max(*point);
		}

		Ok(Self { min, max })
	}

	/// Smallest box covering both `self` and `other`.
	#[inline]
	pub fn union(&self, other: &Aabb3) -> Self {
		Self {
			min: self.min.min(other.min),
			max: self.max.max(other.max),
		}
	}

	/// Check if this AABB overlaps with another (boundary contact counts).
	#[inline]
	pub fn overlaps(&self, other: &Aabb3) -> bool {
		self.min.x <= other.max.x
			&& self.max.x >= other.min.x
			&& self.min.y <= other.max.y
			&& self.max.y >= other.min.y
			&& self.min.z <= other.max.z
			&& self.max.z >= other.min.z
	}

	/// Check if this AABB contains a point, inclusive on every face.
	#[inline]
	pub fn contains_point(&self, point: Vec3) -> bool {
		point.x >= self.min.x
			&& point.x <= self.max.x
			&& point.y >= self.min.y
			&& point.y <= self.max.y
			&& point.z >= self.min.z
			&& point.z <= self.max.z
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> Vec3 {
		self.max - self.min
	}

	/// Get the volume of the AABB.
	#[inline]
	pub fn volume(&self) -> f32 {
		let size = self.size();
		size.x * size.y * size.z
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> Vec3 {
		(self.min + self.max) * 0.5
	}

	/// Box of one octant around the center.
	///
	/// Octant: 0-7 where bits select the upper half of each axis:
	/// - bit 0: X (0 = [min, center], 1 = [center, max])
	/// - bit 1: Y
	/// - bit 2: Z
	pub fn octant(&self, octant: u8) -> Self {
		debug_assert!(octant < 8, "octant out of range: {}", octant);
		let center = self.center();
		let pick = |bit: u8, lo: f32, mid: f32, hi: f32| {
			if octant & bit != 0 {
				(mid, hi)
			} else {
				(lo, mid)
			}
		};
		let (min_x, max_x) = pick(1, self.min.x, center.x, self.max.x);
		let (min_y, max_y) = pick(2, self.min.y, center.y, self.max.y);
		let (min_z, max_z) = pick(4, self.min.z, center.z, self.max.z);
		Self {
			min: Vec3::new(min_x, min_y, min_z),
			max: Vec3::new(max_x, max_y, max_z),
		}
	}

	/// All 8 octant boxes, indexed as in [`Aabb3::octant`].
	pub fn octants(&self) -> [Self; 8] {
		std::array::from_fn(|i| self.octant(i as u8))
	}

	/// Octant index whose box holds `point`.
	///
	/// Points on the center plane go to the upper half, so the returned
	/// octant's box always contains a point this AABB contains.
	#[inline]
	pub fn octant_of(&self, point: Vec3) -> u8 {
		let center = self.center();
		(point.x >= center.x) as u8 | ((point.y >= center.y) as u8) << 1 | ((point.z >= center.z) as u8) << 2
	}
}

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;
