use approx::assert_relative_eq;
use glam::Vec3;

use super::*;

// =========================================================================
// Construction
// =========================================================================

#[test]
fn test_new() {
	let aabb = Aabb3::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
	assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
	assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_from_center_half_extents() {
	let aabb = Aabb3::from_center_half_extents(Vec3::ZERO, Vec3::splat(50.0));
	assert_eq!(aabb.min, Vec3::splat(-50.0));
	assert_eq!(aabb.max, Vec3::splat(50.0));
}

#[test]
fn test_union_covers_both() {
	let a = Aabb3::new(Vec3::splat(-1.0), Vec3::ONE);
	let b = Aabb3::new(Vec3::new(0.0, -3.0, 0.5), Vec3::new(5.0, 0.0, 0.75));
	let union = a.union(&b);
	assert_eq!(union.min, Vec3::new(-1.0, -3.0, -1.0));
	assert_eq!(union.max, Vec3::new(5.0, 1.0, 1.0));
	assert_eq!(a.union(&a), a);
}

/// Componentwise reduction picks each axis independently.
#[test]
fn test_from_points_componentwise() {
	let points = [
		Vec3::new(3.0, -1.0, 0.5),
		Vec3::new(-2.0, 4.0, 0.0),
		Vec3::new(1.0, 0.0, -7.0),
	];
	let aabb = Aabb3::from_points(&points).expect("non-empty input");
	assert_eq!(aabb.min, Vec3::new(-2.0, -1.0, -7.0));
	assert_eq!(aabb.max, Vec3::new(3.0, 4.0, 0.5));
}

/// A single point yields a degenerate but valid box.
#[test]
fn test_from_single_point() {
	let p = Vec3::new(1.0, 2.0, 3.0);
	let aabb = Aabb3::from_points(&[p]).expect("single point");
	assert_eq!(aabb.min, p);
	assert_eq!(aabb.max, p);
	assert!(aabb.contains_point(p));
	assert_eq!(aabb.volume(), 0.0);
}

/// Empty input is rejected rather than producing an inverted box.
#[test]
fn test_from_points_empty_is_error() {
	assert_eq!(Aabb3::from_points(&[]), Err(CullError::EmptyPointSet));
}

#[test]
fn test_from_points_rejects_nan() {
	let points = [Vec3::ZERO, Vec3::new(1.0, f32::NAN, 0.0)];
	assert_eq!(
		Aabb3::from_points(&points),
		Err(CullError::NonFinitePoint { index: 1 })
	);

	let points = [Vec3::new(f32::INFINITY, 0.0, 0.0)];
	assert_eq!(
		Aabb3::from_points(&points),
		Err(CullError::NonFinitePoint { index: 0 })
	);
}

/// Every input point lies inside the reduced box.
#[test]
fn test_from_points_contains_all_inputs() {
	let points: Vec<Vec3> = (0..50)
		.map(|i| {
			let t = i as f32;
			Vec3::new((t * 0.7).sin() * 40.0, (t * 1.3).cos() * 25.0, t - 25.0)
		})
		.collect();
	let aabb = Aabb3::from_points(&points).unwrap();
	for p in &points {
		assert!(aabb.contains_point(*p), "{:?} outside {:?}", p, aabb);
	}
}

// =========================================================================
// Queries
// =========================================================================

#[test]
fn test_overlaps() {
	let a = Aabb3::new(Vec3::ZERO, Vec3::splat(10.0));
	let b = Aabb3::new(Vec3::splat(5.0), Vec3::splat(15.0));
	let touching = Aabb3::new(Vec3::splat(10.0), Vec3::splat(20.0));
	let apart = Aabb3::new(Vec3::splat(11.0), Vec3::splat(20.0));
	assert!(a.overlaps(&b) && b.overlaps(&a));
	assert!(a.overlaps(&touching) && touching.overlaps(&a));
	assert!(!a.overlaps(&apart) && !apart.overlaps(&a));
}

#[test]
fn test_contains_point_inclusive() {
	let aabb = Aabb3::new(Vec3::ZERO, Vec3::splat(10.0));

	// Inside
	assert!(aabb.contains_point(Vec3::splat(5.0)));

	// On boundary
	assert!(aabb.contains_point(Vec3::ZERO));
	assert!(aabb.contains_point(Vec3::splat(10.0)));
	assert!(aabb.contains_point(Vec3::new(10.0, 0.0, 5.0)));

	// Outside on a single axis
	assert!(!aabb.contains_point(Vec3::new(-0.001, 5.0, 5.0)));
	assert!(!aabb.contains_point(Vec3::new(5.0, 10.001, 5.0)));
	assert!(!aabb.contains_point(Vec3::new(5.0, 5.0, 11.0)));
}

#[test]
fn test_size_and_center() {
	let aabb = Aabb3::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 5.0));
	assert_eq!(aabb.size(), Vec3::new(2.0, 4.0, 8.0));
	assert_eq!(aabb.center(), Vec3::new(0.0, 0.0, 1.0));
	assert_eq!(aabb.volume(), 64.0);
}

// =========================================================================
// Octant partition
// =========================================================================

/// Octant bits select the upper half per axis.
#[test]
fn test_octant_bit_layout() {
	let parent = Aabb3::new(Vec3::ZERO, Vec3::splat(2.0));

	assert_eq!(parent.octant(0), Aabb3::new(Vec3::ZERO, Vec3::ONE));
	assert_eq!(
		parent.octant(1),
		Aabb3::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0))
	);
	assert_eq!(
		parent.octant(2),
		Aabb3::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 2.0, 1.0))
	);
	assert_eq!(
		parent.octant(4),
		Aabb3::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 1.0, 2.0))
	);
	assert_eq!(parent.octant(7), Aabb3::new(Vec3::ONE, Vec3::splat(2.0)));
}

/// Each child has 1/8 of the parent's volume and the children sum to it.
#[test]
fn test_octants_partition_volume() {
	let parent = Aabb3::new(Vec3::new(-50.0, -20.0, 0.0), Vec3::new(50.0, 60.0, 30.0));
	let children = parent.octants();

	let mut total = 0.0;
	for (i, child) in children.iter().enumerate() {
		assert_relative_eq!(child.volume(), parent.volume() / 8.0, max_relative = 1e-6);
		assert_eq!(child.size(), parent.size() * 0.5, "octant {} size", i);
		total += child.volume();
	}
	assert_relative_eq!(total, parent.volume(), max_relative = 1e-6);
}

/// Children stay inside the parent and share faces only on the center planes.
#[test]
fn test_octants_tile_without_gaps() {
	let parent = Aabb3::new(Vec3::splat(-50.0), Vec3::splat(50.0));
	let center = parent.center();
	let children = parent.octants();

	for child in &children {
		assert!(parent.contains_point(child.min) && parent.contains_point(child.max));
		// Every child touches the center corner
		assert!(child.contains_point(center));
	}

	// Union of the children covers both parent corners
	assert!(children.iter().any(|c| c.min == parent.min));
	assert!(children.iter().any(|c| c.max == parent.max));

	// Interiors are disjoint: a probe strictly inside one child is in no other
	for (i, child) in children.iter().enumerate() {
		let probe = child.center();
		for (j, other) in children.iter().enumerate() {
			assert_eq!(other.contains_point(probe), i == j, "probe {} vs {}", i, j);
		}
	}
}

/// The octant chosen for a point always contains it, including on the center planes.
#[test]
fn test_octant_of_contains_point() {
	let parent = Aabb3::new(Vec3::splat(-50.0), Vec3::splat(50.0));
	let probes = [
		Vec3::ZERO,
		Vec3::splat(-50.0),
		Vec3::splat(50.0),
		Vec3::new(-10.0, 20.0, 0.0),
		Vec3::new(0.0, -0.5, 49.0),
		Vec3::new(25.0, 25.0, -25.0),
	];
	for p in probes {
		let octant = parent.octant_of(p);
		assert!(octant < 8);
		assert!(
			parent.octant(octant).contains_point(p),
			"{:?} not in octant {}",
			p,
			octant
		);
	}
	assert_eq!(parent.octant_of(Vec3::ZERO), 7, "center goes to the upper octant");
	assert_eq!(parent.octant_of(Vec3::splat(-1.0)), 0);
}
