use glam::{Mat4, Vec3};

use super::*;
use crate::bounds::Aabb3;
use crate::frustum::DepthRange;
use crate::octree::OctreeConfig;

/// Octree over [-1, 1]^3 with one point in each octant's far corner region
/// plus a root point, capacity 1.
fn octant_tree() -> Octree {
  let bounds = Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
  let mut octree = Octree::new(bounds, OctreeConfig::with_capacity(1));
  octree.insert(Vec3::ZERO);
  for octant in 0..8u8 {
    let sign = Vec3::new(
      if octant & 1 != 0 { 1.0 } else { -1.0 },
      if octant & 2 != 0 { 1.0 } else { -1.0 },
      if octant & 4 != 0 { 1.0 } else { -1.0 },
    );
    octree.insert(sign * 0.75);
  }
  octree
}

/// Frustum seeing only x >= 0.1 inside [-1, 1]^3 (clip cube shifted right).
fn right_half_frustum() -> Frustum {
  // Maps x in [0.1, 2.1] to clip [-1, 1]
  let m = Mat4::from_translation(Vec3::new(-1.1, 0.0, 0.0));
  Frustum::from_matrix(&m, DepthRange::NegativeOneToOne).unwrap()
}

fn everything_frustum() -> Frustum {
  let m = Mat4::from_scale(Vec3::splat(0.1));
  Frustum::from_matrix(&m, DepthRange::NegativeOneToOne).unwrap()
}

fn collect(pass: &CullPass, octree: &Octree, frustum: &Frustum) -> (Vec<DrawCall>, CullStats) {
  let mut calls = Vec::new();
  let stats = pass
    .run(octree, frustum, &mut |call: DrawCall| calls.push(call))
    .expect("cull pass");
  (calls, stats)
}

// =========================================================================
// Full-buffer policy
// =========================================================================

/// Every visible non-empty node draws the whole buffer.
#[test]
fn test_full_buffer_all_visible() {
  let octree = octant_tree();
  let (calls, stats) = collect(&CullPass::default(), &octree, &everything_frustum());

  assert_eq!(calls.len(), 9, "root + 8 children hold points");
  for call in &calls {
    assert_eq!(call.first, 0);
    assert_eq!(call.count, 9);
  }
  assert_eq!(calls[0].depth, 0);
  assert!(calls[1..].iter().all(|c| c.depth == 1));
  assert_eq!(
    stats,
    CullStats {
      nodes_tested: 9,
      nodes_culled: 0,
      draw_calls: 9,
      points_submitted: 81,
    }
  );
}

/// Children left of the visible region are pruned.
#[test]
fn test_culls_invisible_octants() {
  let octree = octant_tree();
  let (calls, stats) = collect(&CullPass::default(), &octree, &right_half_frustum());

  // Root straddles, the 4 octants with bit 0 set (x in [0, 1]) overlap x >= 0.1
  assert_eq!(stats.nodes_tested, 9);
  assert_eq!(stats.nodes_culled, 4);
  assert_eq!(stats.draw_calls, 5);
  assert_eq!(calls.len(), 5);
}

/// A culled parent hides its whole subtree, even non-empty descendants.
#[test]
fn test_pruned_subtree_not_visited() {
  let bounds = Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
  let mut octree = Octree::new(bounds, OctreeConfig::with_capacity(1));
  let deep = Vec3::splat(-0.9);
  for _ in 0..4 {
    octree.insert(deep); // root, then down octant 0 three levels
  }

  let (calls, stats) = collect(&CullPass::default(), &octree, &right_half_frustum());
  // Root visible; its 8 children tested; octant 0's subtree never entered
  assert_eq!(stats.nodes_tested, 9);
  assert_eq!(calls.len(), 1);
  assert_eq!(calls[0].depth, 0);
}

/// Root outside the frustum means no draws and a single test.
#[test]
fn test_root_culled() {
  let octree = octant_tree();
  let far_away = Frustum::from_matrix(
    &Mat4::from_translation(Vec3::new(-50.0, 0.0, 0.0)),
    DepthRange::NegativeOneToOne,
  )
  .unwrap();
  let (calls, stats) = collect(&CullPass::default(), &octree, &far_away);
  assert!(calls.is_empty());
  assert_eq!(stats.nodes_tested, 1);
  assert_eq!(stats.nodes_culled, 1);
}

/// Empty visible nodes are walked but never drawn.
#[test]
fn test_empty_nodes_not_drawn() {
  let bounds = Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
  let mut octree = Octree::new(bounds, OctreeConfig::with_capacity(1));
  octree.insert(Vec3::ZERO);
  octree.insert(Vec3::splat(0.5)); // subdivides; lands in octant 7

  let (calls, stats) = collect(&CullPass::default(), &octree, &everything_frustum());
  assert_eq!(stats.nodes_tested, 9);
  assert_eq!(calls.len(), 2);
}

// =========================================================================
// Node-range policy
// =========================================================================

#[test]
fn test_node_ranges_requires_pack() {
  let octree = octant_tree();
  let pass = CullPass::new(DrawPolicy::NodeRanges);
  let mut sink = |_call: DrawCall| {};
  assert_eq!(
    pass.run(&octree, &everything_frustum(), &mut sink),
    Err(CullError::OctreeNotPacked)
  );
}

/// Each node draws exactly its own packed points.
#[test]
fn test_node_ranges_draw_own_points() {
  let mut octree = octant_tree();
  let packed = octree.pack();
  let pass = CullPass::new(DrawPolicy::NodeRanges);

  let (calls, stats) = collect(&pass, &octree, &everything_frustum());
  assert_eq!(calls.len(), 9);
  assert_eq!(stats.points_submitted, 9, "each point drawn once");

  let mut drawn: Vec<Vec3> = calls
    .iter()
    .flat_map(|c| packed[c.first as usize..(c.first + c.count) as usize].iter().copied())
    .collect();
  drawn.sort_by(|a, b| a.to_array().partial_cmp(&b.to_array()).unwrap());
  let mut expected = packed.clone();
  expected.sort_by(|a, b| a.to_array().partial_cmp(&b.to_array()).unwrap());
  assert_eq!(drawn, expected);
}

/// With culling, node ranges submit only points of visible nodes.
#[test]
fn test_node_ranges_with_culling() {
  let mut octree = octant_tree();
  let packed = octree.pack();
  let pass = CullPass::new(DrawPolicy::NodeRanges);

  let (calls, stats) = collect(&pass, &octree, &right_half_frustum());
  assert_eq!(stats.points_submitted, 5);
  for call in &calls {
    for p in &packed[call.first as usize..(call.first + call.count) as usize] {
      assert!(p.x >= 0.0, "point {:?} from a culled octant", p);
    }
  }
}
