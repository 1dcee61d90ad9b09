//! Shape statistics for a built octree.

use super::OctreeNode;

/// Summary of an octree's shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
  /// Total nodes including the root.
  pub node_count: usize,
  /// Nodes that never subdivided.
  pub leaf_count: usize,
  /// Nodes holding at least one point.
  pub occupied_nodes: usize,
  /// Deepest node depth (root = 0).
  pub max_depth: u32,
  /// Points stored across all nodes.
  pub point_count: usize,
  /// Nodes holding more than `capacity` points (only possible at the depth cap).
  pub overfull_nodes: usize,
}

impl OctreeStats {
  /// Fold one node into the totals.
  pub fn record(&mut self, node: &OctreeNode, capacity: usize) {
    self.node_count += 1;
    if node.is_leaf() {
      self.leaf_count += 1;
    }
    if !node.points().is_empty() {
      self.occupied_nodes += 1;
    }
    if node.points().len() > capacity {
      self.overfull_nodes += 1;
    }
    self.max_depth = self.max_depth.max(node.depth());
    self.point_count += node.points().len();
  }

  /// Average points per occupied node.
  #[inline]
  pub fn fill_ratio(&self) -> f64 {
    if self.occupied_nodes == 0 {
      0.0
    } else {
      self.point_count as f64 / self.occupied_nodes as f64
    }
  }
}
