//! OctreeConfig - subdivision thresholds.

use crate::constants::{DEFAULT_MAX_DEPTH, NODE_CAPACITY};

/// Configuration for octree subdivision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OctreeConfig {
  /// Points a node stores before further inserts descend to its children.
  pub capacity: usize,

  /// Depth at which nodes stop subdividing (root = 0).
  ///
  /// Nodes at this depth append without limit. Bounds recursion when many
  /// points share the same coordinates.
  pub max_depth: u32,
}

impl OctreeConfig {
  /// Config with the given capacity and the default depth cap.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      capacity,
      ..Self::default()
    }
  }

  /// Check whether a node at `depth` holding `stored` points accepts
  /// another point locally instead of routing it to a child.
  #[inline]
  pub fn stores_locally(&self, depth: u32, stored: usize) -> bool {
    stored < self.capacity || depth >= self.max_depth
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      capacity: NODE_CAPACITY,
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
