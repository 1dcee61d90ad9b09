//! Octree - owner of the root node and insertion bookkeeping.

use glam::Vec3;
use smallvec::SmallVec;

use super::{OctreeConfig, OctreeNode, OctreeStats};
use crate::bounds::Aabb3;
use crate::error::CullError;

/// Point octree rooted at a fixed bounding box.
///
/// The root box must cover every point that will be inserted; points outside
/// it are dropped and counted in [`Octree::rejected`].
#[derive(Clone, Debug)]
pub struct Octree {
  root: OctreeNode,
  config: OctreeConfig,
  len: usize,
  rejected: usize,
  packed: bool,
}

impl Octree {
  /// Create an empty octree covering `bounds`.
  pub fn new(bounds: Aabb3, config: OctreeConfig) -> Self {
    Self {
      root: OctreeNode::new(bounds, 0),
      config,
      len: 0,
      rejected: 0,
      packed: false,
    }
  }

  /// Build an octree whose root box is reduced from `points`, inserting them
  /// in input order.
  #[tracing::instrument(skip_all, name = "octree::build", fields(points = points.len()))]
  pub fn from_points(points: &[Vec3], config: OctreeConfig) -> Result<Self, CullError> {
    let bounds = Aabb3::from_points(points)?;
    let mut octree = Self::new(bounds, config);
    octree.extend(points.iter().copied());

    let stats = octree.stats();
    tracing::debug!(
      nodes = stats.node_count,
      depth = stats.max_depth,
      stored = stats.point_count,
      "octree built"
    );
    Ok(octree)
  }

  /// Insert a point. Returns false if it lies outside the root box.
  pub fn insert(&mut self, point: Vec3) -> bool {
    if self.root.insert(point, &self.config) {
      self.len += 1;
      self.packed = false;
      true
    } else {
      tracing::trace!(?point, "point outside octree bounds, dropped");
      self.rejected += 1;
      false
    }
  }

  /// Insert every point from `points`, returning how many were stored.
  pub fn extend<I: IntoIterator<Item = Vec3>>(&mut self, points: I) -> usize {
    points.into_iter().filter(|p| self.insert(*p)).count()
  }

  /// Number of stored points.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// True if no point has been stored.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Number of inserts dropped for lying outside the root box.
  #[inline]
  pub fn rejected(&self) -> usize {
    self.rejected
  }

  #[inline]
  pub fn root(&self) -> &OctreeNode {
    &self.root
  }

  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  #[inline]
  pub fn bounds(&self) -> &Aabb3 {
    self.root.bounds()
  }

  /// Visit every node in pre-order (node first, then children 0..8).
  pub fn visit<F: FnMut(&OctreeNode)>(&self, mut f: F) {
    let mut stack: SmallVec<[&OctreeNode; 64]> = SmallVec::new();
    stack.push(&self.root);
    while let Some(node) = stack.pop() {
      f(node);
      if let Some(children) = node.children() {
        // Reverse so octant 0 is popped first
        stack.extend(children.iter().rev());
      }
    }
  }

  /// Summarize the tree shape.
  pub fn stats(&self) -> OctreeStats {
    let mut stats = OctreeStats::default();
    let capacity = self.config.capacity;
    self.visit(|node| stats.record(node, capacity));
    stats
  }

  /// Flatten all points into a pre-order buffer and record each node's span.
  ///
  /// Every subtree occupies a contiguous range of the returned buffer, so a
  /// renderer that uploads it can draw one node's points with a single
  /// `first..first + count` call. Inserting afterwards invalidates the spans.
  pub fn pack(&mut self) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(self.len);
    self.root.pack_into(&mut out);
    self.packed = true;
    out
  }

  /// True if the node spans match the last buffer returned by [`Octree::pack`].
  #[inline]
  pub fn is_packed(&self) -> bool {
    self.packed
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
