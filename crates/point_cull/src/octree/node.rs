//! OctreeNode - one cell of the point octree.
//!
//! A node owns the points it accepted while under capacity and, after its
//! first overflow, 8 children covering its octants.

use std::ops::Range;

use glam::Vec3;

use super::OctreeConfig;
use crate::bounds::Aabb3;

/// Octree node.
///
/// Children are owned exclusively by their parent; there are no back
/// references. Nodes are only ever mutated by insertion.
#[derive(Clone, Debug)]
pub struct OctreeNode {
  bounds: Aabb3,
  depth: u32,
  points: Vec<Vec3>,
  children: Option<Box<[OctreeNode; 8]>>,
  /// Range of this node's own points in the packed upload buffer.
  span: Range<u32>,
}

impl OctreeNode {
  /// Create an empty node covering `bounds`.
  pub fn new(bounds: Aabb3, depth: u32) -> Self {
    Self {
      bounds,
      depth,
      points: Vec::new(),
      children: None,
      span: 0..0,
    }
  }

  /// Spatial extent of this node.
  #[inline]
  pub fn bounds(&self) -> &Aabb3 {
    &self.bounds
  }

  /// Depth below the root (root = 0).
  #[inline]
  pub fn depth(&self) -> u32 {
    self.depth
  }

  /// Points stored at this node (not including descendants).
  #[inline]
  pub fn points(&self) -> &[Vec3] {
    &self.points
  }

  /// The 8 children, if this node has been subdivided.
  #[inline]
  pub fn children(&self) -> Option<&[OctreeNode; 8]> {
    self.children.as_deref()
  }

  /// True until the node subdivides.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.is_none()
  }

  /// Range of this node's points in the buffer returned by `Octree::pack`.
  ///
  /// Empty until the tree is packed.
  #[inline]
  pub fn span(&self) -> Range<u32> {
    self.span.clone()
  }

  /// Split into 8 empty children, one per octant of this node's bounds.
  ///
  /// Returns false if the node was already subdivided.
  pub fn subdivide(&mut self) -> bool {
    if self.children.is_some() {
      return false;
    }
    self.children = Some(Self::children_of(&self.bounds, self.depth));
    true
  }

  fn children_of(bounds: &Aabb3, depth: u32) -> Box<[OctreeNode; 8]> {
    Box::new(bounds.octants().map(|octant| OctreeNode::new(octant, depth + 1)))
  }

  /// Insert a point into this subtree.
  ///
  /// Returns false (and stores nothing) if the point lies outside this
  /// node's bounds. Otherwise walks down until a node accepts the point,
  /// subdividing the first full node on the way. Points already stored are
  /// never moved.
  pub fn insert(&mut self, point: Vec3, config: &OctreeConfig) -> bool {
    if !self.bounds.contains_point(point) {
      return false;
    }

    let mut node = self;
    loop {
      if config.stores_locally(node.depth, node.points.len()) {
        node.points.push(point);
        return true;
      }

      let bounds = node.bounds;
      let depth = node.depth;
      let children = node.children.get_or_insert_with(|| {
        tracing::trace!(depth, center = ?bounds.center(), "subdivide");
        Self::children_of(&bounds, depth)
      });
      node = &mut children[bounds.octant_of(point) as usize];
    }
  }

  /// Assign packed-buffer spans in pre-order, appending points to `out`.
  pub(crate) fn pack_into(&mut self, out: &mut Vec<Vec3>) {
    let start = out.len() as u32;
    out.extend_from_slice(&self.points);
    self.span = start..out.len() as u32;

    if let Some(children) = self.children.as_deref_mut() {
      for child in children.iter_mut() {
        child.pack_into(out);
      }
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
