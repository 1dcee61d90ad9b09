//! Cull pass - per-frame octree walk that issues draw calls.
//!
//! Starting at the root, each node's box is tested against the frustum. An
//! invisible node prunes its whole subtree. A visible node holding points
//! produces one draw call, then its children are visited in octant order.
//!
//! # Draw Policies
//!
//! - [`DrawPolicy::FullBuffer`]: every visible non-empty node draws the whole
//!   uploaded buffer, matching the viewer this crate replaces. With `k`
//!   visible nodes the full cloud is submitted `k` times.
//! - [`DrawPolicy::NodeRanges`]: the buffer is uploaded in the order produced
//!   by [`Octree::pack`] and each node draws only its own span.

use crate::error::CullError;
use crate::frustum::Frustum;
use crate::octree::{Octree, OctreeNode};

/// One draw request: render `count` points starting at `first` of the
/// currently bound point buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCall {
  pub first: u32,
  pub count: u32,
  /// Depth of the node that issued the call.
  pub depth: u32,
}

/// Receiver of draw calls (GPU submission lives on the other side).
pub trait DrawSink {
  fn draw(&mut self, call: DrawCall);
}

impl<F: FnMut(DrawCall)> DrawSink for F {
  fn draw(&mut self, call: DrawCall) {
    self(call)
  }
}

/// Which part of the point buffer a visible node submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawPolicy {
  /// Whole buffer per visible node.
  #[default]
  FullBuffer,
  /// The node's own packed span.
  NodeRanges,
}

/// Counters from one cull pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CullStats {
  /// Nodes whose box was tested.
  pub nodes_tested: usize,
  /// Tested nodes rejected by the frustum (their subtrees are skipped).
  pub nodes_culled: usize,
  /// Draw calls issued.
  pub draw_calls: usize,
  /// Sum of `count` over all draw calls.
  pub points_submitted: u64,
}

/// Frustum-culled octree traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CullPass {
  pub policy: DrawPolicy,
}

impl CullPass {
  pub fn new(policy: DrawPolicy) -> Self {
    Self { policy }
  }

  /// Walk `octree` against `frustum`, sending draw calls to `sink`.
  ///
  /// Fails only when `NodeRanges` is requested for an octree that has not
  /// been packed since its last insert.
  #[tracing::instrument(skip_all, name = "cull::run")]
  pub fn run<S: DrawSink + ?Sized>(
    &self,
    octree: &Octree,
    frustum: &Frustum,
    sink: &mut S,
  ) -> Result<CullStats, CullError> {
    if self.policy == DrawPolicy::NodeRanges && !octree.is_packed() {
      return Err(CullError::OctreeNotPacked);
    }

    let mut stats = CullStats::default();
    let buffer_len = octree.len() as u32;
    self.visit(octree.root(), frustum, buffer_len, sink, &mut stats);
    Ok(stats)
  }

  fn visit<S: DrawSink + ?Sized>(
    &self,
    node: &OctreeNode,
    frustum: &Frustum,
    buffer_len: u32,
    sink: &mut S,
    stats: &mut CullStats,
  ) {
    stats.nodes_tested += 1;
    if !frustum.is_box_visible(node.bounds()) {
      stats.nodes_culled += 1;
      return;
    }

    if !node.points().is_empty() {
      let call = match self.policy {
        DrawPolicy::FullBuffer => DrawCall {
          first: 0,
          count: buffer_len,
          depth: node.depth(),
        },
        DrawPolicy::NodeRanges => {
          let span = node.span();
          DrawCall {
            first: span.start,
            count: span.end - span.start,
            depth: node.depth(),
          }
        }
      };
      stats.draw_calls += 1;
      stats.points_submitted += call.count as u64;
      sink.draw(call);
    }

    if let Some(children) = node.children() {
      for child in children.iter() {
        self.visit(child, frustum, buffer_len, sink, stats);
      }
    }
  }
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
