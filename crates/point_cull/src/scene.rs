//! PointScene - per-viewer state container.
//!
//! Owns the octree, the camera and the buffer the host uploads once. The
//! host mutates the camera from its input callbacks and calls
//! [`PointScene::render`] once per frame on the same thread.

use glam::Vec3;

use crate::bounds::Aabb3;
use crate::camera::Camera;
use crate::error::CullError;
use crate::octree::{Octree, OctreeConfig};
use crate::source::PointCloud;
use crate::traversal::{CullPass, CullStats, DrawPolicy, DrawSink};

/// Scene construction settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneConfig {
  pub octree: OctreeConfig,
  pub policy: DrawPolicy,
}

/// Result of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
  /// The cull pass ran.
  Drawn(CullStats),
  /// No frustum could be derived from the camera; nothing was drawn.
  Skipped,
}

impl FrameOutcome {
  /// Stats of a drawn frame.
  pub fn stats(&self) -> Option<&CullStats> {
    match self {
      FrameOutcome::Drawn(stats) => Some(stats),
      FrameOutcome::Skipped => None,
    }
  }
}

/// Built octree, camera and upload buffer for one point cloud.
pub struct PointScene {
  octree: Octree,
  camera: Camera,
  pass: CullPass,
  upload: Vec<Vec3>,
}

impl PointScene {
  /// Build the octree from `cloud` and prepare the upload buffer.
  ///
  /// The root box is `cloud.bounds` grown to cover every point, so the
  /// octree stores the whole cloud and full-buffer draws span the whole
  /// upload. `FullBuffer` uploads the cloud in source order; `NodeRanges`
  /// uploads the packed pre-order buffer so node spans index into it.
  ///
  /// Fails on an empty cloud or a non-finite point.
  pub fn new(cloud: PointCloud, camera: Camera, config: SceneConfig) -> Result<Self, CullError> {
    let bounds = Aabb3::from_points(&cloud.points)?.union(&cloud.bounds);
    let mut octree = Octree::new(bounds, config.octree);
    octree.extend(cloud.points.iter().copied());
    debug_assert_eq!(octree.len(), cloud.points.len());

    let upload = match config.policy {
      DrawPolicy::FullBuffer => cloud.points,
      DrawPolicy::NodeRanges => octree.pack(),
    };

    let stats = octree.stats();
    tracing::info!(
      points = octree.len(),
      nodes = stats.node_count,
      occupied = stats.occupied_nodes,
      depth = stats.max_depth,
      policy = ?config.policy,
      "scene ready"
    );

    Ok(Self {
      octree,
      camera,
      pass: CullPass::new(config.policy),
      upload,
    })
  }

  /// Points to upload to the GPU once, before the first frame.
  #[inline]
  pub fn upload_buffer(&self) -> &[Vec3] {
    &self.upload
  }

  #[inline]
  pub fn octree(&self) -> &Octree {
    &self.octree
  }

  #[inline]
  pub fn camera(&self) -> &Camera {
    &self.camera
  }

  #[inline]
  pub fn camera_mut(&mut self) -> &mut Camera {
    &mut self.camera
  }

  #[inline]
  pub fn policy(&self) -> DrawPolicy {
    self.pass.policy
  }

  /// Cull and draw one frame.
  ///
  /// A camera whose matrices yield no valid frustum skips the frame with a
  /// warning instead of testing boxes against NaN planes.
  pub fn render<S: DrawSink + ?Sized>(&mut self, sink: &mut S) -> FrameOutcome {
    let frustum = match self.camera.frustum() {
      Ok(frustum) => frustum,
      Err(err) => {
        tracing::warn!(%err, "skipping frame");
        return FrameOutcome::Skipped;
      }
    };

    match self.pass.run(&self.octree, &frustum, sink) {
      Ok(stats) => FrameOutcome::Drawn(stats),
      Err(err) => {
        tracing::warn!(%err, "skipping frame");
        FrameOutcome::Skipped
      }
    }
  }
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;
