//! Configuration parsing for the headless viewer.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use glam::Vec3;
use point_cull::{CameraLens, DrawPolicy, OctreeConfig, SceneConfig, UniformCubeSource};
use serde::Deserialize;

/// Deepest `octree.max_depth` accepted. Traversal and packing recurse once
/// per level.
pub const MAX_OCTREE_DEPTH: u32 = 64;

/// Root viewer configuration. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
	pub cloud: CloudConfig,
	pub octree: OctreeSection,
	pub camera: CameraConfig,
	pub run: RunConfig,
}

/// Synthetic point cloud parameters.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloudConfig {
	/// Number of points to generate.
	pub count: usize,
	/// Half edge length of the generating cube.
	pub half_extent: f32,
	/// RNG seed.
	pub seed: u64,
}

impl Default for CloudConfig {
	fn default() -> Self {
		let source = UniformCubeSource::default();
		Self {
			count: source.count,
			half_extent: source.half_extent,
			seed: source.seed,
		}
	}
}

/// Octree subdivision and draw settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OctreeSection {
	/// Points per node before subdividing.
	pub capacity: usize,
	/// Depth at which nodes stop subdividing.
	pub max_depth: u32,
	/// Which buffer range a visible node draws.
	pub policy: PolicyName,
}

impl Default for OctreeSection {
	fn default() -> Self {
		let octree = OctreeConfig::default();
		Self {
			capacity: octree.capacity,
			max_depth: octree.max_depth,
			policy: PolicyName::FullBuffer,
		}
	}
}

/// Draw policy as written in TOML and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyName {
	/// Every visible node draws the whole buffer.
	FullBuffer,
	/// Every visible node draws only its own points.
	NodeRanges,
}

impl From<PolicyName> for DrawPolicy {
	fn from(name: PolicyName) -> Self {
		match name {
			PolicyName::FullBuffer => DrawPolicy::FullBuffer,
			PolicyName::NodeRanges => DrawPolicy::NodeRanges,
		}
	}
}

/// Camera lens and the scripted orbit it follows.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
	/// Point the camera orbits and looks at.
	pub target: [f32; 3],
	/// Distance from the target.
	pub distance: f32,
	/// Vertical field of view in degrees.
	pub fov_degrees: f32,
	/// Viewport width / height.
	pub aspect: f32,
	pub near: f32,
	pub far: f32,
	/// Yaw advanced per frame, in degrees.
	pub yaw_step_degrees: f32,
	/// Fixed pitch above the target plane, in degrees.
	pub pitch_degrees: f32,
}

impl Default for CameraConfig {
	fn default() -> Self {
		let lens = CameraLens::default();
		Self {
			target: [0.0; 3],
			distance: 1000.0,
			fov_degrees: lens.fov_y.to_degrees(),
			aspect: lens.aspect,
			near: lens.near,
			far: lens.far,
			yaw_step_degrees: 2.0,
			pitch_degrees: 0.0,
		}
	}
}

impl CameraConfig {
	pub fn lens(&self) -> CameraLens {
		CameraLens {
			fov_y: self.fov_degrees.to_radians(),
			aspect: self.aspect,
			near: self.near,
			far: self.far,
		}
	}

	pub fn target(&self) -> Vec3 {
		Vec3::from_array(self.target)
	}
}

/// Frame loop settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
	/// Frames to render before exiting.
	pub frames: u32,
	/// Log a progress line every N frames (0 = never).
	pub log_every: u32,
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			frames: 180,
			log_every: 30,
		}
	}
}

impl ViewerConfig {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: ViewerConfig =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
		config.validate()?;
		Ok(config)
	}

	/// Reject values the scene cannot be built from.
	pub fn validate(&self) -> Result<()> {
		if self.cloud.count == 0 {
			anyhow::bail!("cloud.count must be at least 1");
		}
		if !(self.cloud.half_extent.is_finite() && self.cloud.half_extent > 0.0) {
			anyhow::bail!(
				"cloud.half_extent must be positive, got {}",
				self.cloud.half_extent
			);
		}
		if self.octree.capacity == 0 {
			anyhow::bail!("octree.capacity must be at least 1");
		}
		if self.octree.max_depth > MAX_OCTREE_DEPTH {
			anyhow::bail!(
				"octree.max_depth must be at most {MAX_OCTREE_DEPTH}, got {}",
				self.octree.max_depth
			);
		}
		let camera = &self.camera;
		if !(camera.near > 0.0 && camera.near < camera.far) {
			anyhow::bail!(
				"camera clip range must satisfy 0 < near < far, got near={} far={}",
				camera.near,
				camera.far
			);
		}
		if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
			anyhow::bail!("camera.fov_degrees must be in (0, 180), got {}", camera.fov_degrees);
		}
		if !(camera.aspect > 0.0) {
			anyhow::bail!("camera.aspect must be positive, got {}", camera.aspect);
		}
		// +Y up degenerates when the eye sits straight above or below the target
		if !(camera.pitch_degrees.abs() < 90.0) {
			anyhow::bail!(
				"camera.pitch_degrees must be in (-90, 90), got {}",
				camera.pitch_degrees
			);
		}
		if !(camera.distance > 0.0) {
			anyhow::bail!("camera.distance must be positive, got {}", camera.distance);
		}
		Ok(())
	}

	pub fn source(&self) -> UniformCubeSource {
		UniformCubeSource {
			count: self.cloud.count,
			half_extent: self.cloud.half_extent,
			seed: self.cloud.seed,
		}
	}

	pub fn scene(&self) -> SceneConfig {
		SceneConfig {
			octree: OctreeConfig {
				capacity: self.octree.capacity,
				max_depth: self.octree.max_depth,
			},
			policy: self.octree.policy.into(),
		}
	}
}
