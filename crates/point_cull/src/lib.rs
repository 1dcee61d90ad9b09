//! point_cull - Engine independent point-cloud culling
//!
//! This crate indexes a static point cloud in an octree and walks it every
//! frame against the camera's view frustum, so that only the octree nodes the
//! camera can see produce draw calls.
//!
//! # Features
//!
//! - **Octree**: capacity-driven subdivision into 8 equal octants, built once
//!   from a point set and never rebalanced
//! - **Frustum**: six normalised planes extracted from a view-projection
//!   matrix, with a conservative AABB test
//! - **Cull pass**: pre-order traversal that prunes invisible subtrees and
//!   reports draw calls to an engine-provided sink
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec3;
//! use point_cull::{
//!   Camera, CameraLens, DrawCall, PointCloud, PointScene, SceneConfig, UniformCubeSource,
//! };
//!
//! let cloud = PointCloud::from_source(&mut UniformCubeSource::default())?;
//! let camera = Camera::look_at(Vec3::new(0.0, 0.0, 1000.0), Vec3::ZERO, CameraLens::default());
//! let mut scene = PointScene::new(cloud, camera, SceneConfig::default())?;
//!
//! // upload scene.upload_buffer() once, then every frame:
//! scene.render(&mut |call: DrawCall| gpu.draw_points(call.first, call.count));
//! ```

pub mod constants;
pub mod error;

pub use constants::{DEFAULT_MAX_DEPTH, FRUSTUM_PLANE_COUNT, NODE_CAPACITY};
pub use error::CullError;

// Axis-aligned bounds shared by the octree and the frustum test
pub mod bounds;
pub use bounds::Aabb3;

// Octree spatial index
pub mod octree;
pub use octree::{Octree, OctreeConfig, OctreeNode, OctreeStats};

// View frustum and plane geometry
pub mod frustum;
pub use frustum::{Containment, DepthRange, Frustum, Plane};

// Camera owning view/projection and its cached frustum
pub mod camera;
pub use camera::{Camera, CameraLens};

// Injectable point sources
pub mod source;
pub use source::{PointCloud, PointSource, UniformCubeSource};

// Per-frame culling traversal
pub mod traversal;
pub use traversal::{CullPass, CullStats, DrawCall, DrawPolicy, DrawSink};

// Scene container tying octree, camera and cull pass together
pub mod scene;
pub use scene::{FrameOutcome, PointScene, SceneConfig};

// Rolling frame statistics
pub mod metrics;
pub use metrics::{FrameMetrics, MetricsSummary, RollingWindow};
