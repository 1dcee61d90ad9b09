//! Octree module for capacity-driven spatial subdivision of point clouds.
//!
//! The tree is built once by inserting points one at a time and is never
//! rebalanced afterwards. Each node owns its points and, once subdivided,
//! exactly 8 children.
//!
//! # Subdivision Policy
//!
//! A node appends points until it holds `capacity` of them. The first insert
//! past that splits the node into 8 octants and only that point descends;
//! the points already stored stay where they are. Every later insert that
//! lands in the node is routed to the octant containing it.
//!
//! ```text
//! insert #1..=28   -> root.points
//! insert #29       -> subdivide, -> root.children[octant_of(p)]
//! insert #30..     -> root.children[octant_of(p)] (recursively)
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `OctreeNode` - bounds, stored points and owned children
//! - [`config`]: `OctreeConfig` - capacity and depth cap
//! - [`tree`]: `Octree` - root owner, insertion counters, packing
//! - [`stats`]: `OctreeStats` - shape summary for logging and tests

pub mod config;
pub mod node;
pub mod stats;
pub mod tree;

// Re-exports
pub use config::OctreeConfig;
pub use node::OctreeNode;
pub use stats::OctreeStats;
pub use tree::Octree;
