//! Constants for octree subdivision and frustum extraction.

/// Points a node stores before it subdivides.
///
/// Once a node holds this many points, every later insert that lands in the
/// node is routed to one of its 8 children.
pub const NODE_CAPACITY: usize = 28;

/// Default depth at which nodes stop subdividing.
///
/// Only reached by heavily duplicated inputs; at this depth a node keeps
/// appending past `NODE_CAPACITY`.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// Planes bounding a view frustum: left, right, bottom, top, near, far.
pub const FRUSTUM_PLANE_COUNT: usize = 6;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
