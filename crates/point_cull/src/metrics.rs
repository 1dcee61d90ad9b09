//! Rolling per-frame culling statistics.
//!
//! # Usage
//!
//! ```ignore
//! use point_cull::metrics::FrameMetrics;
//!
//! let mut metrics = FrameMetrics::default();
//! let start = Instant::now();
//! let outcome = scene.render(&mut sink);
//! metrics.record(&outcome, start.elapsed().as_micros() as u64);
//!
//! let summary = metrics.summary();
//! ```

use std::collections::VecDeque;

use crate::scene::FrameOutcome;

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// Create a new rolling window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over values (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Get the most recent value.
    pub fn last(&self) -> Option<&T> {
        self.buffer.back()
    }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
    /// Compute the sum of all values.
    pub fn sum(&self) -> T {
        self.buffer.iter().copied().fold(T::default(), |acc, x| acc + x)
    }
}

impl RollingWindow<u64> {
    /// Compute the average of all values.
    pub fn average(&self) -> f64 {
        if self.buffer.is_empty() {
            0.0
        } else {
            self.sum() as f64 / self.buffer.len() as f64
        }
    }

    /// Get min and max values.
    pub fn min_max(&self) -> Option<(u64, u64)> {
        let min = self.buffer.iter().min()?;
        let max = self.buffer.iter().max()?;
        Some((*min, *max))
    }
}

impl Default for RollingWindow<u64> {
    fn default() -> Self {
        Self::new(128) // ~2 seconds at 60fps
    }
}

/// Culling statistics over the most recent frames.
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    /// Cull pass duration in microseconds.
    pub cull_timings: RollingWindow<u64>,
    /// Draw calls issued per frame.
    pub draw_calls: RollingWindow<u64>,
    /// Nodes rejected by the frustum per frame.
    pub culled_nodes: RollingWindow<u64>,
    /// Points submitted per frame.
    pub points_submitted: RollingWindow<u64>,
    /// Frames recorded this session, drawn or skipped.
    pub total_frames: u64,
    /// Frames skipped for lack of a valid frustum.
    pub skipped_frames: u64,
}

/// Averages over a [`FrameMetrics`] window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsSummary {
    pub frames: u64,
    pub skipped: u64,
    pub avg_cull_us: f64,
    pub avg_draw_calls: f64,
    pub avg_culled_nodes: f64,
    pub avg_points_submitted: f64,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame's outcome and its cull time.
    pub fn record(&mut self, outcome: &FrameOutcome, elapsed_us: u64) {
        self.total_frames += 1;
        match outcome {
            FrameOutcome::Drawn(stats) => {
                self.cull_timings.push(elapsed_us);
                self.draw_calls.push(stats.draw_calls as u64);
                self.culled_nodes.push(stats.nodes_culled as u64);
                self.points_submitted.push(stats.points_submitted);
            }
            FrameOutcome::Skipped => self.skipped_frames += 1,
        }
    }

    /// Reset windows; session totals are kept.
    pub fn reset(&mut self) {
        self.cull_timings.clear();
        self.draw_calls.clear();
        self.culled_nodes.clear();
        self.points_submitted.clear();
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            frames: self.total_frames,
            skipped: self.skipped_frames,
            avg_cull_us: self.cull_timings.average(),
            avg_draw_calls: self.draw_calls.average(),
            avg_culled_nodes: self.culled_nodes.average(),
            avg_points_submitted: self.points_submitted.average(),
        }
    }
}
