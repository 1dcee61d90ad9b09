//! Headless point cloud viewer.
//!
//! Generates a synthetic cloud, builds the culling scene and renders a
//! scripted orbit around it, logging per-frame culling statistics.

mod config;
mod orbit;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use point_cull::{Camera, DrawCall, FrameMetrics, FrameOutcome, PointCloud, PointScene};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use web_time::Instant;

use config::{PolicyName, ViewerConfig};
use orbit::Orbit;

/// Octree frustum culling driver for synthetic point clouds.
#[derive(Parser, Debug)]
#[command(name = "point_viewer")]
#[command(about = "Renders a scripted orbit around a point cloud and reports culling stats")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Override the number of generated points.
	#[arg(long)]
	points: Option<usize>,

	/// Override the number of rendered frames.
	#[arg(long)]
	frames: Option<u32>,

	/// Override the point generator seed.
	#[arg(long)]
	seed: Option<u64>,

	/// Override the draw policy.
	#[arg(long, value_enum)]
	policy: Option<PolicyName>,
}

impl Args {
	fn apply(&self, config: &mut ViewerConfig) {
		if let Some(points) = self.points {
			config.cloud.count = points;
		}
		if let Some(frames) = self.frames {
			config.run.frames = frames;
		}
		if let Some(seed) = self.seed {
			config.cloud.seed = seed;
		}
		if let Some(policy) = self.policy {
			config.octree.policy = policy;
		}
	}
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let args = Args::parse();

	let mut config = match &args.config {
		Some(path) => {
			info!(path = %path.display(), "loading config");
			ViewerConfig::load(path)?
		}
		None => ViewerConfig::default(),
	};
	args.apply(&mut config);
	config.validate().context("Invalid viewer configuration")?;

	let started = Instant::now();
	let cloud = PointCloud::from_source(&mut config.source())
		.context("Failed to generate point cloud")?;
	info!(
		points = cloud.len(),
		elapsed_ms = started.elapsed().as_millis() as u64,
		"point cloud generated"
	);

	let mut orbit = Orbit::new(&config.camera);
	let camera = Camera::look_at(orbit.eye(), orbit.target(), config.camera.lens());
	let mut scene =
		PointScene::new(cloud, camera, config.scene()).context("Failed to build scene")?;

	let stats = scene.octree().stats();
	info!(
		nodes = stats.node_count,
		leaves = stats.leaf_count,
		max_depth = stats.max_depth,
		fill = %format!("{:.2}", stats.fill_ratio()),
		upload = scene.upload_buffer().len(),
		"octree built"
	);

	let mut metrics = FrameMetrics::new();
	for frame in 0..config.run.frames {
		scene.camera_mut().look_from(orbit.eye(), orbit.target());

		let mut calls = 0usize;
		let mut points = 0u64;
		let mut sink = |call: DrawCall| {
			calls += 1;
			points += u64::from(call.count);
		};

		let frame_start = Instant::now();
		let outcome = scene.render(&mut sink);
		let elapsed_us = frame_start.elapsed().as_micros() as u64;
		metrics.record(&outcome, elapsed_us);

		match outcome {
			FrameOutcome::Drawn(stats) => debug!(
				frame,
				yaw = %format!("{:.1}", orbit.yaw_degrees()),
				tested = stats.nodes_tested,
				culled = stats.nodes_culled,
				draw_calls = calls,
				points,
				elapsed_us,
				"frame drawn"
			),
			FrameOutcome::Skipped => debug!(frame, "frame skipped"),
		}

		let log_every = config.run.log_every;
		if log_every > 0 && (frame + 1) % log_every == 0 {
			let summary = metrics.summary();
			info!(
				frame = frame + 1,
				avg_cull_us = %format!("{:.1}", summary.avg_cull_us),
				avg_draw_calls = %format!("{:.1}", summary.avg_draw_calls),
				avg_culled = %format!("{:.1}", summary.avg_culled_nodes),
				"progress"
			);
		}

		orbit.advance();
	}

	let summary = metrics.summary();
	let (min_us, max_us) = metrics.cull_timings.min_max().unwrap_or_default();
	info!(
		frames = summary.frames,
		skipped = summary.skipped,
		avg_cull_us = %format!("{:.1}", summary.avg_cull_us),
		min_us,
		max_us,
		avg_draw_calls = %format!("{:.1}", summary.avg_draw_calls),
		avg_points = %format!("{:.0}", summary.avg_points_submitted),
		"run complete"
	);

	Ok(())
}
