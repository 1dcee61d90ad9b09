//! Scripted camera path: a fixed-pitch orbit around a target.

use glam::Vec3;

use crate::config::CameraConfig;

#[derive(Debug, Clone)]
pub struct Orbit {
	target: Vec3,
	distance: f32,
	pitch: f32,
	yaw: f32,
	step: f32,
}

impl Orbit {
	pub fn new(camera: &CameraConfig) -> Self {
		Self {
			target: camera.target(),
			distance: camera.distance,
			pitch: camera.pitch_degrees.to_radians(),
			yaw: 0.0,
			step: camera.yaw_step_degrees.to_radians(),
		}
	}

	pub fn target(&self) -> Vec3 {
		self.target
	}

	/// Current eye position. Yaw 0 sits on +Z of the target.
	pub fn eye(&self) -> Vec3 {
		let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
		let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
		self.target
			+ self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
	}

	pub fn yaw_degrees(&self) -> f32 {
		self.yaw.to_degrees()
	}

	pub fn advance(&mut self) {
		self.yaw = (self.yaw + self.step).rem_euclid(std::f32::consts::TAU);
	}
}
