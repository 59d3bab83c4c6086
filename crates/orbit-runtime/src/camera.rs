//! Third-person orbit camera
//!
//! An arc-rotate rig around a moving target. Input never writes the angles
//! directly; it adds to inertial offsets which `update` applies and decays.

use crate::config::CameraConfig;
use glam::{Quat, Vec3};
use orbit_core::CameraView;

/// Orbit request produced by input for one frame (radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitDelta {
    pub alpha: f32,
    pub beta: f32,
}

/// Offsets smaller than this are snapped to zero
const INERTIA_EPSILON: f32 = 1e-3;

pub struct OrbitCamera {
    /// Horizontal angle in radians
    pub alpha: f32,
    /// Vertical angle from +Y in radians
    pub beta: f32,
    /// Distance from target
    pub radius: f32,
    /// Point the camera orbits
    pub target: Vec3,
    /// Orientation the avatar's heading is expressed against
    pub orientation: Quat,
    inertial_alpha_offset: f32,
    inertial_beta_offset: f32,
    inertia: f32,
    lower_beta_limit: f32,
    upper_beta_limit: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            alpha: config.alpha,
            beta: config.beta.clamp(config.lower_beta_limit, config.upper_beta_limit),
            radius: config.radius,
            target: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            inertial_alpha_offset: 0.0,
            inertial_beta_offset: 0.0,
            inertia: config.inertia,
            lower_beta_limit: config.lower_beta_limit,
            upper_beta_limit: config.upper_beta_limit,
        }
    }

    /// Queue an orbit delta; it is applied by the next `update`
    pub fn apply_orbit(&mut self, delta: OrbitDelta) {
        self.inertial_alpha_offset += delta.alpha;
        self.inertial_beta_offset += delta.beta;
    }

    pub fn inertial_offsets(&self) -> (f32, f32) {
        (self.inertial_alpha_offset, self.inertial_beta_offset)
    }

    /// Apply and decay inertial offsets. Call once per frame.
    pub fn update(&mut self) {
        if self.inertial_alpha_offset != 0.0 || self.inertial_beta_offset != 0.0 {
            self.alpha += self.inertial_alpha_offset;
            self.beta += self.inertial_beta_offset;

            self.inertial_alpha_offset *= self.inertia;
            self.inertial_beta_offset *= self.inertia;
            if self.inertial_alpha_offset.abs() < INERTIA_EPSILON {
                self.inertial_alpha_offset = 0.0;
            }
            if self.inertial_beta_offset.abs() < INERTIA_EPSILON {
                self.inertial_beta_offset = 0.0;
            }
        }
        self.beta = self.beta.clamp(self.lower_beta_limit, self.upper_beta_limit);
    }

    /// Keep orbiting around a moving point
    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
    }

    /// World position on the orbit sphere
    pub fn position(&self) -> Vec3 {
        let sin_beta = self.beta.sin();
        self.target
            + Vec3::new(
                self.radius * self.alpha.cos() * sin_beta,
                self.radius * self.beta.cos(),
                self.radius * self.alpha.sin() * sin_beta,
            )
    }
}

impl CameraView for OrbitCamera {
    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }
}
