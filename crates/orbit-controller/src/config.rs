//! Controller tuning loaded from TOML

use orbit_core::{OrbitError, Result, Smoothing};
use serde::{Deserialize, Serialize};

/// Movement, jump and turning constants for `CharacterController`.
///
/// Speeds are in world units per frame and gravity in units per frame per
/// millisecond, matching a controller that is stepped once per rendered frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    #[serde(default = "default_base_speed")]
    pub base_speed: f32,
    #[serde(default = "default_run_multiplier")]
    pub run_multiplier: f32,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Vertical velocity set when a jump starts
    #[serde(default = "default_jump_impulse")]
    pub jump_impulse: f32,
    /// Seconds spent airborne before the jump ends
    #[serde(default = "default_jump_max_time")]
    pub jump_max_time: f32,
    /// Slerp factor toward the target heading
    #[serde(default = "default_turn_smoothing")]
    pub turn_smoothing: f32,
    #[serde(default)]
    pub smoothing: Smoothing,
    /// Avatar yaw at spawn (radians)
    #[serde(default = "default_initial_yaw")]
    pub initial_yaw: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_speed: default_base_speed(),
            run_multiplier: default_run_multiplier(),
            gravity: default_gravity(),
            jump_impulse: default_jump_impulse(),
            jump_max_time: default_jump_max_time(),
            turn_smoothing: default_turn_smoothing(),
            smoothing: Smoothing::default(),
            initial_yaw: default_initial_yaw(),
        }
    }
}

fn default_base_speed() -> f32 {
    0.1
}
fn default_run_multiplier() -> f32 {
    2.0
}
fn default_gravity() -> f32 {
    0.003
}
fn default_jump_impulse() -> f32 {
    0.5
}
fn default_jump_max_time() -> f32 {
    0.9
}
fn default_turn_smoothing() -> f32 {
    0.1
}
fn default_initial_yaw() -> f32 {
    -std::f32::consts::FRAC_PI_2
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<()> {
        OrbitError::check_range("turn_smoothing", self.turn_smoothing as f64, 0.0, 1.0)?;
        if self.base_speed < 0.0 || self.run_multiplier < 0.0 {
            return Err(OrbitError::ConfigError(
                "speeds must not be negative".to_string(),
            ));
        }
        if self.gravity < 0.0 {
            return Err(OrbitError::ConfigError(
                "gravity must not be negative".to_string(),
            ));
        }
        if self.jump_max_time <= 0.0 {
            return Err(OrbitError::ConfigError(
                "jump_max_time must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
