//! Input and camera tuning loaded from TOML

use crate::keys::{Action, KeyState};
use orbit_core::{OrbitError, Result, Smoothing};
use serde::{Deserialize, Serialize};

/// Key names bound to each action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bindings {
    #[serde(default = "default_forward")]
    pub forward: Vec<String>,
    #[serde(default = "default_backward")]
    pub backward: Vec<String>,
    #[serde(default = "default_left")]
    pub left: Vec<String>,
    #[serde(default = "default_right")]
    pub right: Vec<String>,
    #[serde(default = "default_jump")]
    pub jump: Vec<String>,
    #[serde(default = "default_run")]
    pub run: Vec<String>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            forward: default_forward(),
            backward: default_backward(),
            left: default_left(),
            right: default_right(),
            jump: default_jump(),
            run: default_run(),
        }
    }
}

impl Bindings {
    pub fn get(&self, action: Action) -> &[String] {
        match action {
            Action::Forward => &self.forward,
            Action::Backward => &self.backward,
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Jump => &self.jump,
            Action::Run => &self.run,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, &[String])> {
        Action::ALL.into_iter().map(move |action| (action, self.get(action)))
    }
}

fn names(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}
fn default_forward() -> Vec<String> {
    names(&["w", "arrowup"])
}
fn default_backward() -> Vec<String> {
    names(&["s", "arrowdown"])
}
fn default_left() -> Vec<String> {
    names(&["a", "arrowleft"])
}
fn default_right() -> Vec<String> {
    names(&["d", "arrowright"])
}
fn default_jump() -> Vec<String> {
    names(&[" "])
}
fn default_run() -> Vec<String> {
    names(&["shift"])
}

/// Tuning for `InputState`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub bindings: Bindings,
    /// Per-frame lerp factor toward the axis target
    #[serde(default = "default_axis_smoothing")]
    pub axis_smoothing: f32,
    #[serde(default)]
    pub smoothing: Smoothing,
    /// Joystick displacement considered full deflection; half of it is the dead zone
    #[serde(default = "default_joystick_max_delta")]
    pub joystick_max_delta: f32,
    #[serde(default = "default_joystick_sensibility")]
    pub joystick_sensibility: f32,
    /// Divisor applied to the camera stick before it reaches the orbit offsets
    #[serde(default = "default_orbit_damping")]
    pub orbit_damping: f32,
    /// Pixels of pointer drag per radian of orbit
    #[serde(default = "default_pointer_sensibility")]
    pub pointer_sensibility: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            bindings: Bindings::default(),
            axis_smoothing: default_axis_smoothing(),
            smoothing: Smoothing::default(),
            joystick_max_delta: default_joystick_max_delta(),
            joystick_sensibility: default_joystick_sensibility(),
            orbit_damping: default_orbit_damping(),
            pointer_sensibility: default_pointer_sensibility(),
        }
    }
}

fn default_axis_smoothing() -> f32 {
    0.2
}
fn default_joystick_max_delta() -> f32 {
    0.02
}
fn default_joystick_sensibility() -> f32 {
    0.5
}
fn default_orbit_damping() -> f32 {
    5.0
}
fn default_pointer_sensibility() -> f32 {
    1000.0
}

impl InputConfig {
    pub fn validate(&self) -> Result<()> {
        OrbitError::check_range("axis_smoothing", self.axis_smoothing as f64, 0.0, 1.0)?;
        if self.orbit_damping <= 0.0 {
            return Err(OrbitError::ConfigError(
                "orbit_damping must be positive".to_string(),
            ));
        }
        if self.pointer_sensibility <= 0.0 {
            return Err(OrbitError::ConfigError(
                "pointer_sensibility must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Key state with this config's bindings applied
    pub fn key_state(&self) -> Result<KeyState> {
        KeyState::with_bindings(self.bindings.iter())
    }
}

/// Starting pose and limits of the orbit camera
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Horizontal orbit angle (radians)
    #[serde(default)]
    pub alpha: f32,
    /// Vertical orbit angle from +Y (radians)
    #[serde(default = "default_beta")]
    pub beta: f32,
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Fraction of the inertial offset kept each frame
    #[serde(default = "default_inertia")]
    pub inertia: f32,
    #[serde(default = "default_lower_beta")]
    pub lower_beta_limit: f32,
    #[serde(default = "default_upper_beta")]
    pub upper_beta_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            beta: default_beta(),
            radius: default_radius(),
            inertia: default_inertia(),
            lower_beta_limit: default_lower_beta(),
            upper_beta_limit: default_upper_beta(),
        }
    }
}

fn default_beta() -> f32 {
    65f32.to_radians()
}
fn default_radius() -> f32 {
    6.0
}
fn default_inertia() -> f32 {
    0.9
}
fn default_lower_beta() -> f32 {
    0.01
}
fn default_upper_beta() -> f32 {
    std::f32::consts::PI - 0.01
}

impl CameraConfig {
    pub fn validate(&self) -> Result<()> {
        OrbitError::check_range("inertia", self.inertia as f64, 0.0, 1.0)?;
        if self.lower_beta_limit > self.upper_beta_limit {
            return Err(OrbitError::ConfigError(
                "lower_beta_limit exceeds upper_beta_limit".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: InputConfig = toml::from_str("").unwrap();
        assert!((config.axis_smoothing - 0.2).abs() < 1e-6);
        assert!((config.joystick_max_delta - 0.02).abs() < 1e-6);
        assert_eq!(config.bindings.forward, vec!["w", "arrowup"]);
        config.validate().unwrap();
    }

    #[test]
    fn partial_bindings_keep_other_defaults() {
        let config: InputConfig = toml::from_str(
            r#"
            [bindings]
            jump = ["j"]
            "#,
        )
        .unwrap();
        let keys = config.key_state().unwrap();
        assert_eq!(keys.bindings(Action::Jump), &[KeyCode::KeyJ]);
        assert_eq!(keys.bindings(Action::Left), &[KeyCode::KeyA, KeyCode::ArrowLeft]);
    }

    #[test]
    fn unknown_key_name_fails() {
        let config: InputConfig = toml::from_str("[bindings]\nrun = [\"hyper\"]").unwrap();
        assert!(config.key_state().is_err());
    }

    #[test]
    fn rejects_bad_smoothing() {
        let config = InputConfig {
            axis_smoothing: 1.5,
            ..InputConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn camera_defaults() {
        let camera = CameraConfig::default();
        assert!((camera.beta - 1.134_464).abs() < 1e-5);
        assert_eq!(camera.radius, 6.0);
        camera.validate().unwrap();
    }
}
