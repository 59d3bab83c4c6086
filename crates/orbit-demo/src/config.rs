//! Scene file: environment, avatar, clips and tuning
//!
//! ```toml
//! name = "living room"
//! user_agent = "Mozilla/5.0 (iPhone; ...)"   # optional, picks touch input
//!
//! [avatar]
//! spawn = [0.0, 1.0, 0.0]
//!
//! [[object]]
//! name = "Ground"
//! center = [0.0, -0.5, 0.0]
//! size = [40.0, 1.0, 40.0]
//!
//! [[clip]]
//! name = "IDLE"
//! duration = 2.0
//! ```

use orbit_animation::ClipDef;
use orbit_controller::ControllerConfig;
use orbit_core::{OrbitError, Result};
use orbit_physics::AvatarShape;
use orbit_runtime::{CameraConfig, InputConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding `user_agent`
const USER_AGENT_ENV: &str = "ORBIT_USER_AGENT";

/// A static box in the environment; its name decides how it collides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDef {
    pub name: String,
    pub center: [f32; 3],
    pub size: [f32; 3],
}

/// Player capsule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarDef {
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default = "default_spawn")]
    pub spawn: [f32; 3],
    #[serde(default = "default_mass")]
    pub mass: f32,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default)]
    pub restitution: f32,
}

impl Default for AvatarDef {
    fn default() -> Self {
        Self {
            height: default_height(),
            radius: default_radius(),
            spawn: default_spawn(),
            mass: default_mass(),
            friction: default_friction(),
            restitution: 0.0,
        }
    }
}

fn default_height() -> f32 {
    2.0
}
fn default_radius() -> f32 {
    0.4
}
fn default_spawn() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}
fn default_mass() -> f32 {
    1.0
}
fn default_friction() -> f32 {
    0.5
}

impl AvatarDef {
    pub fn shape(&self) -> AvatarShape {
        AvatarShape {
            height: self.height,
            radius: self.radius,
            mass: self.mass,
            friction: self.friction,
            restitution: self.restitution,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Browser user agent of the session; absent means desktop
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Viewport width in pixels, splits the screen between the two sticks
    #[serde(default = "default_screen_width")]
    pub screen_width: f32,
    #[serde(default)]
    pub avatar: AvatarDef,
    #[serde(default, rename = "object")]
    pub objects: Vec<ObjectDef>,
    #[serde(default, rename = "clip")]
    pub clips: Vec<ClipDef>,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            user_agent: None,
            screen_width: default_screen_width(),
            avatar: AvatarDef::default(),
            objects: Vec::new(),
            clips: Vec::new(),
            input: InputConfig::default(),
            camera: CameraConfig::default(),
            controller: ControllerConfig::default(),
        }
    }
}

fn default_name() -> String {
    "untitled".to_string()
}
fn default_screen_width() -> f32 {
    1280.0
}

impl SceneConfig {
    /// Load and validate a scene file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content).map_err(|e| match e {
            OrbitError::TomlParseError(msg) => OrbitError::ConfigError(format!(
                "Failed to parse scene {}: {}",
                path.display(),
                msg
            )),
            other => other,
        })?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: SceneConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(agent) = std::env::var(USER_AGENT_ENV) {
            self.user_agent = Some(agent);
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.input.validate()?;
        self.camera.validate()?;
        self.controller.validate()?;
        for clip in &self.clips {
            clip.validate()?;
        }
        for object in &self.objects {
            if object.size.iter().any(|s| *s <= 0.0) {
                return Err(OrbitError::SceneError(format!(
                    "object '{}' must have a positive size",
                    object.name
                )));
            }
        }
        if self.screen_width <= 0.0 {
            return Err(OrbitError::ConfigError(
                "screen_width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
