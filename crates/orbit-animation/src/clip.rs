//! Clip definitions as they appear in scene files

use orbit_core::{OrbitError, Result};
use serde::{Deserialize, Serialize};

/// A named clip and its length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipDef {
    /// Name the controller looks the clip up by (e.g. "IDLE")
    pub name: String,
    /// Total duration in seconds
    pub duration: f64,
    /// Playback speed multiplier
    #[serde(default = "default_speed")]
    pub speed: f64,
}

fn default_speed() -> f64 {
    1.0
}

impl ClipDef {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            speed: 1.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(OrbitError::AnimationError("clip with empty name".into()));
        }
        if !(self.duration > 0.0) {
            return Err(OrbitError::AnimationError(format!(
                "clip '{}' must have a positive duration, got {}",
                self.name, self.duration
            )));
        }
        Ok(())
    }
}
