//! Scripted input timelines for headless runs
//!
//! ```toml
//! [[step]]
//! frames = 30
//! keys = ["w", "shift"]
//!
//! [[step]]
//! frames = 10
//! left_stick = [0.0, -40.0]   # touch drag in pixels from the stick origin
//! ```

use glam::Vec2;
use orbit_core::{OrbitError, Result};
use orbit_runtime::{parse_key, DeviceInput};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use winit::keyboard::KeyCode;

const LEFT_TOUCH: u64 = 1;
const RIGHT_TOUCH: u64 = 2;
/// Where scripted touches go down, as a fraction of the screen width
const LEFT_ORIGIN_X: f32 = 0.25;
const RIGHT_ORIGIN_X: f32 = 0.75;
const TOUCH_ORIGIN_Y: f32 = 400.0;

/// Input held for a run of frames
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptStep {
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Key names held during the step
    #[serde(default)]
    pub keys: Vec<String>,
    /// Left stick drag in pixels; absent releases the stick
    #[serde(default)]
    pub left_stick: Option<[f32; 2]>,
    #[serde(default)]
    pub right_stick: Option<[f32; 2]>,
    /// Pointer drag per frame in pixels, with the button held
    #[serde(default)]
    pub pointer_drag: Option<[f32; 2]>,
}

fn default_frames() -> u32 {
    1
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptFile {
    #[serde(default, rename = "step")]
    pub steps: Vec<ScriptStep>,
}

impl ScriptFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let script: ScriptFile = toml::from_str(content)?;
        for (i, step) in script.steps.iter().enumerate() {
            for key in &step.keys {
                parse_key(key).map_err(|_| {
                    OrbitError::ScriptError(format!("step {}: unknown key '{}'", i + 1, key))
                })?;
            }
        }
        Ok(script)
    }

    /// Total frames across all steps
    pub fn total_frames(&self) -> u64 {
        self.steps.iter().map(|s| s.frames as u64).sum()
    }

    /// The step active on each frame, in order
    pub fn frames(&self) -> impl Iterator<Item = &ScriptStep> {
        self.steps
            .iter()
            .flat_map(|step| std::iter::repeat(step).take(step.frames as usize))
    }
}

/// Applies script steps to a `DeviceInput` as if a user produced them
#[derive(Debug, Default)]
pub struct ScriptDriver {
    held: HashSet<KeyCode>,
    left_down: bool,
    right_down: bool,
    pointer_down: bool,
}

impl ScriptDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the device in line with `step`. Call once per frame.
    pub fn apply(&mut self, step: &ScriptStep, input: &mut DeviceInput, screen_width: f32) {
        let mut wanted = HashSet::new();
        for name in &step.keys {
            if let Ok(codes) = parse_key(name) {
                wanted.extend(codes);
            }
        }
        for key in self.held.difference(&wanted) {
            input.process_key_up(*key);
        }
        for key in wanted.difference(&self.held) {
            input.process_key_down(*key);
        }
        self.held = wanted;

        let left_origin = Vec2::new(screen_width * LEFT_ORIGIN_X, TOUCH_ORIGIN_Y);
        let right_origin = Vec2::new(screen_width * RIGHT_ORIGIN_X, TOUCH_ORIGIN_Y);
        drive_stick(input, LEFT_TOUCH, left_origin, step.left_stick, &mut self.left_down);
        drive_stick(input, RIGHT_TOUCH, right_origin, step.right_stick, &mut self.right_down);

        match step.pointer_drag {
            Some([dx, dy]) => {
                if !self.pointer_down {
                    input.process_pointer_down();
                    self.pointer_down = true;
                }
                input.process_pointer_move(dx, dy);
            }
            None => {
                if self.pointer_down {
                    input.process_pointer_up();
                    self.pointer_down = false;
                }
            }
        }
    }
}

fn drive_stick(
    input: &mut DeviceInput,
    touch_id: u64,
    origin: Vec2,
    drag: Option<[f32; 2]>,
    down: &mut bool,
) {
    match drag {
        Some([dx, dy]) => {
            if !*down {
                *down = input.touch_start(touch_id, origin).is_some();
            }
            if *down {
                input.touch_move(touch_id, origin + Vec2::new(dx, dy));
            }
        }
        None => {
            if *down {
                input.touch_end(touch_id);
                *down = false;
            }
        }
    }
}
