//! Playback state of one named clip

use crate::clip::ClipDef;

/// A clip that can be started looping or once, and stopped
#[derive(Debug, Clone)]
pub struct AnimationGroup {
    name: String,
    /// Total duration in seconds
    duration: f64,
    /// Playback speed multiplier
    speed: f64,
    /// Current playback time in seconds
    time: f64,
    looping: bool,
    playing: bool,
    /// Completed passes through the clip since the last `play`
    loops: u32,
}

impl AnimationGroup {
    pub fn new(def: &ClipDef) -> Self {
        Self {
            name: def.name.clone(),
            duration: def.duration,
            speed: def.speed,
            time: 0.0,
            looping: false,
            playing: false,
            loops: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn loops(&self) -> u32 {
        self.loops
    }

    /// Start playback. A clip that is already playing keeps its time and only
    /// takes the new loop flag.
    pub fn play(&mut self, looping: bool) {
        self.looping = looping;
        if self.playing {
            return;
        }
        self.playing = true;
        self.time = 0.0;
        self.loops = 0;
    }

    /// Stop playback and rewind
    pub fn stop(&mut self) {
        self.playing = false;
        self.time = 0.0;
    }

    /// Advance by `dt` seconds. Returns true if a one-shot clip finished this call.
    pub fn advance(&mut self, dt: f64) -> bool {
        if !self.playing {
            return false;
        }

        self.time += dt * self.speed;

        if self.looping {
            if self.duration > 0.0 && self.time >= self.duration {
                self.loops += (self.time / self.duration) as u32;
                self.time %= self.duration;
            }
            false
        } else if self.time >= self.duration {
            self.time = self.duration;
            self.playing = false;
            self.loops += 1;
            true
        } else {
            false
        }
    }
}
