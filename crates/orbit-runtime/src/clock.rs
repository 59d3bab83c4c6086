//! Frame clock measuring time between rendered frames

use std::time::Instant;

/// Longest frame the clock will report, in milliseconds
const MAX_FRAME_MS: f64 = 250.0;

/// Tracks frame-to-frame elapsed time in milliseconds
pub struct FrameClock {
    /// Total elapsed time in milliseconds
    pub total_ms: f64,
    /// Time since last frame in milliseconds
    pub delta_ms: f64,
    /// Frames counted so far
    pub frame: u64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_ms: 0.0,
            delta_ms: 0.0,
            frame: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock from the wall clock. Call once per frame.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_ms = 0.0;
            self.frame += 1;
            return 0.0;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;
        self.advance_by(elapsed)
    }

    /// Advance by a fixed amount, for scripted or headless runs
    pub fn advance_by(&mut self, ms: f64) -> f64 {
        // Clamp to avoid a single huge step after a stall
        self.delta_ms = ms.clamp(0.0, MAX_FRAME_MS);
        self.total_ms += self.delta_ms;
        self.frame += 1;
        self.first_tick = false;
        self.delta_ms
    }

    /// Delta time in seconds
    pub fn delta_seconds(&self) -> f64 {
        self.delta_ms / 1000.0
    }
}
