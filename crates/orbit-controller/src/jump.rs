//! Jump timing and vertical velocity

/// Vertical motion of the avatar.
///
/// Grounded, the velocity is pinned to one frame of gravity so the avatar
/// stays pressed against the floor. A jump sets the impulse, then decays it by
/// gravity until the air timer runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpState {
    /// Vertical displacement per frame
    pub velocity: f32,
    pub jumping: bool,
    /// Seconds since the jump started
    pub air_time: f32,
    gravity: f32,
    impulse: f32,
    max_time: f32,
}

impl JumpState {
    pub fn new(gravity: f32, impulse: f32, max_time: f32) -> Self {
        Self {
            velocity: 0.0,
            jumping: false,
            air_time: 0.0,
            gravity,
            impulse,
            max_time,
        }
    }

    /// Start a jump unless one is in progress. Returns true if it started.
    pub fn trigger(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        self.air_time = 0.0;
        self.velocity = self.impulse;
        true
    }

    /// Advance the air timer, land if it ran out, then apply gravity
    pub fn integrate(&mut self, dt_ms: f64) {
        if self.jumping {
            self.air_time += (dt_ms / 1000.0) as f32;
            if self.air_time >= self.max_time {
                self.air_time = 0.0;
                self.jumping = false;
            }
        }

        let fall = self.gravity * dt_ms as f32;
        if self.jumping {
            self.velocity -= fall;
        } else {
            self.velocity = -fall;
        }
    }

    /// One frame: trigger while the key is held, then integrate
    pub fn update(&mut self, jump_key_down: bool, dt_ms: f64) -> bool {
        let started = jump_key_down && self.trigger();
        self.integrate(dt_ms);
        started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jump() -> JumpState {
        JumpState::new(0.003, 0.5, 0.9)
    }

    #[test]
    fn test_grounded_velocity_is_one_frame_of_gravity() {
        let mut state = jump();
        state.update(false, 16.0);
        assert!((state.velocity + 0.048).abs() < 1e-6);
        state.update(false, 10.0);
        assert!((state.velocity + 0.03).abs() < 1e-6);
        assert!(!state.jumping);
    }

    #[test]
    fn test_jump_sequence() {
        let mut state = jump();
        assert!(state.update(true, 16.0));
        assert!(state.jumping);
        assert!((state.velocity - 0.452).abs() < 1e-5);
        assert!((state.air_time - 0.016).abs() < 1e-6);

        assert!(!state.update(false, 16.0));
        assert!((state.velocity - 0.404).abs() < 1e-5);

        // 0.9 s of air time lands after 57 frames of 16 ms
        let mut frames = 2;
        while state.jumping {
            state.update(false, 16.0);
            frames += 1;
        }
        assert_eq!(frames, 57);
        assert_eq!(state.air_time, 0.0);
        assert!((state.velocity + 0.048).abs() < 1e-6);
    }

    #[test]
    fn test_held_key_does_not_retrigger_midair() {
        let mut state = jump();
        state.update(true, 16.0);
        let before = state.velocity;
        assert!(!state.update(true, 16.0));
        assert!(state.velocity < before);
    }

    #[test]
    fn test_held_key_jumps_again_after_landing() {
        let mut state = jump();
        let mut starts = 0;
        for _ in 0..60 {
            if state.update(true, 16.0) {
                starts += 1;
            }
        }
        assert_eq!(starts, 2);
    }

    #[test]
    fn test_long_frame_lands_immediately() {
        let mut state = jump();
        state.update(true, 1000.0);
        assert!(!state.jumping);
        assert!((state.velocity + 3.0).abs() < 1e-5);
    }
}
