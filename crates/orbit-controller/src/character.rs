//! Third-person character controller
//!
//! Each frame, in order: jump and vertical velocity, heading, translation,
//! animation. The controller owns no scene objects; it drives the host through
//! the `AvatarBody`, `CameraView` and `ClipPlayer` traits.

use crate::animation_state::{AnimTag, AnimationSelector, ClipSlots, Transition};
use crate::config::ControllerConfig;
use crate::heading::target_yaw;
use crate::jump::JumpState;
use glam::{Quat, Vec3};
use orbit_core::math::{forward_of, yaw_of, yaw_rotation};
use orbit_core::{AvatarBody, CameraView, ClipPlayer, Result};
use orbit_runtime::InputState;

/// What one `update` did
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Vertical velocity after this frame's jump/gravity step
    pub velocity: f32,
    pub jumping: bool,
    pub jump_started: bool,
    pub target_yaw: f32,
    /// Displacement handed to the avatar
    pub movement: Vec3,
    pub transition: Option<Transition>,
}

pub struct CharacterController {
    config: ControllerConfig,
    jump: JumpState,
    animation: AnimationSelector,
}

impl CharacterController {
    pub fn new(config: ControllerConfig, slots: ClipSlots) -> Result<Self> {
        config.validate()?;
        for tag in slots.missing() {
            log::warn!("no {} clip, that state will not animate", tag.clip_name());
        }
        Ok(Self {
            jump: JumpState::new(config.gravity, config.jump_impulse, config.jump_max_time),
            animation: AnimationSelector::new(slots),
            config,
        })
    }

    /// Rotation to give the avatar at spawn
    pub fn initial_rotation(&self) -> Quat {
        yaw_rotation(self.config.initial_yaw)
    }

    pub fn current_animation(&self) -> Option<AnimTag> {
        self.animation.current()
    }

    /// Horizontal speed in units per frame
    pub fn speed(&self, running: bool) -> f32 {
        if running {
            self.config.base_speed * self.config.run_multiplier
        } else {
            self.config.base_speed
        }
    }

    /// Advance the avatar by one frame of `dt_ms` milliseconds
    pub fn update(
        &mut self,
        dt_ms: f64,
        input: &InputState,
        body: &mut impl AvatarBody,
        camera: &impl CameraView,
        clips: &mut impl ClipPlayer,
    ) -> FrameReport {
        let jump_started = self.jump.update(input.jump_key_down, dt_ms);
        if jump_started {
            log::debug!("jump");
        }

        let (rotation, target) = self.turn(dt_ms, input, body, camera);
        let movement = self.translate(input, rotation, body);
        let transition = self
            .animation
            .select(input.is_running, input.is_moving(), clips);

        log::trace!(
            "controller v={:.4} jumping={} yaw->{:.3} move=({:.3}, {:.3}, {:.3})",
            self.jump.velocity,
            self.jump.jumping,
            target,
            movement.x,
            movement.y,
            movement.z
        );

        FrameReport {
            velocity: self.jump.velocity,
            jumping: self.jump.jumping,
            jump_started,
            target_yaw: target,
            movement,
            transition,
        }
    }

    fn turn(
        &self,
        dt_ms: f64,
        input: &InputState,
        body: &mut impl AvatarBody,
        camera: &impl CameraView,
    ) -> (Quat, f32) {
        let current = body.rotation();
        let target = target_yaw(
            camera.alpha(),
            input.horizontal_axis,
            input.vertical_axis,
            yaw_of(current),
        );
        let relative = camera.orientation().inverse() * yaw_rotation(target);
        let factor = self
            .config
            .smoothing
            .factor(self.config.turn_smoothing, dt_ms);
        let rotation = current.slerp(relative, factor).normalize();
        body.set_rotation(rotation);
        (rotation, target)
    }

    fn translate(&self, input: &InputState, rotation: Quat, body: &mut impl AvatarBody) -> Vec3 {
        let mut movement = if input.is_moving() {
            forward_of(rotation) * self.speed(input.is_running)
        } else {
            Vec3::ZERO
        };
        movement.y = self.jump.velocity;

        body.move_with_collisions(movement);
        body.set_linear_velocity(movement);
        movement
    }
}
