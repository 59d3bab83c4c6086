//! Frame-coherent movement intent
//!
//! `InputState` turns raw device state into what the character controller
//! reads each frame: smoothed axes in [-1, 1], discrete axis signs, jump and
//! run flags, and a camera orbit request.

use crate::camera::OrbitDelta;
use crate::config::InputConfig;
use crate::joystick::StickReading;
use crate::keys::Action;
use crate::source::InputSource;
use orbit_core::math::lerp;
use orbit_core::Smoothing;

/// Smoothed movement/camera intent, refreshed once before each frame
#[derive(Debug, Clone)]
pub struct InputState {
    /// Smoothed left/right axis, -1 is left
    pub horizontal: f32,
    /// Smoothed backward/forward axis, 1 is forward
    pub vertical: f32,
    /// Sign currently driving `horizontal`
    pub horizontal_axis: i8,
    /// Sign currently driving `vertical`
    pub vertical_axis: i8,
    pub jump_key_down: bool,
    pub is_running: bool,
    axis_smoothing: f32,
    smoothing: Smoothing,
    joystick_max_delta: f32,
    orbit_damping: f32,
    pointer_sensibility: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}

impl InputState {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            horizontal: 0.0,
            vertical: 0.0,
            horizontal_axis: 0,
            vertical_axis: 0,
            jump_key_down: false,
            is_running: false,
            axis_smoothing: config.axis_smoothing,
            smoothing: config.smoothing,
            joystick_max_delta: config.joystick_max_delta,
            orbit_damping: config.orbit_damping,
            pointer_sensibility: config.pointer_sensibility,
        }
    }

    /// True while either smoothed axis is non-zero
    pub fn is_moving(&self) -> bool {
        self.horizontal != 0.0 || self.vertical != 0.0
    }

    /// Recompute intent from the source. Returns the camera orbit requested this frame.
    ///
    /// Keyboard runs first; on touch devices the left stick then overrides the
    /// movement axes.
    pub fn refresh(&mut self, source: &impl InputSource, dt_ms: f64) -> OrbitDelta {
        let factor = self.smoothing.factor(self.axis_smoothing, dt_ms);
        let mut orbit = OrbitDelta::default();

        self.update_from_keyboard(source, factor);
        if source.device_class().is_touch() {
            if let (Some(left), Some(right)) = (source.left_stick(), source.right_stick()) {
                self.update_from_joysticks(left, right, factor, &mut orbit);
            }
        } else {
            let drag = source.pointer_drag();
            orbit.alpha -= drag.x / self.pointer_sensibility;
            orbit.beta -= drag.y / self.pointer_sensibility;
        }

        log::trace!(
            "input h={:.3}({}) v={:.3}({}) jump={} run={}",
            self.horizontal,
            self.horizontal_axis,
            self.vertical,
            self.vertical_axis,
            self.jump_key_down,
            self.is_running
        );
        orbit
    }

    fn update_from_keyboard(&mut self, source: &impl InputSource, factor: f32) {
        self.vertical_axis = key_axis(source, Action::Backward, Action::Forward);
        self.vertical = smooth_toward(self.vertical, self.vertical_axis, factor);

        self.horizontal_axis = key_axis(source, Action::Left, Action::Right);
        self.horizontal = smooth_toward(self.horizontal, self.horizontal_axis, factor);

        self.jump_key_down = source.is_action_down(Action::Jump);
        self.is_running = source.is_action_down(Action::Run);
    }

    fn update_from_joysticks(
        &mut self,
        left: StickReading,
        right: StickReading,
        factor: f32,
        orbit: &mut OrbitDelta,
    ) {
        if left.pressed {
            let dead_zone = self.joystick_max_delta / 2.0;
            self.horizontal_axis = stick_axis(left.delta.x, dead_zone);
            self.horizontal = smooth_toward(self.horizontal, self.horizontal_axis, factor);
            self.vertical_axis = stick_axis(left.delta.y, dead_zone);
            self.vertical = smooth_toward(self.vertical, self.vertical_axis, factor);
        } else {
            self.horizontal = 0.0;
            self.horizontal_axis = 0;
            self.vertical = 0.0;
            self.vertical_axis = 0;
        }

        if right.pressed {
            orbit.alpha -= right.delta.x / self.orbit_damping;
            orbit.beta += right.delta.y / self.orbit_damping;
        }
    }
}

/// -1, 0 or 1 from a pair of opposing actions; both held cancels out
fn key_axis(source: &impl InputSource, negative: Action, positive: Action) -> i8 {
    match (source.is_action_down(negative), source.is_action_down(positive)) {
        (true, false) => -1,
        (false, true) => 1,
        _ => 0,
    }
}

/// Sign of a stick displacement outside the dead zone, 0 inside it
fn stick_axis(delta: f32, dead_zone: f32) -> i8 {
    if delta > dead_zone {
        1
    } else if delta < -dead_zone {
        -1
    } else {
        0
    }
}

/// Lerp toward a held direction; a released axis snaps back to rest
fn smooth_toward(value: f32, axis: i8, factor: f32) -> f32 {
    if axis == 0 {
        0.0
    } else {
        lerp(value, axis as f32, factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceClass;
    use glam::Vec2;
    use std::collections::HashSet;

    #[derive(Default)]
    struct FakeSource {
        held: HashSet<Action>,
        touch: bool,
        left: StickReading,
        right: StickReading,
        drag: Vec2,
    }

    impl FakeSource {
        fn holding(actions: &[Action]) -> Self {
            Self {
                held: actions.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl InputSource for FakeSource {
        fn is_action_down(&self, action: Action) -> bool {
            self.held.contains(&action)
        }
        fn device_class(&self) -> DeviceClass {
            if self.touch {
                DeviceClass::Touch
            } else {
                DeviceClass::Desktop
            }
        }
        fn left_stick(&self) -> Option<StickReading> {
            self.touch.then_some(self.left)
        }
        fn right_stick(&self) -> Option<StickReading> {
            self.touch.then_some(self.right)
        }
        fn pointer_drag(&self) -> Vec2 {
            self.drag
        }
    }

    #[test]
    fn forward_lerps_toward_one() {
        let mut input = InputState::default();
        let source = FakeSource::holding(&[Action::Forward]);

        input.refresh(&source, 16.0);
        assert!((input.vertical - 0.2).abs() < 1e-6);
        assert_eq!(input.vertical_axis, 1);
        assert!(input.is_moving());

        input.refresh(&source, 16.0);
        assert!((input.vertical - 0.36).abs() < 1e-6);

        let mut previous = input.vertical;
        for _ in 0..100 {
            input.refresh(&source, 16.0);
            assert!(input.vertical >= previous);
            previous = input.vertical;
        }
        assert!((1.0 - input.vertical) < 1e-4);
    }

    #[test]
    fn left_is_negative() {
        let mut input = InputState::default();
        input.refresh(&FakeSource::holding(&[Action::Left]), 16.0);
        assert_eq!(input.horizontal_axis, -1);
        assert!((input.horizontal + 0.2).abs() < 1e-6);

        input.refresh(&FakeSource::holding(&[Action::Right]), 16.0);
        assert_eq!(input.horizontal_axis, 1);
        // reversal lerps from the previous value, not from zero
        assert!((input.horizontal - 0.04).abs() < 1e-6);
    }

    #[test]
    fn release_snaps_to_rest() {
        let mut input = InputState::default();
        let source = FakeSource::holding(&[Action::Forward, Action::Right]);
        for _ in 0..5 {
            input.refresh(&source, 16.0);
        }
        input.refresh(&FakeSource::default(), 16.0);
        assert_eq!(input.vertical, 0.0);
        assert_eq!(input.horizontal, 0.0);
        assert_eq!(input.vertical_axis, 0);
        assert!(!input.is_moving());
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut input = InputState::default();
        input.refresh(&FakeSource::holding(&[Action::Forward, Action::Backward]), 16.0);
        assert_eq!(input.vertical_axis, 0);
        assert_eq!(input.vertical, 0.0);
    }

    #[test]
    fn jump_and_run_are_direct() {
        let mut input = InputState::default();
        input.refresh(&FakeSource::holding(&[Action::Jump, Action::Run]), 16.0);
        assert!(input.jump_key_down);
        assert!(input.is_running);
        assert!(!input.is_moving());

        input.refresh(&FakeSource::default(), 16.0);
        assert!(!input.jump_key_down);
        assert!(!input.is_running);
    }

    #[test]
    fn stick_dead_zone() {
        let mut input = InputState::default();
        let mut source = FakeSource {
            touch: true,
            ..FakeSource::default()
        };
        source.left = StickReading {
            pressed: true,
            delta: Vec2::new(0.005, 0.03),
        };
        input.refresh(&source, 16.0);
        assert_eq!(input.horizontal_axis, 0);
        assert_eq!(input.horizontal, 0.0);
        assert_eq!(input.vertical_axis, 1);
        assert!((input.vertical - 0.2).abs() < 1e-6);

        source.left.delta = Vec2::new(-0.011, -0.011);
        input.refresh(&source, 16.0);
        assert_eq!(input.horizontal_axis, -1);
        assert_eq!(input.vertical_axis, -1);
    }

    #[test]
    fn stick_overrides_keyboard_on_touch() {
        let mut input = InputState::default();
        let mut source = FakeSource::holding(&[Action::Forward]);
        source.touch = true;
        // stick released: movement cleared even though a key is held
        input.refresh(&source, 16.0);
        assert_eq!(input.vertical_axis, 0);
        assert!(!input.is_moving());
    }

    #[test]
    fn camera_stick_orbits_without_dead_zone() {
        let mut input = InputState::default();
        let mut source = FakeSource {
            touch: true,
            ..FakeSource::default()
        };
        source.right = StickReading {
            pressed: true,
            delta: Vec2::new(0.001, -0.002),
        };
        let orbit = input.refresh(&source, 16.0);
        assert!((orbit.alpha + 0.0002).abs() < 1e-7);
        assert!((orbit.beta + 0.0004).abs() < 1e-7);
    }

    #[test]
    fn desktop_pointer_drag_orbits() {
        let mut input = InputState::default();
        let source = FakeSource {
            drag: Vec2::new(100.0, -50.0),
            ..FakeSource::default()
        };
        let orbit = input.refresh(&source, 16.0);
        assert!((orbit.alpha + 0.1).abs() < 1e-6);
        assert!((orbit.beta - 0.05).abs() < 1e-6);
    }

    #[test]
    fn time_scaled_smoothing_uses_dt() {
        let config = InputConfig {
            smoothing: Smoothing::TimeScaled {
                reference_frame_ms: 16.0,
            },
            ..InputConfig::default()
        };
        let mut input = InputState::new(&config);
        input.refresh(&FakeSource::holding(&[Action::Forward]), 32.0);
        assert!((input.vertical - 0.36).abs() < 1e-5);
    }
}
