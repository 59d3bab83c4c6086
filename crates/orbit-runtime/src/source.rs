//! Input source capability
//!
//! `InputState` never talks to devices directly. It reads an `InputSource`,
//! which the host fills from window/touch events, and tests replace with a
//! scripted fake.

use crate::device::DeviceClass;
use crate::joystick::{JoystickPair, StickReading, StickSide};
use crate::keys::{Action, KeyState};
use glam::Vec2;
use winit::keyboard::KeyCode;

/// Raw device state queried once per frame
pub trait InputSource {
    /// Is any key bound to `action` held?
    fn is_action_down(&self, action: Action) -> bool;

    /// Session device class, fixed for the lifetime of the source
    fn device_class(&self) -> DeviceClass;

    /// Movement stick, `None` when no joysticks are wired
    fn left_stick(&self) -> Option<StickReading>;

    /// Camera stick, `None` when no joysticks are wired
    fn right_stick(&self) -> Option<StickReading>;

    /// Pointer drag accumulated since the last frame (pixels)
    fn pointer_drag(&self) -> Vec2 {
        Vec2::ZERO
    }
}

/// Concrete input source fed by host window and touch events
pub struct DeviceInput {
    pub keys: KeyState,
    device: DeviceClass,
    joysticks: Option<JoystickPair>,
    pointer_down: bool,
    pointer_drag: Vec2,
}

impl DeviceInput {
    /// Wire keyboard input, plus a joystick pair on touch devices
    pub fn new(device: DeviceClass, keys: KeyState, screen_width: f32, sensibility: f32) -> Self {
        let joysticks = device
            .is_touch()
            .then(|| JoystickPair::new(screen_width, sensibility));
        if joysticks.is_some() {
            log::info!("Touch device detected, virtual joysticks enabled");
        }
        Self {
            keys,
            device,
            joysticks,
            pointer_down: false,
            pointer_drag: Vec2::ZERO,
        }
    }

    pub fn desktop() -> Self {
        Self::new(DeviceClass::Desktop, KeyState::new(), 0.0, 0.0)
    }

    pub fn joysticks(&self) -> Option<&JoystickPair> {
        self.joysticks.as_ref()
    }

    pub fn joysticks_mut(&mut self) -> Option<&mut JoystickPair> {
        self.joysticks.as_mut()
    }

    pub fn process_key_down(&mut self, key: KeyCode) {
        self.keys.process_key_down(key);
    }

    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys.process_key_up(key);
    }

    pub fn process_pointer_down(&mut self) {
        self.pointer_down = true;
    }

    pub fn process_pointer_up(&mut self) {
        self.pointer_down = false;
    }

    /// Pointer motion in pixels; only counts while the pointer is held
    pub fn process_pointer_move(&mut self, dx: f32, dy: f32) {
        if self.pointer_down {
            self.pointer_drag += Vec2::new(dx, dy);
        }
    }

    pub fn touch_start(&mut self, touch_id: u64, position: Vec2) -> Option<StickSide> {
        self.joysticks
            .as_mut()
            .and_then(|pair| pair.touch_start(touch_id, position))
    }

    pub fn touch_move(&mut self, touch_id: u64, position: Vec2) {
        if let Some(pair) = self.joysticks.as_mut() {
            pair.touch_move(touch_id, position);
        }
    }

    pub fn touch_end(&mut self, touch_id: u64) {
        if let Some(pair) = self.joysticks.as_mut() {
            pair.touch_end(touch_id);
        }
    }

    /// Clear the pointer drag accumulated this frame
    pub fn end_frame(&mut self) {
        self.pointer_drag = Vec2::ZERO;
    }
}

impl InputSource for DeviceInput {
    fn is_action_down(&self, action: Action) -> bool {
        self.keys.is_action_down(action)
    }

    fn device_class(&self) -> DeviceClass {
        self.device
    }

    fn left_stick(&self) -> Option<StickReading> {
        self.joysticks.as_ref().map(|pair| pair.left.reading())
    }

    fn right_stick(&self) -> Option<StickReading> {
        self.joysticks.as_ref().map(|pair| pair.right.reading())
    }

    fn pointer_drag(&self) -> Vec2 {
        self.pointer_drag
    }
}
