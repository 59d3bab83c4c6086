//! On-screen virtual joysticks for touch devices
//!
//! Each stick is anchored where its touch starts. The displacement is the
//! pointer offset from that anchor, scaled by `sensibility / 1000`, with the
//! screen Y axis flipped so that dragging up is positive.

use glam::Vec2;

/// Which half of the screen a stick owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickSide {
    Left,
    Right,
}

/// Read-only snapshot of a stick for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StickReading {
    pub pressed: bool,
    pub delta: Vec2,
}

/// A single virtual joystick
#[derive(Debug, Clone)]
pub struct VirtualJoystick {
    side: StickSide,
    sensibility: f32,
    touch_id: Option<u64>,
    start: Vec2,
    delta: Vec2,
}

impl VirtualJoystick {
    pub fn new(side: StickSide, sensibility: f32) -> Self {
        Self {
            side,
            sensibility,
            touch_id: None,
            start: Vec2::ZERO,
            delta: Vec2::ZERO,
        }
    }

    pub fn side(&self) -> StickSide {
        self.side
    }

    pub fn is_pressed(&self) -> bool {
        self.touch_id.is_some()
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub fn reading(&self) -> StickReading {
        StickReading {
            pressed: self.is_pressed(),
            delta: self.delta,
        }
    }

    /// Does this stick own the given touch?
    pub fn owns(&self, touch_id: u64) -> bool {
        self.touch_id == Some(touch_id)
    }

    /// Anchor the stick at `position` (screen pixels). Ignored while another touch holds it.
    pub fn touch_start(&mut self, touch_id: u64, position: Vec2) -> bool {
        if self.touch_id.is_some() {
            return false;
        }
        self.touch_id = Some(touch_id);
        self.start = position;
        self.delta = Vec2::ZERO;
        true
    }

    pub fn touch_move(&mut self, touch_id: u64, position: Vec2) {
        if !self.owns(touch_id) {
            return;
        }
        let scale = self.sensibility / 1000.0;
        self.delta = Vec2::new(
            (position.x - self.start.x) * scale,
            -(position.y - self.start.y) * scale,
        );
    }

    pub fn touch_end(&mut self, touch_id: u64) {
        if !self.owns(touch_id) {
            return;
        }
        self.touch_id = None;
        self.delta = Vec2::ZERO;
    }
}

/// Left (movement) and right (camera) sticks splitting the screen in half
#[derive(Debug, Clone)]
pub struct JoystickPair {
    pub left: VirtualJoystick,
    pub right: VirtualJoystick,
    screen_width: f32,
}

impl JoystickPair {
    pub fn new(screen_width: f32, sensibility: f32) -> Self {
        Self {
            left: VirtualJoystick::new(StickSide::Left, sensibility),
            right: VirtualJoystick::new(StickSide::Right, sensibility),
            screen_width,
        }
    }

    /// Route a new touch to the stick owning that half of the screen
    pub fn touch_start(&mut self, touch_id: u64, position: Vec2) -> Option<StickSide> {
        let stick = if position.x < self.screen_width * 0.5 {
            &mut self.left
        } else {
            &mut self.right
        };
        stick.touch_start(touch_id, position).then(|| stick.side())
    }

    pub fn touch_move(&mut self, touch_id: u64, position: Vec2) {
        self.left.touch_move(touch_id, position);
        self.right.touch_move(touch_id, position);
    }

    pub fn touch_end(&mut self, touch_id: u64) {
        self.left.touch_end(touch_id);
        self.right.touch_end(touch_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_scales_by_sensibility() {
        let mut stick = VirtualJoystick::new(StickSide::Left, 0.5);
        assert!(stick.touch_start(1, Vec2::new(100.0, 100.0)));
        stick.touch_move(1, Vec2::new(140.0, 60.0));
        let d = stick.delta();
        // 40px right, 40px up at 0.5/1000 per pixel
        assert!((d.x - 0.02).abs() < 1e-6);
        assert!((d.y - 0.02).abs() < 1e-6);
    }

    #[test]
    fn release_resets_delta() {
        let mut stick = VirtualJoystick::new(StickSide::Left, 0.5);
        stick.touch_start(7, Vec2::ZERO);
        stick.touch_move(7, Vec2::new(50.0, 0.0));
        stick.touch_end(7);
        assert!(!stick.is_pressed());
        assert_eq!(stick.delta(), Vec2::ZERO);
    }

    #[test]
    fn foreign_touches_are_ignored() {
        let mut stick = VirtualJoystick::new(StickSide::Left, 0.5);
        stick.touch_start(1, Vec2::ZERO);
        assert!(!stick.touch_start(2, Vec2::new(10.0, 10.0)));
        stick.touch_move(2, Vec2::new(500.0, 0.0));
        assert_eq!(stick.delta(), Vec2::ZERO);
        stick.touch_end(2);
        assert!(stick.is_pressed());
    }

    #[test]
    fn pair_routes_by_screen_half() {
        let mut pair = JoystickPair::new(800.0, 0.5);
        assert_eq!(pair.touch_start(1, Vec2::new(100.0, 300.0)), Some(StickSide::Left));
        assert_eq!(pair.touch_start(2, Vec2::new(700.0, 300.0)), Some(StickSide::Right));
        assert!(pair.left.is_pressed());
        assert!(pair.right.is_pressed());

        pair.touch_move(2, Vec2::new(720.0, 300.0));
        assert!(pair.right.delta().x > 0.0);
        assert_eq!(pair.left.delta(), Vec2::ZERO);

        pair.touch_end(1);
        assert!(!pair.left.is_pressed());
        assert!(pair.right.is_pressed());
    }
}
