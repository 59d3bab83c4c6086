//! Capabilities the character controller needs from the host scene
//!
//! The controller only ever sees these traits. The demo host backs them with
//! Rapier and the animation library; tests back them with plain structs.

use glam::{Quat, Vec3};

/// Handle to a named animation clip owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClipId(pub u32);

/// The avatar's transform and physics body
pub trait AvatarBody {
    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    /// Displace the avatar without penetrating collidable obstacles
    fn move_with_collisions(&mut self, displacement: Vec3);

    /// Set the attached physics body's linear velocity
    fn set_linear_velocity(&mut self, velocity: Vec3);
}

/// Read-only view of the orbit camera
pub trait CameraView {
    /// Horizontal orbit angle in radians
    fn alpha(&self) -> f32;

    /// Orientation the avatar's heading is composed against
    fn orientation(&self) -> Quat;
}

/// Named clip playback
pub trait ClipPlayer {
    fn play(&mut self, clip: ClipId, looping: bool);

    fn stop(&mut self, clip: ClipId);
}
