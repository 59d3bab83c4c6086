//! Angle and orientation helpers
//!
//! Rotations are yaw-only: the avatar turns about +Y and walks along its
//! local +Z axis.

use glam::{EulerRot, Quat, Vec3};

/// The avatar's local forward axis
pub const LOCAL_FORWARD: Vec3 = Vec3::Z;

/// Linear interpolation between two scalars
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quaternion for a rotation of `yaw` radians about +Y (zero pitch and roll)
pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_y(yaw)
}

/// Y Euler angle of an orientation, in radians within [-pi, pi]
pub fn yaw_of(rotation: Quat) -> f32 {
    let (yaw, _pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
    yaw
}

/// Direction the avatar walks in for a given orientation
pub fn forward_of(rotation: Quat) -> Vec3 {
    rotation * LOCAL_FORWARD
}
