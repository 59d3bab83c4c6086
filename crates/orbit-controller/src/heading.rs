//! Camera-relative target heading

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Yaw the avatar should turn toward for the held direction.
///
/// Directions are relative to the camera: with the camera at `alpha`, straight
/// ahead is `-alpha - pi/2`. `horizontal` is -1 for left, `vertical` 1 for
/// forward. Yaw grows counter-clockwise seen from above, so the camera's left
/// is `forward + pi/2`. With nothing held the avatar keeps `current_yaw`.
pub fn target_yaw(camera_alpha: f32, horizontal: i8, vertical: i8, current_yaw: f32) -> f32 {
    let forward = -camera_alpha - FRAC_PI_2;
    let backward = forward + PI;

    match (horizontal.signum(), vertical.signum()) {
        (-1, 1) => forward + FRAC_PI_4,
        (1, 1) => forward - FRAC_PI_4,
        (-1, -1) => backward - FRAC_PI_4,
        (1, -1) => backward + FRAC_PI_4,
        (-1, 0) => forward + FRAC_PI_2,
        (1, 0) => forward - FRAC_PI_2,
        (0, 1) => forward,
        (0, -1) => backward,
        _ => current_yaw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_cardinal_directions() {
        let f = -FRAC_PI_2;
        assert!(close(target_yaw(0.0, 0, 1, 9.0), f));
        assert!(close(target_yaw(0.0, 0, -1, 9.0), f + PI));
        assert!(close(target_yaw(0.0, -1, 0, 9.0), f + FRAC_PI_2));
        assert!(close(target_yaw(0.0, 1, 0, 9.0), f - FRAC_PI_2));
    }

    #[test]
    fn test_diagonals() {
        let f = -FRAC_PI_2;
        assert!(close(target_yaw(0.0, -1, 1, 0.0), f + FRAC_PI_4));
        assert!(close(target_yaw(0.0, 1, 1, 0.0), f - FRAC_PI_4));
        assert!(close(target_yaw(0.0, -1, -1, 0.0), f + PI - FRAC_PI_4));
        assert!(close(target_yaw(0.0, 1, -1, 0.0), f + PI + FRAC_PI_4));
    }

    #[test]
    fn test_follows_camera_alpha() {
        let alpha = 0.75;
        assert!(close(target_yaw(alpha, 0, 1, 0.0), -alpha - FRAC_PI_2));
        assert!(close(target_yaw(alpha, 1, 0, 0.0), -alpha - PI));
    }

    #[test]
    fn test_left_is_counter_clockwise_of_forward() {
        use orbit_core::math::{forward_of, yaw_rotation};
        for alpha in [0.0_f32, 0.9, -2.0] {
            let ahead = forward_of(yaw_rotation(target_yaw(alpha, 0, 1, 0.0)));
            let left = forward_of(yaw_rotation(target_yaw(alpha, -1, 0, 0.0)));
            // right-handed: forward x left points up
            assert!(ahead.cross(left).y > 0.99, "alpha = {}", alpha);
        }
    }

    #[test]
    fn test_idle_keeps_current_yaw() {
        assert!(close(target_yaw(1.0, 0, 0, 0.3), 0.3));
    }
}
