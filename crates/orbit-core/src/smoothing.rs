//! Exponential smoothing policy

use serde::{Deserialize, Serialize};

/// How a per-frame smoothing factor is applied.
///
/// `PerFrame` applies the factor once per rendered frame regardless of frame
/// duration, so smoothing speed depends on frame rate. `TimeScaled` treats the
/// factor as calibrated for `reference_frame_ms` and rescales it for the
/// actual frame duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Smoothing {
    #[default]
    PerFrame,
    TimeScaled { reference_frame_ms: f64 },
}

impl Smoothing {
    /// Effective interpolation factor for a frame of `dt_ms` milliseconds
    pub fn factor(&self, base: f32, dt_ms: f64) -> f32 {
        match *self {
            Smoothing::PerFrame => base,
            Smoothing::TimeScaled { reference_frame_ms } => {
                if reference_frame_ms <= 0.0 || dt_ms <= 0.0 {
                    return if dt_ms <= 0.0 { 0.0 } else { base };
                }
                let frames = dt_ms / reference_frame_ms;
                let keep = (1.0 - base as f64).clamp(0.0, 1.0);
                (1.0 - keep.powf(frames)) as f32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_frame_ignores_dt() {
        assert_eq!(Smoothing::PerFrame.factor(0.2, 16.0), 0.2);
        assert_eq!(Smoothing::PerFrame.factor(0.2, 100.0), 0.2);
    }

    #[test]
    fn time_scaled_matches_reference_frame() {
        let s = Smoothing::TimeScaled { reference_frame_ms: 16.0 };
        assert!((s.factor(0.2, 16.0) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn time_scaled_two_frames_compose() {
        let s = Smoothing::TimeScaled { reference_frame_ms: 16.0 };
        // one 32ms frame == two 16ms frames: 1 - 0.8^2
        assert!((s.factor(0.2, 32.0) - 0.36).abs() < 1e-6);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let s = Smoothing::TimeScaled { reference_frame_ms: 16.0 };
        assert_eq!(s.factor(0.2, 0.0), 0.0);
    }

    #[test]
    fn parses_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            smoothing: Smoothing,
        }
        let w: Wrapper = toml::from_str("smoothing = \"per_frame\"").unwrap();
        assert_eq!(w.smoothing, Smoothing::PerFrame);
        let w: Wrapper =
            toml::from_str("[smoothing.time_scaled]\nreference_frame_ms = 16.0").unwrap();
        assert_eq!(w.smoothing, Smoothing::TimeScaled { reference_frame_ms: 16.0 });
    }
}
