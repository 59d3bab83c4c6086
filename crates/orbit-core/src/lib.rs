//! Orbit Core - Foundational types for orbitwalk
//!
//! This crate provides what every other orbitwalk crate depends on:
//! - `OrbitError` and the `Result` alias
//! - Host capability traits (`AvatarBody`, `CameraView`, `ClipPlayer`)
//! - Yaw/quaternion helpers shared by the controller and the physics host
//! - `Smoothing` - per-frame or time-scaled exponential smoothing

mod error;
pub mod host;
pub mod math;
mod smoothing;

pub use error::{OrbitError, Result};
pub use host::{AvatarBody, CameraView, ClipId, ClipPlayer};
pub use smoothing::Smoothing;
