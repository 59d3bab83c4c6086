//! Orbit Runtime - input and frame loop infrastructure
//!
//! Provides the per-frame building blocks the character controller runs on:
//! - `KeyState`: keyboard tracking with action bindings
//! - `VirtualJoystick` / `JoystickPair`: on-screen sticks for touch devices
//! - `DeviceClass`: one-time desktop/touch classification
//! - `InputSource` / `DeviceInput`: the device capability `InputState` reads
//! - `InputState`: smoothed movement intent refreshed once per frame
//! - `OrbitCamera`: arc-rotate camera with inertial orbit offsets
//! - `FrameClock` / `FrameScheduler`: frame timing and before-render callbacks

mod camera;
mod clock;
mod config;
mod device;
mod input;
mod joystick;
mod keys;
mod schedule;
mod source;

pub use camera::{OrbitCamera, OrbitDelta};
pub use clock::FrameClock;
pub use config::{Bindings, CameraConfig, InputConfig};
pub use device::DeviceClass;
pub use input::InputState;
pub use joystick::{JoystickPair, StickReading, StickSide, VirtualJoystick};
pub use keys::{parse_key, Action, KeyState};
pub use schedule::{CallbackId, FrameScheduler};
pub use source::{DeviceInput, InputSource};
