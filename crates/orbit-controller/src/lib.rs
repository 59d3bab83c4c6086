//! Orbit Controller - third-person character movement
//!
//! Turns an `InputState` into avatar rotation, collision-aware translation,
//! jump arcs and idle/walk/run clip switching.

pub mod animation_state;
pub mod character;
pub mod config;
pub mod heading;
pub mod jump;

pub use animation_state::{AnimTag, AnimationSelector, ClipSlots, Transition};
pub use character::{CharacterController, FrameReport};
pub use config::ControllerConfig;
pub use heading::target_yaw;
pub use jump::JumpState;
