//! Animation groups for orbitwalk
//!
//! Clips are opaque named groups with a duration: the character controller
//! only starts them looping and stops them. `AnimationLibrary` owns them and
//! implements `ClipPlayer` so the controller can address clips by `ClipId`.

pub mod clip;
pub mod group;
pub mod library;

pub use clip::ClipDef;
pub use group::AnimationGroup;
pub use library::AnimationLibrary;
