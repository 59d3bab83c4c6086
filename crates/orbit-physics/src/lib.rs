//! Orbit Physics - Rapier 3D integration
//!
//! - `PhysicsWorld` wraps the Rapier pipeline and body/collider sets
//! - `Environment` turns named scene objects into static colliders
//! - `Avatar` is the player capsule, moved by collision-aware sweeps

pub mod avatar;
pub mod environment;
pub mod world;

pub use avatar::{Avatar, AvatarShape, BoundAvatar};
pub use environment::{ColliderClass, Environment, EnvironmentObject};
pub use world::PhysicsWorld;
