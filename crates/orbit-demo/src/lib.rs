//! Orbit Demo - headless scene host
//!
//! Builds a scene from a TOML file (environment boxes, avatar capsule, clips),
//! wires the frame callbacks and plays scripted input through it.

mod app;
pub mod config;
pub mod scene;
pub mod script;

pub use app::DemoApp;
pub use config::SceneConfig;
pub use scene::Scene;
pub use script::{ScriptDriver, ScriptFile, ScriptStep};
