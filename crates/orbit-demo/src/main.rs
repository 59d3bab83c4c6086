//! Orbit Demo - headless third-person scene runner
//!
//! Builds a scene and plays scripted input through the character controller,
//! printing one line per frame.
//!
//! Usage:
//!   orbit-demo <scene.toml> [--script <file>] [--frames N] [--frame-ms 16]

use anyhow::{Context, Result};
use clap::Parser;
use orbit_demo::{DemoApp, Scene, SceneConfig, ScriptFile};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orbit-demo")]
#[command(about = "Run a third-person scene headless with scripted input")]
struct Args {
    /// Path to scene file
    scene: PathBuf,

    /// Input script to play
    #[arg(long)]
    script: Option<PathBuf>,

    /// Number of frames to run (defaults to the script length)
    #[arg(long)]
    frames: Option<u64>,

    /// Frame length in milliseconds
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SceneConfig::load(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let script = match &args.script {
        Some(path) => ScriptFile::load(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?,
        None => ScriptFile::default(),
    };
    let frames = args.frames.or_else(|| {
        if script.steps.is_empty() {
            Some(60)
        } else {
            None
        }
    });

    let scene = Scene::build(&config).context("Failed to build scene")?;

    println!("Loaded scene: {}", config.name);
    println!("Objects: {}", scene.environment.len());
    println!("Clips: {}", scene.clips.len());
    println!();

    let mut app = DemoApp::new(scene, config.screen_width);
    let ran = app.play(&script, args.frame_ms, frames, |app| {
        println!("{}", app.status_line());
    });

    println!();
    println!("Ran {} frames ({:.1} ms)", ran, app.clock.total_ms);
    Ok(())
}
