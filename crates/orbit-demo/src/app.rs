//! Headless host loop
//!
//! Owns the scene, its frame scheduler and the clock. Each frame advances the
//! clock, runs the before-render callbacks, then clears per-frame input.

use crate::scene::Scene;
use crate::script::{ScriptDriver, ScriptFile, ScriptStep};
use orbit_runtime::{FrameClock, FrameScheduler};

pub struct DemoApp {
    pub scene: Scene,
    pub clock: FrameClock,
    scheduler: FrameScheduler<Scene>,
    screen_width: f32,
}

impl DemoApp {
    pub fn new(scene: Scene, screen_width: f32) -> Self {
        let mut scheduler = FrameScheduler::new();
        Scene::install(&mut scheduler);
        Self {
            scene,
            clock: FrameClock::new(),
            scheduler,
            screen_width,
        }
    }

    /// Run one frame of `dt_ms` milliseconds. Returns the delta actually used.
    pub fn frame(&mut self, dt_ms: f64) -> f64 {
        let dt = self.clock.advance_by(dt_ms);
        self.scheduler.run_frame(&mut self.scene, dt);
        self.scene.input_source.end_frame();
        dt
    }

    /// Play a script at a fixed frame length, calling `on_frame` after each
    /// frame. Stops after `limit` frames if given; idles once the script ends.
    pub fn play(
        &mut self,
        script: &ScriptFile,
        frame_ms: f64,
        limit: Option<u64>,
        mut on_frame: impl FnMut(&DemoApp),
    ) -> u64 {
        let total = limit.unwrap_or_else(|| script.total_frames());
        let mut driver = ScriptDriver::new();
        let mut steps = script.frames();
        let idle = ScriptStep::default();

        for _ in 0..total {
            let step = steps.next().unwrap_or(&idle);
            driver.apply(step, &mut self.scene.input_source, self.screen_width);
            self.frame(frame_ms);
            on_frame(&*self);
        }
        total
    }

    /// One-line summary of the last frame
    pub fn status_line(&self) -> String {
        let scene = &self.scene;
        let p = scene.avatar.position();
        let yaw = orbit_core::math::yaw_of(scene.avatar.rotation());
        let anim = scene
            .controller
            .current_animation()
            .map(|tag| tag.clip_name())
            .unwrap_or("-");
        let (velocity, jumping) = scene
            .last_report
            .as_ref()
            .map(|r| (r.velocity, r.jumping))
            .unwrap_or((0.0, false));
        format!(
            "frame {:>5} t={:>8.1}ms pos=({:>7.3}, {:>6.3}, {:>7.3}) yaw={:>6.3} v={:>6.3}{} anim={} cam=({:.3}, {:.3})",
            self.clock.frame,
            self.clock.total_ms,
            p.x,
            p.y,
            p.z,
            yaw,
            velocity,
            if jumping { " jump" } else { "" },
            anim,
            scene.camera.alpha,
            scene.camera.beta,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;

    fn app() -> DemoApp {
        let config = SceneConfig::parse(
            r#"
            [[object]]
            name = "ground"
            center = [0.0, -0.5, 0.0]
            size = [60.0, 1.0, 60.0]

            [[clip]]
            name = "IDLE"
            duration = 2.0

            [[clip]]
            name = "WALKING"
            duration = 1.0
            "#,
        )
        .unwrap();
        let width = config.screen_width;
        DemoApp::new(Scene::build(&config).unwrap(), width)
    }

    #[test]
    fn test_frame_advances_clock() {
        let mut app = app();
        assert_eq!(app.frame(16.0), 16.0);
        assert_eq!(app.frame(1000.0), 250.0);
        assert_eq!(app.clock.frame, 2);
        assert!(app.scene.last_report.is_some());
    }

    #[test]
    fn test_play_script() {
        let mut app = app();
        let script = ScriptFile::parse(
            r#"
            [[step]]
            frames = 20
            keys = ["w"]

            [[step]]
            frames = 5
            "#,
        )
        .unwrap();

        let mut lines = Vec::new();
        let frames = app.play(&script, 16.0, None, |app| lines.push(app.status_line()));
        assert_eq!(frames, 25);
        assert_eq!(lines.len(), 25);
        assert!(lines[0].contains("anim=WALKING"));
        assert!(lines[24].contains("anim=IDLE"));
        assert!(app.scene.avatar.position().x < -1.5);
    }

    #[test]
    fn test_play_limit_idles_past_script_end() {
        let mut app = app();
        let script = ScriptFile::parse("[[step]]\nframes = 2\nkeys = [\"d\"]\n").unwrap();
        assert_eq!(app.play(&script, 16.0, Some(6), |_| {}), 6);
        assert!(!app.scene.input.is_moving());
    }

    #[test]
    fn test_pointer_drag_orbits_camera() {
        let mut app = app();
        let script =
            ScriptFile::parse("[[step]]\nframes = 1\npointer_drag = [100.0, 0.0]\n").unwrap();
        app.play(&script, 16.0, None, |_| {});
        assert!(app.scene.camera.alpha < -0.05);
    }
}
