//! Scene bootstrap and the per-frame callbacks that drive it

use crate::config::SceneConfig;
use glam::Vec3;
use orbit_animation::AnimationLibrary;
use orbit_controller::{AnimTag, CharacterController, ClipSlots, FrameReport};
use orbit_core::{OrbitError, Result};
use orbit_physics::{Avatar, Environment, PhysicsWorld};
use orbit_runtime::{DeviceClass, DeviceInput, FrameScheduler, InputState, OrbitCamera};
use rapier3d::prelude::CollisionEvent;

/// Everything one running scene owns
pub struct Scene {
    pub name: String,
    pub physics: PhysicsWorld,
    pub environment: Environment,
    pub avatar: Avatar,
    pub camera: OrbitCamera,
    pub clips: AnimationLibrary,
    pub input_source: DeviceInput,
    pub input: InputState,
    pub controller: CharacterController,
    /// Result of the last controller update
    pub last_report: Option<FrameReport>,
    /// Names of environment objects the avatar is touching
    pub touching: Vec<String>,
}

impl Scene {
    pub fn build(config: &SceneConfig) -> Result<Self> {
        let mut physics = PhysicsWorld::new();

        let mut environment = Environment::new();
        for object in &config.objects {
            environment.add_box(
                &mut physics,
                &object.name,
                Vec3::from(object.center),
                Vec3::from(object.size),
            )?;
        }
        physics.refresh_queries();

        let mut clips = AnimationLibrary::from_defs(&config.clips)?;
        clips.stop_all();
        let slots = ClipSlots {
            idle: clips.id_of(AnimTag::Idle.clip_name()),
            walking: clips.id_of(AnimTag::Walking.clip_name()),
            running: clips.id_of(AnimTag::Running.clip_name()),
        };

        let controller = CharacterController::new(config.controller.clone(), slots)?;
        let avatar = Avatar::spawn(
            &mut physics,
            config.avatar.shape(),
            Vec3::from(config.avatar.spawn),
            controller.initial_rotation(),
        )
        .map_err(|e| OrbitError::SceneError(format!("cannot create avatar: {}", e)))?;

        let mut camera = OrbitCamera::new(&config.camera);
        camera.follow(avatar.position());

        let device = config
            .user_agent
            .as_deref()
            .map(DeviceClass::from_user_agent)
            .unwrap_or_default();
        let input_source = DeviceInput::new(
            device,
            config.input.key_state()?,
            config.screen_width,
            config.input.joystick_sensibility,
        );

        log::info!(
            "Loaded scene '{}': {} objects, {} clips, {:?} input",
            config.name,
            environment.len(),
            clips.len(),
            device
        );

        Ok(Self {
            name: config.name.clone(),
            physics,
            environment,
            avatar,
            camera,
            clips,
            input_source,
            input: InputState::new(&config.input),
            controller,
            last_report: None,
            touching: Vec::new(),
        })
    }

    /// Register the frame callbacks: input first, then the character
    pub fn install(scheduler: &mut FrameScheduler<Scene>) {
        scheduler.register_before_render(Scene::refresh_input);
        scheduler.register_before_render(Scene::step_character);
    }

    /// Refresh input intent and feed the orbit request to the camera
    pub fn refresh_input(&mut self, dt_ms: f64) {
        let orbit = self.input.refresh(&self.input_source, dt_ms);
        self.camera.apply_orbit(orbit);
        self.camera.update();
    }

    /// Move the avatar, then step physics and animation
    pub fn step_character(&mut self, dt_ms: f64) {
        let dt = (dt_ms / 1000.0) as f32;
        self.avatar.set_frame_time(dt);

        let report = {
            let mut body = self.avatar.bind(&mut self.physics);
            self.controller.update(
                dt_ms,
                &self.input,
                &mut body,
                &self.camera,
                &mut self.clips,
            )
        };
        self.camera.follow(self.avatar.position());

        self.avatar.sync_body(&mut self.physics);
        self.physics.step(dt);
        self.track_contacts();

        self.clips.advance_all(dt_ms / 1000.0);
        self.last_report = Some(report);
    }

    fn track_contacts(&mut self) {
        let own = self.avatar.collider_handle();
        for event in self.physics.drain_collision_events() {
            let (a, b) = (event.collider1(), event.collider2());
            let other = if a == own {
                b
            } else if b == own {
                a
            } else {
                continue;
            };
            let Some(name) = self.environment.name_of(other) else {
                continue;
            };
            match event {
                CollisionEvent::Started(..) => {
                    log::debug!("avatar touched '{}'", name);
                    if !self.touching.iter().any(|n| n == name) {
                        self.touching.push(name.to_string());
                    }
                }
                CollisionEvent::Stopped(..) => {
                    log::debug!("avatar left '{}'", name);
                    self.touching.retain(|n| n != name);
                }
            }
        }
    }
}
