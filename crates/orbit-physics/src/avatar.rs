//! Capsule avatar: a visual pose that moves by collision-aware sweeps, with a
//! dynamic Rapier body pinned to it

use crate::world::PhysicsWorld;
use glam::{Quat, Vec3};
use orbit_core::{AvatarBody, OrbitError, Result};
use rapier3d::control::{CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;

/// Capsule dimensions and material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarShape {
    pub height: f32,
    pub radius: f32,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl Default for AvatarShape {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.4,
            mass: 1.0,
            friction: 0.5,
            restitution: 0.0,
        }
    }
}

/// The player's capsule. The pose is authoritative; the body follows it.
pub struct Avatar {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    shape: SharedShape,
    controller: KinematicCharacterController,
    position: Vec3,
    rotation: Quat,
    velocity: Vec3,
    frame_dt: f32,
}

impl Avatar {
    /// Create the capsule centred at `position`
    pub fn spawn(
        physics: &mut PhysicsWorld,
        shape: AvatarShape,
        position: Vec3,
        rotation: Quat,
    ) -> Result<Self> {
        let half_height = shape.height * 0.5 - shape.radius;
        if shape.radius <= 0.0 || half_height < 0.0 {
            return Err(OrbitError::PhysicsError(format!(
                "capsule height {} cannot hold radius {}",
                shape.height, shape.radius
            )));
        }

        let body = RigidBodyBuilder::dynamic()
            .translation(vector![position.x, position.y, position.z])
            .lock_rotations()
            .gravity_scale(0.0)
            .build();
        let body = physics.add_body(body);

        let collider = ColliderBuilder::capsule_y(half_height, shape.radius)
            .mass(shape.mass)
            .friction(shape.friction)
            .restitution(shape.restitution)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        let shape = collider.shared_shape().clone();
        let collider = physics.attach_collider(collider, body);

        // no stepping up ledges and no pull back down onto them
        let controller = KinematicCharacterController {
            offset: CharacterLength::Absolute(0.01),
            autostep: None,
            snap_to_ground: None,
            ..KinematicCharacterController::default()
        };

        Ok(Self {
            body,
            collider,
            shape,
            controller,
            position,
            rotation,
            velocity: Vec3::ZERO,
            frame_dt: 1.0 / 60.0,
        })
    }

    /// Borrow the avatar together with the world it moves in
    pub fn bind<'a>(&'a mut self, physics: &'a mut PhysicsWorld) -> BoundAvatar<'a> {
        BoundAvatar {
            avatar: self,
            physics,
        }
    }

    /// Frame length handed to the sweep, in seconds
    pub fn set_frame_time(&mut self, dt: f32) {
        if dt > 0.0 {
            self.frame_dt = dt;
        }
    }

    /// Pin the body to the pose. Call before stepping the world.
    pub fn sync_body(&self, physics: &mut PhysicsWorld) {
        if let Some(body) = physics.body_mut(self.body) {
            let p = self.position;
            body.set_translation(vector![p.x, p.y, p.z], true);
            let v = self.velocity;
            body.set_linvel(vector![v.x, v.y, v.z], true);
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn body_handle(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn collider_handle(&self) -> ColliderHandle {
        self.collider
    }

    fn sweep(&mut self, physics: &mut PhysicsWorld, displacement: Vec3) {
        let p = self.position;
        let start = Isometry::translation(p.x, p.y, p.z);
        let corrected = self.controller.move_shape(
            self.frame_dt,
            &physics.bodies,
            &physics.colliders,
            &physics.queries,
            &*self.shape,
            &start,
            vector![displacement.x, displacement.y, displacement.z],
            QueryFilter::default().exclude_rigid_body(self.body),
            |_| {},
        );
        let t = corrected.translation;
        self.position += Vec3::new(t.x, t.y, t.z);
        if let Some(body) = physics.body_mut(self.body) {
            let p = self.position;
            body.set_translation(vector![p.x, p.y, p.z], true);
        }
        log::trace!(
            "avatar at ({:.3}, {:.3}, {:.3}) grounded={}",
            self.position.x,
            self.position.y,
            self.position.z,
            corrected.grounded
        );
    }
}

/// An avatar paired with its physics world for the length of one update
pub struct BoundAvatar<'a> {
    avatar: &'a mut Avatar,
    physics: &'a mut PhysicsWorld,
}

impl AvatarBody for BoundAvatar<'_> {
    fn rotation(&self) -> Quat {
        self.avatar.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.avatar.rotation = rotation;
    }

    fn move_with_collisions(&mut self, displacement: Vec3) {
        self.avatar.sweep(self.physics, displacement);
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.avatar.velocity = velocity;
        if let Some(body) = self.physics.body_mut(self.avatar.body) {
            body.set_linvel(vector![velocity.x, velocity.y, velocity.z], true);
        }
    }
}
