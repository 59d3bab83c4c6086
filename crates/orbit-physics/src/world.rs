//! Rapier world the avatar and the environment live in

use crossbeam::channel::{Receiver, Sender};
use rapier3d::prelude::*;

/// Forwards collision start/stop events to a channel. Contact forces are not
/// requested by any collider, so they are ignored.
struct CollisionSink {
    sender: Sender<CollisionEvent>,
}

impl EventHandler for CollisionSink {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        let _ = self.sender.send(event);
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

/// Solver state only `step` touches
struct Solver {
    pipeline: PhysicsPipeline,
    params: IntegrationParameters,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
}

/// Bodies, colliders and the query structure sweeps read from
pub struct PhysicsWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub queries: QueryPipeline,
    gravity: Vector<Real>,
    solver: Solver,
    sink: CollisionSink,
    collisions: Receiver<CollisionEvent>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        let (sender, collisions) = crossbeam::channel::unbounded();
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            queries: QueryPipeline::new(),
            gravity: vector![0.0, -9.81, 0.0],
            solver: Solver {
                pipeline: PhysicsPipeline::new(),
                params: IntegrationParameters::default(),
                islands: IslandManager::new(),
                broad_phase: DefaultBroadPhase::new(),
                narrow_phase: NarrowPhase::new(),
                impulse_joints: ImpulseJointSet::new(),
                multibody_joints: MultibodyJointSet::new(),
                ccd: CCDSolver::new(),
            },
            sink: CollisionSink { sender },
            collisions,
        }
    }

    /// Advance by `dt` seconds. Non-positive steps are skipped.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let solver = &mut self.solver;
        solver.params.dt = dt;
        solver.pipeline.step(
            &self.gravity,
            &solver.params,
            &mut solver.islands,
            &mut solver.broad_phase,
            &mut solver.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut solver.impulse_joints,
            &mut solver.multibody_joints,
            &mut solver.ccd,
            Some(&mut self.queries),
            &(),
            &self.sink,
        );
    }

    /// Rebuild the query structure without stepping, so sweeps made before
    /// the first step see freshly inserted colliders.
    pub fn refresh_queries(&mut self) {
        self.queries.update(&self.colliders);
    }

    /// Collision starts and stops reported since the last drain
    pub fn drain_collision_events(&self) -> Vec<CollisionEvent> {
        self.collisions.try_iter().collect()
    }

    pub fn add_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.bodies.insert(body)
    }

    pub fn attach_collider(
        &mut self,
        collider: Collider,
        parent: RigidBodyHandle,
    ) -> ColliderHandle {
        self.colliders.insert_with_parent(collider, parent, &mut self.bodies)
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(world: &mut PhysicsWorld) -> ColliderHandle {
        let body = world.add_body(
            RigidBodyBuilder::fixed()
                .translation(vector![0.0, -0.5, 0.0])
                .build(),
        );
        world.attach_collider(ColliderBuilder::cuboid(5.0, 0.5, 5.0).build(), body)
    }

    #[test]
    fn test_attach_collider_to_body() {
        let mut world = PhysicsWorld::new();
        assert!(world.bodies.is_empty());
        let handle = floor(&mut world);
        assert_eq!(world.bodies.len(), 1);
        assert_eq!(world.colliders.len(), 1);
        assert!(world.collider(handle).and_then(|c| c.parent()).is_some());
    }

    #[test]
    fn test_zero_step_is_noop() {
        let mut world = PhysicsWorld::new();
        let body = world.add_body(
            RigidBodyBuilder::dynamic()
                .translation(vector![0.0, 10.0, 0.0])
                .build(),
        );
        world.attach_collider(ColliderBuilder::ball(0.5).build(), body);

        world.step(0.0);
        assert_eq!(world.body(body).unwrap().translation().y, 10.0);

        for _ in 0..30 {
            world.step(1.0 / 60.0);
        }
        assert!(world.body(body).unwrap().translation().y < 10.0);
    }

    #[test]
    fn test_collision_start_reaches_channel() {
        let mut world = PhysicsWorld::new();
        let ground = floor(&mut world);
        let body = world.add_body(
            RigidBodyBuilder::dynamic()
                .translation(vector![0.0, 0.6, 0.0])
                .build(),
        );
        let ball = world.attach_collider(
            ColliderBuilder::ball(0.5)
                .active_events(ActiveEvents::COLLISION_EVENTS)
                .build(),
            body,
        );

        for _ in 0..30 {
            world.step(1.0 / 60.0);
        }
        let events = world.drain_collision_events();
        assert!(events.iter().any(|e| {
            let pair = [e.collider1(), e.collider2()];
            e.started() && pair.contains(&ground) && pair.contains(&ball)
        }));
        assert!(world.drain_collision_events().is_empty());
    }
}
