//! Static scene colliders, classified by object name

use crate::world::PhysicsWorld;
use glam::Vec3;
use orbit_core::{OrbitError, Result};
use rapier3d::prelude::*;

const BOX_NAMES: [&str; 4] = ["ground", "box", "cube", "plane"];
const MESH_NAMES: [&str; 2] = ["sofa", "chair"];

/// How an environment object collides with the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderClass {
    /// Fixed cuboid fitted to the object's bounds
    StaticBox,
    /// Fixed triangle mesh
    StaticMesh,
    /// Blocks the avatar's sweep but takes no part in contact solving
    CollisionOnly,
}

impl ColliderClass {
    /// Classify by case-insensitive substring. Box names win over mesh names.
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        if BOX_NAMES.iter().any(|n| lower.contains(n)) {
            ColliderClass::StaticBox
        } else if MESH_NAMES.iter().any(|n| lower.contains(n)) {
            ColliderClass::StaticMesh
        } else {
            ColliderClass::CollisionOnly
        }
    }
}

/// A collider registered for a named scene object
#[derive(Debug, Clone)]
pub struct EnvironmentObject {
    pub name: String,
    pub class: ColliderClass,
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
}

/// Every static collider in the scene
#[derive(Debug, Default)]
pub struct Environment {
    objects: Vec<EnvironmentObject>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mesh given in world space. Returns the class it was given.
    pub fn add_object(
        &mut self,
        physics: &mut PhysicsWorld,
        name: &str,
        vertices: &[Vec3],
        indices: &[[u32; 3]],
    ) -> Result<ColliderClass> {
        if vertices.is_empty() {
            return Err(OrbitError::PhysicsError(format!(
                "object '{}' has no vertices",
                name
            )));
        }
        if let Some(bad) = indices
            .iter()
            .flatten()
            .find(|i| **i as usize >= vertices.len())
        {
            return Err(OrbitError::PhysicsError(format!(
                "object '{}' references vertex {} of {}",
                name,
                bad,
                vertices.len()
            )));
        }

        let class = ColliderClass::classify(name);
        let (body, collider) = match class {
            ColliderClass::StaticBox => {
                let (min, max) = bounds(vertices);
                let center = (min + max) * 0.5;
                let half = ((max - min) * 0.5).max(Vec3::splat(0.001));
                let body = RigidBodyBuilder::fixed()
                    .translation(vector![center.x, center.y, center.z])
                    .build();
                let collider = ColliderBuilder::cuboid(half.x, half.y, half.z).build();
                (body, collider)
            }
            ColliderClass::StaticMesh | ColliderClass::CollisionOnly => {
                if indices.is_empty() {
                    return Err(OrbitError::PhysicsError(format!(
                        "object '{}' has no triangles",
                        name
                    )));
                }
                let points = vertices.iter().map(|v| point![v.x, v.y, v.z]).collect();
                let mut builder = ColliderBuilder::trimesh(points, indices.to_vec());
                if class == ColliderClass::CollisionOnly {
                    builder = builder.solver_groups(InteractionGroups::none());
                }
                (RigidBodyBuilder::fixed().build(), builder.build())
            }
        };

        let body = physics.add_body(body);
        let collider = physics.attach_collider(collider, body);
        log::debug!("collider '{}' as {:?}", name, class);

        self.objects.push(EnvironmentObject {
            name: name.to_string(),
            class,
            body,
            collider,
        });
        Ok(class)
    }

    /// Register an axis-aligned box as a 12-triangle mesh
    pub fn add_box(
        &mut self,
        physics: &mut PhysicsWorld,
        name: &str,
        center: Vec3,
        size: Vec3,
    ) -> Result<ColliderClass> {
        let (vertices, indices) = box_mesh(center, size * 0.5);
        self.add_object(physics, name, &vertices, &indices)
    }

    pub fn objects(&self) -> &[EnvironmentObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Name of the object owning a collider
    pub fn name_of(&self, collider: ColliderHandle) -> Option<&str> {
        self.objects
            .iter()
            .find(|o| o.collider == collider)
            .map(|o| o.name.as_str())
    }
}

fn bounds(vertices: &[Vec3]) -> (Vec3, Vec3) {
    vertices.iter().fold(
        (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
        |(min, max), v| (min.min(*v), max.max(*v)),
    )
}

fn box_mesh(center: Vec3, half: Vec3) -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let mut vertices = Vec::with_capacity(8);
    for i in 0..8u32 {
        let sign = Vec3::new(
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
        );
        vertices.push(center + half * sign);
    }
    // outward-facing, counter-clockwise
    let indices = vec![
        // -z
        [0, 2, 1],
        [1, 2, 3],
        // +z
        [4, 5, 6],
        [5, 7, 6],
        // -y
        [0, 1, 4],
        [1, 5, 4],
        // +y
        [2, 6, 3],
        [3, 6, 7],
        // -x
        [0, 4, 2],
        [2, 4, 6],
        // +x
        [1, 3, 5],
        [3, 7, 5],
    ];
    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_name() {
        assert_eq!(ColliderClass::classify("Ground"), ColliderClass::StaticBox);
        assert_eq!(ColliderClass::classify("woodenBOX_02"), ColliderClass::StaticBox);
        assert_eq!(ColliderClass::classify("floor_plane"), ColliderClass::StaticBox);
        assert_eq!(ColliderClass::classify("Sofa.001"), ColliderClass::StaticMesh);
        assert_eq!(ColliderClass::classify("office_chair"), ColliderClass::StaticMesh);
        assert_eq!(ColliderClass::classify("lamp"), ColliderClass::CollisionOnly);
        // box wins over mesh
        assert_eq!(ColliderClass::classify("chair_box"), ColliderClass::StaticBox);
    }

    #[test]
    fn test_box_collider_fits_bounds() {
        let mut physics = PhysicsWorld::new();
        let mut env = Environment::new();
        let class = env
            .add_box(
                &mut physics,
                "ground",
                Vec3::new(0.0, -0.5, 0.0),
                Vec3::new(20.0, 1.0, 20.0),
            )
            .unwrap();
        assert_eq!(class, ColliderClass::StaticBox);

        let object = &env.objects()[0];
        let body = physics.body(object.body).unwrap();
        assert!(body.is_fixed());
        assert!((body.translation().y + 0.5).abs() < 1e-6);

        let collider = physics.collider(object.collider).unwrap();
        let cuboid = collider.shape().as_cuboid().unwrap();
        assert!((cuboid.half_extents.x - 10.0).abs() < 1e-6);
        assert!((cuboid.half_extents.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_collision_only_has_no_solver_groups() {
        let mut physics = PhysicsWorld::new();
        let mut env = Environment::new();
        env.add_box(&mut physics, "lamp", Vec3::ZERO, Vec3::ONE)
            .unwrap();
        env.add_box(&mut physics, "sofa", Vec3::X * 3.0, Vec3::ONE)
            .unwrap();

        let lamp = physics.collider(env.objects()[0].collider).unwrap();
        assert!(lamp.shape().as_trimesh().is_some());
        assert_eq!(lamp.solver_groups(), InteractionGroups::none());

        let sofa = physics.collider(env.objects()[1].collider).unwrap();
        assert!(sofa.shape().as_trimesh().is_some());
        assert_eq!(sofa.solver_groups(), InteractionGroups::all());

        assert_eq!(env.name_of(env.objects()[1].collider), Some("sofa"));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut physics = PhysicsWorld::new();
        let mut env = Environment::new();
        assert!(env.add_object(&mut physics, "box", &[], &[]).is_err());
        let verts = [Vec3::ZERO, Vec3::X, Vec3::Y];
        assert!(env
            .add_object(&mut physics, "lamp", &verts, &[[0, 1, 7]])
            .is_err());
        assert!(env.add_object(&mut physics, "lamp", &verts, &[]).is_err());
        assert!(env.is_empty());
    }
}
