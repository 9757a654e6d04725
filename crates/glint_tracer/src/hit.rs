//! Intersection records.

use crate::scene::SceneObject;
use glint_math::Vec3;

/// Record of a ray-sphere intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal, always pointing out of the sphere
    pub normal: Vec3,
}

/// The closest hit in a scene together with the object that produced it.
#[derive(Debug, Clone, Copy)]
pub struct ObjectHit<'a> {
    pub object: &'a SceneObject,
    pub hit: RayHit,
}
