//! Scene of spheres for the tracer.

use crate::{Material, ObjectHit, Sphere};
use glint_core::{MaterialDescription, SceneDescription};
use glint_math::{Interval, Ray};

/// One sphere paired with its material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub sphere: Sphere,
    pub material: Material,
}

impl SceneObject {
    pub fn new(sphere: Sphere, material: Material) -> Self {
        Self { sphere, material }
    }
}

/// Ordered list of scene objects, read-only while a session renders it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from a loaded description.
    pub fn from_description(description: &SceneDescription) -> Self {
        let objects = description
            .objects
            .iter()
            .map(|object| {
                let material = match object.material {
                    MaterialDescription::Diffuse { albedo } => Material::diffuse(albedo),
                    MaterialDescription::Metal { albedo, roughness } => {
                        Material::metal(albedo, roughness)
                    }
                    MaterialDescription::Glass {
                        albedo,
                        refractive_index,
                    } => Material::glass(albedo, refractive_index),
                };
                SceneObject::new(Sphere::new(object.centre, object.radius), material)
            })
            .collect();

        Self { objects }
    }

    /// Add an object to the end of the scene.
    pub fn add(&mut self, sphere: Sphere, material: Material) {
        self.objects.push(SceneObject::new(sphere, material));
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the closest hit along `ray` within `ray_t`.
    ///
    /// Linear scan; each accepted hit shrinks the interval so later objects
    /// only win when strictly closer.
    pub fn test_hits(&self, ray: &Ray, ray_t: Interval) -> Option<ObjectHit<'_>> {
        let mut closest: Option<ObjectHit<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(hit) = object.sphere.check_hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = hit.t;
                closest = Some(ObjectHit { object, hit });
            }
        }

        closest
    }
}
