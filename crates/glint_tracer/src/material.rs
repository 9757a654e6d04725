//! Surface scattering models.
//!
//! The variant set is closed, so materials are a plain enum and `scatter`
//! dispatches with a single match.

use crate::sampling::{gen_f32, random_in_unit_sphere};
use crate::RayHit;
use glint_math::{reflect, refract, Color, Ray};
use rand::RngCore;

/// How light interacts with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface, scatters around the normal
    Diffuse { albedo: Color },

    /// Specular reflector perturbed by `roughness` (0 = perfect mirror)
    Metal { albedo: Color, roughness: f32 },

    /// Dielectric that reflects or refracts by Schlick's approximation
    Glass { albedo: Color, refractive_index: f32 },
}

/// A scattered ray and the attenuation applied to the light it brings back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    pub scattered: Ray,
    pub attenuation: Color,
}

impl Material {
    pub fn diffuse(albedo: Color) -> Self {
        Material::Diffuse { albedo }
    }

    pub fn metal(albedo: Color, roughness: f32) -> Self {
        Material::Metal { albedo, roughness }
    }

    pub fn glass(albedo: Color, refractive_index: f32) -> Self {
        Material::Glass {
            albedo,
            refractive_index,
        }
    }

    /// Scatter an incoming ray at a surface hit.
    ///
    /// Returns `None` when the ray is absorbed. Only metal can absorb.
    pub fn scatter(&self, ray_in: &Ray, hit: &RayHit, rng: &mut dyn RngCore) -> Option<Scatter> {
        match *self {
            Material::Diffuse { albedo } => Some(scatter_diffuse(albedo, hit, rng)),
            Material::Metal { albedo, roughness } => {
                scatter_metal(albedo, roughness, ray_in, hit, rng)
            }
            Material::Glass {
                albedo,
                refractive_index,
            } => Some(scatter_glass(albedo, refractive_index, ray_in, hit, rng)),
        }
    }
}

fn scatter_diffuse(albedo: Color, hit: &RayHit, rng: &mut dyn RngCore) -> Scatter {
    let target = hit.position + hit.normal + random_in_unit_sphere(rng);
    Scatter {
        scattered: Ray::new(hit.position, target - hit.position),
        attenuation: albedo,
    }
}

fn scatter_metal(
    albedo: Color,
    roughness: f32,
    ray_in: &Ray,
    hit: &RayHit,
    rng: &mut dyn RngCore,
) -> Option<Scatter> {
    let reflected = reflect(ray_in.direction().normalize(), hit.normal);
    let direction = reflected + roughness * random_in_unit_sphere(rng);

    // Perturbed below the surface: absorbed
    if direction.dot(hit.normal) > 0.0 {
        Some(Scatter {
            scattered: Ray::new(hit.position, direction),
            attenuation: albedo,
        })
    } else {
        None
    }
}

fn scatter_glass(
    albedo: Color,
    refractive_index: f32,
    ray_in: &Ray,
    hit: &RayHit,
    rng: &mut dyn RngCore,
) -> Scatter {
    let direction = ray_in.direction();
    let reflected = reflect(direction, hit.normal);

    let ray_dot_normal = direction.dot(hit.normal);
    let (outward_normal, ni_over_nt, cosine) = if ray_dot_normal > 0.0 {
        // Leaving the medium
        (
            -hit.normal,
            refractive_index,
            refractive_index * ray_dot_normal / direction.length(),
        )
    } else {
        (
            hit.normal,
            1.0 / refractive_index,
            -ray_dot_normal / direction.length(),
        )
    };

    let refracted = refract(direction, outward_normal, ni_over_nt);
    let reflection_probability = match refracted {
        Some(_) => schlick(cosine, refractive_index),
        None => 1.0,
    };

    // One draw per scatter, even when reflection is certain
    let draw = gen_f32(rng);
    let scattered_direction = match refracted {
        Some(refracted) if draw >= reflection_probability => refracted,
        _ => reflected,
    };

    Scatter {
        scattered: Ray::new(hit.position, scattered_direction),
        attenuation: albedo,
    }
}

/// Schlick's approximation of Fresnel reflectance.
pub fn schlick(cosine: f32, refractive_index: f32) -> f32 {
    let r0 = (1.0 - refractive_index) / (1.0 + refractive_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
