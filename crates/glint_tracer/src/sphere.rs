//! Sphere primitive for ray tracing.

use crate::RayHit;
use glint_math::{Interval, Ray, Vec3};

/// A sphere primitive.
///
/// The radius is expected to be positive; it is not checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub centre: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(centre: Vec3, radius: f32) -> Self {
        Self { centre, radius }
    }

    /// Intersect a ray with the sphere inside the open interval `ray_t`.
    ///
    /// Solves `a t^2 + 2 b t + c = 0`. The near root wins whenever it lies
    /// strictly inside the interval; the far root is only tried after that.
    /// From inside the sphere the near root is behind the origin, so the far
    /// wall is reported.
    pub fn check_hit(&self, ray: &Ray, ray_t: Interval) -> Option<RayHit> {
        let oc = ray.origin() - self.centre;
        let a = ray.direction().dot(ray.direction());
        let b = oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-b - sqrtd) / a;
        let far = (-b + sqrtd) / a;

        let t = if ray_t.surrounds(near) {
            near
        } else if ray_t.surrounds(far) {
            far
        } else {
            return None;
        };

        let position = ray.at(t);
        Some(RayHit {
            t,
            position,
            normal: (position - self.centre) / self.radius,
        })
    }
}
