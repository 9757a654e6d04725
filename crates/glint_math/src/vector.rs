//! Vector helpers that glam does not provide in the form the tracer needs.
//!
//! `Vec3` doubles as position, direction and color. Everything here is a
//! pure function over values.

use crate::Vec3;

/// Reflect `v` about the normal `n`: `v - 2 * dot(v, n) * n`.
///
/// `n` is expected to be unit length; `v` may have any length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with normal `n`.
///
/// `v` is normalized first. Returns `None` on total internal reflection,
/// i.e. when `1 - ni_over_nt^2 * (1 - dot(v, n)^2)` is not positive.
#[inline]
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let unit_v = v.normalize();
    let dt = unit_v.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (unit_v - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Linear interpolation `(1 - t) * a + t * b`.
///
/// Not clamped: `t` outside [0, 1] extrapolates.
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let it = 1.0 - t;
    Vec3::new(
        it * a.x + t * b.x,
        it * a.y + t * b.y,
        it * a.z + t * b.z,
    )
}

/// Component-wise product, used to apply attenuation to radiance.
#[inline]
pub fn mul_elem(a: Vec3, b: Vec3) -> Vec3 {
    a * b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_reflect_basic() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_is_involution() {
        let n = Vec3::new(0.3, 0.9, -0.2).normalize();
        for v in [
            Vec3::new(1.0, -1.0, 0.5).normalize(),
            Vec3::new(-0.2, 0.1, 0.97).normalize(),
            Vec3::X,
        ] {
            assert!(approx_eq(reflect(reflect(v, n), n), v));
        }
    }

    #[test]
    fn test_refract_straight_through() {
        // Head-on rays are not bent regardless of index ratio
        let refracted = refract(Vec3::new(0.0, -2.0, 0.0), Vec3::Y, 1.0 / 1.5).unwrap();
        assert!(approx_eq(refracted, Vec3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_refract_same_medium_keeps_direction() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let refracted = refract(v, Vec3::Y, 1.0).unwrap();
        assert!(approx_eq(refracted, v.normalize()));
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Grazing ray leaving a dense medium
        let v = Vec3::new(1.0, -0.1, 0.0);
        assert!(refract(v, Vec3::Y, 1.5).is_none());
    }

    #[test]
    fn test_refract_bends_toward_normal_entering() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let refracted = refract(v, Vec3::Y, 1.0 / 1.5).unwrap();
        let sin_in = v.normalize().x;
        let sin_out = refracted.x / refracted.length();
        assert!((sin_out - sin_in / 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_lerp() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = Vec3::new(0.5, 0.7, 1.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert!(approx_eq(lerp(a, b, 0.5), Vec3::new(0.75, 0.85, 1.0)));
        // Unclamped
        assert!(approx_eq(lerp(Vec3::ZERO, Vec3::ONE, 2.0), Vec3::splat(2.0)));
    }

    #[test]
    fn test_mul_elem() {
        let c = mul_elem(Vec3::new(0.5, 1.0, 2.0), Vec3::new(0.1, 0.9, 0.1));
        assert!(approx_eq(c, Vec3::new(0.05, 0.9, 0.2)));
    }
}
