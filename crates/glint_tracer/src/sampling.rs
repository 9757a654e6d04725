//! Random sampling helpers.
//!
//! Everything takes `&mut dyn RngCore` so tests can pass a seeded `StdRng`
//! or a scripted mock in place of the session's generator.

use glint_math::Vec3;
use rand::{Rng, RngCore};

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform point strictly inside the unit sphere.
///
/// Rejection sampling: draw in [0, 2]^3, shift by (1, 1, 1), retry until the
/// squared length is below 1. About 48% of draws are rejected; there is no
/// iteration cap.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32(rng) * 2.0,
            gen_f32(rng) * 2.0,
            gen_f32(rng) * 2.0,
        ) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
