//! Core path tracing integrator.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive radiance estimation with a hard depth cutoff
//! - A vertical sky gradient as the only light source
//! - Gamma compression and running-average blending for progressive frames

use crate::sampling::gen_f32;
use crate::{Camera, ObjectHit, Scene};
use glint_core::RenderSettings;
use glint_math::{lerp, mul_elem, Color, Interval, Ray};
use rand::RngCore;

/// Horizon color of the sky gradient.
const SKY_WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Zenith color of the sky gradient.
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Progressive sample budget per pixel
    pub max_samples: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Hit interval start, excludes self-intersection at the bounce origin
    pub t_min: f32,
    /// Hit interval end
    pub t_max: f32,
}

impl RenderConfig {
    /// Open interval in which hits are accepted.
    pub fn hit_interval(&self) -> Interval {
        Interval::new(self.t_min, self.t_max)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from(&RenderSettings::default())
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            max_samples: settings.max_samples,
            max_depth: settings.max_depth,
            t_min: settings.t_min,
            t_max: settings.t_max,
        }
    }
}

/// Estimate the radiance arriving along `ray`.
///
/// Misses return the sky. A hit with `depth == 0` is black, otherwise the
/// material scatters and the estimate recurses with `depth - 1`. Given the
/// same random stream the result is fully determined.
pub fn sample_radiance(
    scene: &Scene,
    ray: &Ray,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(ObjectHit { object, hit }) = scene.test_hits(ray, config.hit_interval()) else {
        return sky_gradient(ray);
    };

    if depth == 0 {
        return Color::ZERO;
    }

    match object.material.scatter(ray, &hit, rng) {
        Some(scatter) => mul_elem(
            sample_radiance(scene, &scatter.scattered, depth - 1, config, rng),
            scatter.attenuation,
        ),
        None => Color::ZERO,
    }
}

/// Background seen by rays that escape the scene.
///
/// Depends only on the y component of the normalized direction.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let u = (unit_direction.y + 1.0) * 0.5;
    lerp(SKY_WHITE, SKY_BLUE, u)
}

/// Gamma compression (gamma = 2.0) applied to each channel.
#[inline]
pub fn gamma_compress(color: Color) -> Color {
    Color::new(color.x.sqrt(), color.y.sqrt(), color.z.sqrt())
}

/// One jittered, gamma-compressed sample for pixel (x, y).
///
/// `y` counts up from the bottom row.
#[allow(clippy::too_many_arguments)]
pub fn sample_pixel(
    scene: &Scene,
    camera: &dyn Camera,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let offset_x = gen_f32(rng);
    let offset_y = gen_f32(rng);

    let u = (x as f32 + offset_x) / width as f32;
    let v = (y as f32 + offset_y) / height as f32;

    let ray = camera.get_ray(u, v);
    gamma_compress(sample_radiance(scene, &ray, config.max_depth, config, rng))
}

/// Fold a new sample into a running average of `sample_count` samples.
///
/// Both values are already gamma-compressed, so this averages in gamma
/// space: the mean of square roots, not the square root of the mean.
#[inline]
pub fn blend_sample(average: Color, sample: Color, sample_count: u32) -> Color {
    lerp(average, sample, 1.0 / (sample_count + 1) as f32)
}

/// Convert an averaged color to 8-bit RGBA, alpha fully opaque.
///
/// Channels round to the nearest step.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let channel = |c: f32| Interval::CHANNEL.clamp((c * 255.0).round()) as u8;
    [channel(color.x), channel(color.y), channel(color.z), 255]
}
