//! Glint Tracer - progressive CPU path tracing of sphere scenes.
//!
//! A small Monte Carlo path tracer: spheres only, three closed material
//! variants, an implicit sky gradient as the sole light, and a frame driver
//! that refines the image by one sample per pixel on every host tick until
//! a fixed sample budget is spent.

mod camera;
mod hit;
mod image_buffer;
mod material;
mod renderer;
mod sampling;
mod scene;
mod session;
mod sphere;

pub use camera::{Camera, PinholeCamera};
pub use hit::{ObjectHit, RayHit};
pub use image_buffer::{ImageBuffer, PixelBuffer, CLEAR_COLOR};
pub use material::{schlick, Material, Scatter};
pub use renderer::{
    blend_sample, color_to_rgba, gamma_compress, sample_pixel, sample_radiance, sky_gradient,
    RenderConfig,
};
pub use sampling::{gen_f32, random_in_unit_sphere};
pub use scene::{Scene, SceneObject};
pub use session::{FrameStats, FrameStatus, RenderSession};
pub use sphere::Sphere;

/// Re-export the math types the public API is written in
pub use glint_math::{Color, Interval, Ray, Vec3};
