//! Camera for ray generation.

use glint_core::CameraDescription;
use glint_math::{Ray, Vec3};

/// Anything that can turn image-plane coordinates into a primary ray.
///
/// `(u, v)` are in [0, 1]^2 with (0, 0) at the bottom-left of the image.
pub trait Camera: Send + Sync {
    fn get_ray(&self, u: f32, v: f32) -> Ray;
}

/// Pinhole camera with a vertical field of view.
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    vfov: f32, // Vertical field of view in degrees
    aspect: f32,

    // Cached computed values (set by initialize())
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl PinholeCamera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::from_description(&CameraDescription::default(), 1.0)
    }

    /// Create a camera from a scene file description.
    pub fn from_description(description: &CameraDescription, aspect: f32) -> Self {
        let mut camera = Self {
            look_from: description.look_from,
            look_at: description.look_at,
            vup: description.up,
            vfov: description.vfov,
            aspect,
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
        };
        camera.initialize();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self.initialize();
        self
    }

    /// Set the aspect ratio (width / height).
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.set_aspect(aspect);
        self
    }

    /// Update aspect ratio (e.g., on surface resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.initialize();
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Recompute the image plane from the camera settings.
    fn initialize(&mut self) {
        let theta = self.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = self.aspect * half_height;

        // Camera basis vectors
        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        self.origin = self.look_from;
        self.lower_left_corner = self.origin - half_width * u - half_height * v - w;
        self.horizontal = 2.0 * half_width * u;
        self.vertical = 2.0 * half_height * v;
    }
}

impl Default for PinholeCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera for PinholeCamera {
    fn get_ray(&self, u: f32, v: f32) -> Ray {
        let target = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }
}
