//! Serializable scene description.
//!
//! Maps one-to-one onto a JSON scene file. Every section has defaults so a
//! file only needs to list what differs from the built-in demo setup.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Default progressive sample budget per pixel.
pub const DEFAULT_MAX_SAMPLES: u32 = 16;

/// Default recursion budget for a single path.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Surface response of an object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDescription {
    /// Lambertian-style diffuse surface
    Diffuse { albedo: Vec3 },

    /// Reflective surface; roughness 0 is a perfect mirror
    Metal { albedo: Vec3, roughness: f32 },

    /// Dielectric such as glass or water
    Glass {
        albedo: Vec3,
        refractive_index: f32,
    },
}

/// One sphere and its material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    pub centre: Vec3,
    pub radius: f32,
    pub material: MaterialDescription,
}

impl ObjectDescription {
    pub fn new(centre: Vec3, radius: f32, material: MaterialDescription) -> Self {
        Self {
            centre,
            radius,
            material,
        }
    }
}

/// Pinhole camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            look_from: Vec3::new(2.0, 2.0, -3.0),
            look_at: Vec3::new(0.0, 0.5, 0.0),
            up: Vec3::Y,
            vfov: 60.0,
        }
    }
}

/// Progressive render settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Frames (one sample per pixel each) before the session goes idle
    pub max_samples: u32,
    /// Maximum number of scattering bounces
    pub max_depth: u32,
    /// Near end of the hit interval, keeps bounces off their own surface
    pub t_min: f32,
    /// Far end of the hit interval
    pub t_max: f32,
    /// Seed for the session RNG; random when absent
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            max_depth: DEFAULT_MAX_DEPTH,
            t_min: 0.001,
            t_max: 1.0e6,
            seed: None,
        }
    }
}

/// A complete scene file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    pub render: RenderSettings,
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    /// Three spheres (metal, diffuse, glass) in a row on a huge floor sphere.
    pub fn demo() -> Self {
        let objects = vec![
            ObjectDescription::new(
                Vec3::new(-1.0, 0.5, 0.0),
                0.5,
                MaterialDescription::Metal {
                    albedo: Vec3::new(0.9, 0.1, 0.1),
                    roughness: 0.2,
                },
            ),
            ObjectDescription::new(
                Vec3::new(0.0, 0.5, 0.0),
                0.5,
                MaterialDescription::Diffuse {
                    albedo: Vec3::new(0.1, 0.9, 0.1),
                },
            ),
            ObjectDescription::new(
                Vec3::new(1.0, 0.5, 0.0),
                0.5,
                MaterialDescription::Glass {
                    albedo: Vec3::new(0.5, 0.5, 1.0),
                    refractive_index: 2.5,
                },
            ),
            ObjectDescription::new(
                Vec3::new(0.0, -1000.0, 0.0),
                1000.0,
                MaterialDescription::Diffuse {
                    albedo: Vec3::new(0.5, 0.5, 0.5),
                },
            ),
        ];

        Self {
            camera: CameraDescription::default(),
            render: RenderSettings::default(),
            objects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene() {
        let scene = SceneDescription::demo();
        assert_eq!(scene.objects.len(), 4);

        let floor = scene.objects.last().unwrap();
        assert_eq!(floor.radius, 1000.0);
        assert!(matches!(floor.material, MaterialDescription::Diffuse { .. }));
    }

    #[test]
    fn test_render_settings_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.max_samples, 16);
        assert_eq!(settings.max_depth, 5);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_material_tagging() {
        let json = r#"{"type": "glass", "albedo": [1.0, 1.0, 1.0], "refractive_index": 1.5}"#;
        let material: MaterialDescription = serde_json::from_str(json).unwrap();
        assert_eq!(
            material,
            MaterialDescription::Glass {
                albedo: Vec3::ONE,
                refractive_index: 1.5,
            }
        );
    }
}
