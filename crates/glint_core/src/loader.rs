//! Scene file loading and validation.
//!
//! The tracer itself never validates geometry; a bad radius just turns into
//! degenerate hits or NaN radiance. Files coming from disk are checked here
//! before they ever reach it.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::description::{MaterialDescription, SceneDescription};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Object {index}: refractive index must be positive, got {value}")]
    InvalidRefractiveIndex { index: usize, value: f32 },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a JSON scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene from: {:?}", path);

    let text = fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Parse and validate a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(text)?;
    scene.validate()?;

    log::info!(
        "Scene has {} objects, budget {} samples, depth {}",
        scene.objects.len(),
        scene.render.max_samples,
        scene.render.max_depth
    );
    Ok(scene)
}

impl SceneDescription {
    /// Reject parameters that would produce degenerate geometry.
    ///
    /// Roughness outside [0, 1] is legal but unusual and only warned about.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, object) in self.objects.iter().enumerate() {
            if !(object.radius > 0.0 && object.radius.is_finite()) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: object.radius,
                });
            }

            match object.material {
                MaterialDescription::Glass {
                    refractive_index, ..
                } if !(refractive_index > 0.0) => {
                    return Err(SceneError::InvalidRefractiveIndex {
                        index,
                        value: refractive_index,
                    });
                }
                MaterialDescription::Metal { roughness, .. }
                    if !(0.0..=1.0).contains(&roughness) =>
                {
                    log::warn!(
                        "Object {}: metal roughness {} is outside [0, 1]",
                        index,
                        roughness
                    );
                }
                _ => {}
            }
        }

        Ok(())
    }
}
