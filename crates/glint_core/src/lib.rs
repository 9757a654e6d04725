//! Glint Core - Scene descriptions for the progressive tracer.
//!
//! This crate provides:
//!
//! - **Description types**: `SceneDescription`, `ObjectDescription`,
//!   `MaterialDescription`, `CameraDescription`, `RenderSettings`
//! - **Loading**: JSON scene files with validation
//!
//! The types here are renderer-agnostic; the tracer converts them into
//! its own scene representation.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} objects", scene.objects.len());
//! ```

pub mod description;
pub mod loader;

// Re-export commonly used types
pub use description::{
    CameraDescription, MaterialDescription, ObjectDescription, RenderSettings, SceneDescription,
};
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
