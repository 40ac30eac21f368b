// Morph Engine - Data-Oriented Programming (DOP) Architecture
//
// Morphs a cloud of avatar sprites between a rotating 3D torus and a flat
// 2D glyph rendered from an encoded payload. Produces backend-neutral draw
// commands; presenting them is up to the host.
//
// Layout:
// - *_data modules hold plain data
// - *_operations modules transform it with free functions
// - engine::MorphEngine ties the pipeline together behind a small API

// Constants module
pub mod constants;

// Setup
pub mod config;
pub mod error;

// One-time shape construction
pub mod correspondence;
pub mod glyph;
pub mod shape;

// Per-frame pipeline
pub mod animation;
pub mod depth;
pub mod draw;
pub mod frame;

pub mod engine;

pub use animation::{
    AnimationSnapshot, AnimationState, MorphTarget, SharedAnimationState, ThresholdCrossing,
};
pub use config::{load_config_from_path, load_config_from_str, MorphConfig};
pub use correspondence::SolverMode;
pub use draw::{DrawCommand, FrameStats, Rect, Rgba};
pub use engine::MorphEngine;
pub use error::{EngineInitError, EngineResult, ErrorContext};
pub use frame::{transforms_as_bytes, PointTransform};
pub use glyph::ErrorCorrection;
pub use shape::{ShapeData, SpriteRect};

/// Point type used throughout the crate
pub type Point3D = glam::Vec3;
