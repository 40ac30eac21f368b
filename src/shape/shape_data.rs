//! Shape Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in the *_operations.rs files

use crate::correspondence::SolverMode;
use glam::Vec3;

/// Axis-aligned bounding box of a point cloud
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

/// Normalizer output
#[derive(Debug, Clone)]
pub struct NormalizedShape {
    pub points: Vec<Vec3>,
    /// Uniform factor that was applied after centering
    pub scale: f32,
}

/// Source rectangle of one sprite slot in the atlas, in texels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Both morph endpoints plus per-point identity. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ShapeData {
    /// Torus endpoint (progress = 0)
    pub shape_a: Vec<Vec3>,
    /// Glyph endpoint (progress = 1), index-aligned with `shape_a`
    pub shape_b: Vec<Vec3>,
    /// Sprite slot of each point, `i % slot_count`
    pub sprite_assignment: Vec<usize>,
    pub sprite_rects: Vec<SpriteRect>,
    /// Edge length of a glyph module after normalization
    pub module_size: f32,
    /// Modules per side of the encoded matrix
    pub matrix_size: usize,
    pub solver_mode: SolverMode,
    pub total_distance: f32,
}
