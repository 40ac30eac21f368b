//! Glyph Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in glyph_operations.rs

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Error-correction level of the encoded code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    High,
}

/// Square boolean matrix, row-major. `true` marks an active (dark) module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMatrix {
    pub size: usize,
    pub cells: Vec<bool>,
}

/// Coordinates of an active module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphCell {
    pub col: usize,
    pub row: usize,
}

/// Flat glyph points laid out on a square footprint
#[derive(Debug, Clone)]
pub struct GlyphPoints {
    pub points: Vec<Vec3>,
    /// Edge length of one module on the footprint
    pub module_size: f32,
}
