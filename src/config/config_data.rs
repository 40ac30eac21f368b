//! Config Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Loading and validation happen in config_operations.rs

use crate::constants::{camera, render, solver, timing, tuning};
use crate::glyph::ErrorCorrection;
use serde::{Deserialize, Serialize};

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Text encoded into the glyph shape
    pub payload: String,
    pub error_correction: ErrorCorrection,
    pub torus: TorusConfig,
    pub glyph: GlyphConfig,
    pub sprite: SpriteConfig,
    pub colors: ColorConfig,
    /// Point size in torus (avatar) mode, before perspective
    pub avatar_size: f32,
    pub viewport: ViewportConfig,
    pub solver: SolverConfig,
    pub tuning: TuningConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusConfig {
    pub major_radius: f32,
    pub minor_radius: f32,
    /// Y-extent of the torus after normalization
    pub target_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Y-extent of the glyph after normalization
    pub target_height: f32,
    /// Square footprint the raw matrix is laid out on
    pub footprint: f32,
}

/// Sprite atlas geometry. Image bytes are the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub cols: u32,
    pub rows: u32,
    pub cell_size: f32,
    pub num_slots: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Base hue in degrees
    pub hue: f32,
    pub saturation_range: [f32; 2],
    pub lightness_range: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest N solved exactly; above it the greedy solver is used
    pub exact_threshold: usize,
}

/// Aesthetic constants. See `constants::tuning` for what each one does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub tilt: f32,
    pub wave_span: f32,
    pub transition_boost: f32,
    pub pulse_exponent: f32,
    pub pulse_amount: f32,
    pub glyph_size_factor: f32,
    pub contrast_boost: f32,
    pub rotation_speed: f32,
    pub camera_distance: f32,
    pub front_fade_start: f32,
    pub front_fade_end: f32,
    /// Half-width of the depth-sort range. Unset derives it from the shape.
    pub depth_range: Option<f32>,
    pub parallel_threshold: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub forward_duration_s: f32,
    pub backward_duration_s: f32,
    pub haptic_thresholds: Vec<f32>,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            payload: "https://example.com".to_string(),
            error_correction: ErrorCorrection::Medium,
            torus: TorusConfig::default(),
            glyph: GlyphConfig::default(),
            sprite: SpriteConfig::default(),
            colors: ColorConfig::default(),
            avatar_size: 18.0,
            viewport: ViewportConfig::default(),
            solver: SolverConfig::default(),
            tuning: TuningConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            major_radius: 100.0,
            minor_radius: 45.0,
            target_height: 110.0,
        }
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            target_height: 200.0,
            footprint: 200.0,
        }
    }
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            cols: 8,
            rows: 8,
            cell_size: 64.0,
            num_slots: 64,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            hue: 220.0,
            saturation_range: [0.45, 0.85],
            lightness_range: [0.35, 0.65],
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            exact_threshold: solver::EXACT_SOLVER_THRESHOLD,
        }
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            tilt: tuning::TILT_RADIANS,
            wave_span: tuning::WAVE_SPAN,
            transition_boost: tuning::TRANSITION_BOOST,
            pulse_exponent: tuning::PULSE_EXPONENT,
            pulse_amount: tuning::PULSE_AMOUNT,
            glyph_size_factor: tuning::GLYPH_SIZE_FACTOR,
            contrast_boost: tuning::CONTRAST_BOOST,
            rotation_speed: tuning::ROTATION_SPEED,
            camera_distance: camera::CAMERA_DISTANCE,
            front_fade_start: camera::FRONT_FADE_START,
            front_fade_end: camera::FRONT_FADE_END,
            depth_range: None,
            parallel_threshold: render::PARALLEL_POINT_THRESHOLD,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            forward_duration_s: timing::FORWARD_DURATION_S,
            backward_duration_s: timing::BACKWARD_DURATION_S,
            haptic_thresholds: timing::HAPTIC_THRESHOLDS.to_vec(),
        }
    }
}
