//! Engine-wide named constants.
//!
//! Aesthetic values here are only defaults. Every one of them can be
//! overridden through `TuningConfig`; none of them affect correctness.

/// Visual tuning defaults for the morph
pub mod tuning {
    /// Fixed tilt about the X axis applied to the torus (radians)
    pub const TILT_RADIANS: f32 = 0.3;

    /// Share of the timeline over which the wave sweeps across the cloud
    pub const WAVE_SPAN: f32 = 0.25;

    /// Extra rotation arc added mid-morph (radians)
    pub const TRANSITION_BOOST: f32 = 0.6;

    /// Exponent on the (1 - eased) tail of the size pulse
    pub const PULSE_EXPONENT: f32 = 0.5;

    /// Amplitude of the size pulse
    pub const PULSE_AMOUNT: f32 = 0.35;

    /// Glyph-mode points are drawn slightly smaller than a module
    pub const GLYPH_SIZE_FACTOR: f32 = 0.9;

    /// Lightness reduction applied at full glyph form
    pub const CONTRAST_BOOST: f32 = 0.45;

    /// Rotation speed of the torus (radians per second)
    pub const ROTATION_SPEED: f32 = 0.35;
}

/// Camera and projection defaults
pub mod camera {
    /// Distance from the camera to the origin, in shape units
    pub const CAMERA_DISTANCE: f32 = 400.0;

    /// Depth (towards the camera) at which points start fading
    pub const FRONT_FADE_START: f32 = 40.0;

    /// Depth (towards the camera) at which points are fully faded
    pub const FRONT_FADE_END: f32 = 110.0;

    /// Lower bound on the perspective denominator
    pub const MIN_DEPTH_DENOMINATOR: f32 = 1.0;
}

/// Depth sorting parameters
pub mod depth {
    pub const DEPTH_BUCKETS: usize = 128;

    /// Slack on the shape's bounding radius when sizing the bucket range
    pub const DEPTH_RANGE_PADDING: f32 = 1.05;
}

/// Correspondence solver parameters
pub mod solver {
    /// Largest N solved exactly with the Hungarian algorithm
    pub const EXACT_SOLVER_THRESHOLD: usize = 500;
}

/// Transition timing
pub mod timing {
    /// Torus -> glyph duration (seconds)
    pub const FORWARD_DURATION_S: f32 = 6.0;

    /// Glyph -> torus duration (seconds)
    pub const BACKWARD_DURATION_S: f32 = 4.0;

    /// Progress values that raise a haptic event on forward transitions
    pub const HAPTIC_THRESHOLDS: [f32; 4] = [0.05, 0.12, 0.21, 0.32];
}

/// Rendering limits
pub mod render {
    /// Alpha below which a command is not emitted (rounds to zero in 8 bits)
    pub const MIN_VISIBLE_ALPHA: f32 = 1.0 / 255.0;

    /// Point count above which transforms are computed on the rayon pool
    pub const PARALLEL_POINT_THRESHOLD: usize = 4096;
}
