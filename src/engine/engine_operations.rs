//! Engine Operations - Pure DOP Functions
//!
//! Construction of a `MorphEngine` and the per-frame pipeline:
//! clock advance, snapshot, transforms, depth order, draw commands.
//! The `MorphEngine` methods are thin wrappers over these functions.

use super::engine_data::{FrameScratch, MorphEngine};
use crate::animation::{
    self, advance_clock, create_shared_animation_state, snapshot, AnimationSnapshot,
    SharedAnimationState, ThresholdCrossing,
};
use crate::config::{validate_config, viewport_center, MorphConfig};
use crate::depth::{create_depth_scratch, sort_back_to_front};
use crate::draw::{emit_draw_commands, slot_colors, DrawCommand, FrameStats, SlotColor};
use crate::error::EngineResult;
use crate::frame::{compute_transforms, refresh_wave_delays, FrameParams, PointTransform};
use crate::constants::depth::DEPTH_RANGE_PADDING;
use crate::shape::{bounding_radius, build_shape_data, ShapeData};

// ============================================================================
// INITIALIZATION
// ============================================================================

pub fn create_frame_scratch(point_count: usize, depth_range: f32) -> FrameScratch {
    FrameScratch {
        wave_delays: Default::default(),
        transforms: Vec::with_capacity(point_count),
        sorted: Vec::with_capacity(point_count),
        depth: create_depth_scratch(depth_range),
        // At most a background and a blit per point
        commands: Vec::with_capacity(point_count * 2),
    }
}

/// Depth-sort half-range: the configured override, else the shape's padded
/// bounding radius
pub fn depth_range_for(config: &MorphConfig, shape: &ShapeData) -> f32 {
    config
        .tuning
        .depth_range
        .unwrap_or_else(|| (bounding_radius(shape) * DEPTH_RANGE_PADDING).max(1.0))
}

pub fn frame_params(config: &MorphConfig, shape: &ShapeData) -> FrameParams {
    let (center_x, center_y) = viewport_center(config);
    FrameParams {
        center_x,
        center_y,
        avatar_size: config.avatar_size,
        module_size: shape.module_size,
        tuning: config.tuning,
    }
}

/// Validate the config, build the shapes and allocate frame buffers
pub fn create_engine(config: MorphConfig) -> EngineResult<MorphEngine> {
    log::debug!("[engine_operations::create_engine] Starting engine initialization");

    if let Err(e) = validate_config(&config) {
        log::error!("[engine_operations::create_engine] Configuration rejected: {}", e);
        return Err(e);
    }

    let shape = match build_shape_data(&config) {
        Ok(shape) => shape,
        Err(e) => {
            log::error!("[engine_operations::create_engine] Shape construction failed: {}", e);
            return Err(e);
        }
    };

    let n = shape.shape_a.len();
    let params = frame_params(&config, &shape);
    let colors = slot_colors(&config.colors, config.sprite.num_slots as usize);
    let depth_range = depth_range_for(&config, &shape);
    let scratch = create_frame_scratch(n, depth_range);

    log::info!(
        "[engine_operations::create_engine] Engine ready: {} points, {:?} correspondence, total distance {:.1}, depth range {:.1}",
        n,
        shape.solver_mode,
        shape.total_distance,
        depth_range
    );

    Ok(MorphEngine {
        config,
        shape,
        animation: create_shared_animation_state(),
        params,
        slot_colors: colors,
        scratch,
        texture_ready: false,
        events: Vec::new(),
        stats: FrameStats::default(),
    })
}

// ============================================================================
// FRAME PIPELINE
// ============================================================================

/// Run the pipeline for one snapshot and fill `scratch.commands`
pub fn compute_frame_into(
    shape: &ShapeData,
    snapshot: &AnimationSnapshot,
    params: &FrameParams,
    colors: &[SlotColor],
    scratch: &mut FrameScratch,
) -> FrameStats {
    refresh_wave_delays(
        &mut scratch.wave_delays,
        &shape.shape_a,
        snapshot.frozen_stagger_angle,
        params,
    );
    compute_transforms(
        shape,
        &scratch.wave_delays.delays,
        snapshot,
        params,
        &mut scratch.transforms,
    );
    sort_back_to_front(&scratch.transforms, &mut scratch.depth, &mut scratch.sorted);
    emit_draw_commands(
        &scratch.sorted,
        &shape.sprite_rects,
        colors,
        params.tuning.contrast_boost,
        &mut scratch.commands,
    )
}

/// Advance the shared clock to `time_s` and take the frame's snapshot
/// under a single write lock
pub fn advance_and_snapshot(
    shared: &SharedAnimationState,
    time_s: f64,
    config: &MorphConfig,
    events: &mut Vec<ThresholdCrossing>,
) -> AnimationSnapshot {
    let mut state = shared.write();
    advance_clock(
        &mut state,
        time_s,
        config.tuning.rotation_speed,
        &config.timing,
        events,
    );
    snapshot(&state)
}

// ============================================================================
// ENGINE API
// ============================================================================

impl MorphEngine {
    pub fn new(config: MorphConfig) -> EngineResult<Self> {
        create_engine(config)
    }

    /// Current morph progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.animation.read().progress
    }

    /// Jump to a progress value; cancels any running transition
    pub fn set_progress(&mut self, progress: f32) {
        animation::set_progress(&mut self.animation.write(), progress);
    }

    pub fn toggle(&mut self) {
        animation::toggle(&mut self.animation.write(), &self.config.timing);
    }

    /// Advance to `time_s` (seconds, monotonic) and produce this frame's
    /// draw commands in paint order. Empty while the texture is not ready.
    pub fn compute_frame(&mut self, time_s: f64) -> &[DrawCommand] {
        let snap = advance_and_snapshot(&self.animation, time_s, &self.config, &mut self.events);

        if !self.texture_ready {
            self.scratch.commands.clear();
            self.stats = FrameStats {
                points: self.shape.shape_a.len(),
                ..Default::default()
            };
            return &self.scratch.commands;
        }

        self.stats = compute_frame_into(
            &self.shape,
            &snap,
            &self.params,
            &self.slot_colors,
            &mut self.scratch,
        );
        log::trace!(
            "[MorphEngine::compute_frame] t={:.3} progress={:.3} drawn={} culled={} commands={}",
            time_s,
            snap.progress,
            self.stats.drawn_points,
            self.stats.culled_points,
            self.stats.commands
        );
        &self.scratch.commands
    }

    pub fn set_texture_ready(&mut self, ready: bool) {
        if ready != self.texture_ready {
            log::debug!("[MorphEngine::set_texture_ready] texture ready = {}", ready);
        }
        self.texture_ready = ready;
    }

    pub fn texture_ready(&self) -> bool {
        self.texture_ready
    }

    /// Take all threshold crossings queued since the last call
    pub fn drain_threshold_events(&mut self) -> Vec<ThresholdCrossing> {
        std::mem::take(&mut self.events)
    }

    /// Shared handle for hosts that drive the animation from another thread
    pub fn animation_handle(&self) -> SharedAnimationState {
        self.animation.clone()
    }

    pub fn shape(&self) -> &ShapeData {
        &self.shape
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    /// Half-width of the z range the depth sort buckets over
    pub fn depth_range(&self) -> f32 {
        self.scratch.depth.depth_range
    }

    pub fn last_stats(&self) -> FrameStats {
        self.stats
    }

    /// Transforms of the last drawn frame, back to front
    pub fn transforms(&self) -> &[PointTransform] {
        &self.scratch.sorted
    }
}
