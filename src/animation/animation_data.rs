//! Animation Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in animation_operations.rs

use parking_lot::RwLock;
use std::sync::Arc;

/// Which endpoint the morph is heading towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphTarget {
    Torus,
    Glyph,
}

/// An in-flight timed move of `progress`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionData {
    pub from_progress: f32,
    pub to_progress: f32,
    pub start_s: f64,
    pub duration_s: f32,
}

/// Host-owned morph state, mutated between frames
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// 0 = torus, 1 = glyph
    pub progress: f32,
    pub target: MorphTarget,
    /// Continuous rotation, kept in [0, 2π)
    pub rotation_angle: f32,
    /// `rotation_angle` at the last toggle; drives the wave pattern
    pub frozen_stagger_angle: f32,
    /// `rotation_angle` at the last toggle; anchor for rotation blending
    pub frozen_rotation: f32,
    pub transition: Option<TransitionData>,
    /// Time of the last clock advance (seconds)
    pub clock_s: f64,
}

/// Consistent per-frame view of `AnimationState`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSnapshot {
    pub progress: f32,
    pub rotation_angle: f32,
    pub frozen_stagger_angle: f32,
    pub frozen_rotation: f32,
}

/// Forward crossing of a haptic threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdCrossing {
    pub index: usize,
    pub threshold: f32,
}

/// Animation state shared with a host driver thread
pub type SharedAnimationState = Arc<RwLock<AnimationState>>;
