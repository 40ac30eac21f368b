//! Animation Operations - Pure DOP Functions
//!
//! State changes happen here and only here: the clock advance (rotation +
//! transition progress), `toggle` and `set_progress`. The frame pipeline
//! only ever reads an `AnimationSnapshot`.

use super::animation_data::{
    AnimationSnapshot, AnimationState, MorphTarget, SharedAnimationState, ThresholdCrossing,
    TransitionData,
};
use crate::config::TimingConfig;
use parking_lot::RwLock;
use std::f32::consts::{PI, TAU};
use std::sync::Arc;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Resting at the torus, no rotation
pub fn create_animation_state() -> AnimationState {
    AnimationState {
        progress: 0.0,
        target: MorphTarget::Torus,
        rotation_angle: 0.0,
        frozen_stagger_angle: 0.0,
        frozen_rotation: 0.0,
        transition: None,
        clock_s: 0.0,
    }
}

pub fn create_shared_animation_state() -> SharedAnimationState {
    Arc::new(RwLock::new(create_animation_state()))
}

// ============================================================================
// ANGLES
// ============================================================================

/// Wrap into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap into [-π, π)
#[inline]
pub fn wrap_signed(angle: f32) -> f32 {
    wrap_angle(angle + PI) - PI
}

// ============================================================================
// UPDATES
// ============================================================================

/// Timing curve applied to a transition's linear time fraction
#[inline]
pub fn transition_curve(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Advance rotation by `delta_s` at `speed` radians per second
pub fn advance_rotation(state: &mut AnimationState, delta_s: f32, speed: f32) {
    state.rotation_angle = wrap_angle(state.rotation_angle + delta_s * speed);
}

/// Flip the morph direction and start a transition from the current progress.
///
/// The rotation is snapshotted so the wave pattern and rotation blend stay
/// stable while the live rotation keeps advancing. A toggle during a
/// transition starts over from wherever progress currently is.
pub fn toggle(state: &mut AnimationState, timing: &TimingConfig) {
    state.target = match state.target {
        MorphTarget::Torus => MorphTarget::Glyph,
        MorphTarget::Glyph => MorphTarget::Torus,
    };
    state.frozen_stagger_angle = state.rotation_angle;
    state.frozen_rotation = state.rotation_angle;

    let (to_progress, full_duration) = match state.target {
        MorphTarget::Glyph => (1.0, timing.forward_duration_s),
        MorphTarget::Torus => (0.0, timing.backward_duration_s),
    };
    let distance = (to_progress - state.progress).abs();

    state.transition = if distance > f32::EPSILON {
        Some(TransitionData {
            from_progress: state.progress,
            to_progress,
            start_s: state.clock_s,
            duration_s: full_duration * distance,
        })
    } else {
        None
    };

    log::debug!(
        "[animation_operations::toggle] target {:?} from progress {:.3}, frozen rotation {:.3}",
        state.target,
        state.progress,
        state.frozen_rotation
    );
}

/// Jump to a progress value, cancelling any transition.
///
/// The target follows the nearer endpoint so the next toggle heads away from it.
pub fn set_progress(state: &mut AnimationState, progress: f32) {
    state.progress = progress.clamp(0.0, 1.0);
    state.transition = None;
    state.target = if state.progress >= 0.5 {
        MorphTarget::Glyph
    } else {
        MorphTarget::Torus
    };
}

/// Forward threshold crossings between two progress values
pub fn detect_threshold_crossings(
    previous: f32,
    current: f32,
    thresholds: &[f32],
    events: &mut Vec<ThresholdCrossing>,
) {
    if current <= previous {
        return;
    }
    for (index, &threshold) in thresholds.iter().enumerate() {
        if previous < threshold && threshold <= current {
            events.push(ThresholdCrossing { index, threshold });
        }
    }
}

/// Move the clock to `now_s`: rotate, step the transition, report crossings.
///
/// Time going backwards is treated as no elapsed time.
pub fn advance_clock(
    state: &mut AnimationState,
    now_s: f64,
    rotation_speed: f32,
    timing: &TimingConfig,
    events: &mut Vec<ThresholdCrossing>,
) {
    let delta_s = (now_s - state.clock_s).max(0.0) as f32;
    state.clock_s = state.clock_s.max(now_s);
    advance_rotation(state, delta_s, rotation_speed);

    let Some(transition) = state.transition else {
        return;
    };

    let previous = state.progress;
    let elapsed = (state.clock_s - transition.start_s) as f32;
    let t = if transition.duration_s > 0.0 {
        elapsed / transition.duration_s
    } else {
        1.0
    };

    if t >= 1.0 {
        state.progress = transition.to_progress;
        state.transition = None;
    } else {
        let k = transition_curve(t);
        state.progress = (transition.from_progress
            + (transition.to_progress - transition.from_progress) * k)
            .clamp(0.0, 1.0);
    }

    if state.target == MorphTarget::Glyph {
        detect_threshold_crossings(previous, state.progress, &timing.haptic_thresholds, events);
    }
}

/// Copy out the fields the frame pipeline reads
pub fn snapshot(state: &AnimationState) -> AnimationSnapshot {
    AnimationSnapshot {
        progress: state.progress.clamp(0.0, 1.0),
        rotation_angle: wrap_angle(state.rotation_angle),
        frozen_stagger_angle: state.frozen_stagger_angle,
        frozen_rotation: state.frozen_rotation,
    }
}

/// Take a snapshot under a single read lock
pub fn snapshot_shared(shared: &SharedAnimationState) -> AnimationSnapshot {
    snapshot(&shared.read())
}

pub fn is_transitioning(state: &AnimationState) -> bool {
    state.transition.is_some()
}
