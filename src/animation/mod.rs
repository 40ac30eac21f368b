/// Animation Module - Data-Oriented Programming (DOP) style
///
/// - animation_data.rs: AnimationState, snapshots and events
/// - animation_operations.rs: toggle, clock advance and snapshotting

pub mod animation_data;
pub mod animation_operations;

pub use animation_data::{
    AnimationSnapshot, AnimationState, MorphTarget, SharedAnimationState, ThresholdCrossing,
    TransitionData,
};

pub use animation_operations::{
    advance_clock, advance_rotation, create_animation_state, create_shared_animation_state,
    detect_threshold_crossings, is_transitioning, set_progress, snapshot, snapshot_shared, toggle,
    transition_curve, wrap_angle, wrap_signed,
};
