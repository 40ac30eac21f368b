//! Engine Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Everything the engine owns between frames.

use crate::animation::{SharedAnimationState, ThresholdCrossing};
use crate::config::MorphConfig;
use crate::depth::DepthSortScratch;
use crate::draw::{DrawCommand, FrameStats, SlotColor};
use crate::frame::{FrameParams, PointTransform, WaveDelayCache};
use crate::shape::ShapeData;

/// Per-frame working buffers.
///
/// Cleared and refilled every frame; capacity is kept so a warm engine
/// does not allocate on the frame path.
#[derive(Debug, Clone)]
pub struct FrameScratch {
    pub wave_delays: WaveDelayCache,
    pub transforms: Vec<PointTransform>,
    pub sorted: Vec<PointTransform>,
    pub depth: DepthSortScratch,
    pub commands: Vec<DrawCommand>,
}

/// The morph engine: immutable shape data plus animation and frame state
pub struct MorphEngine {
    pub(crate) config: MorphConfig,

    /// Built once at construction, never mutated
    pub(crate) shape: ShapeData,

    pub(crate) animation: SharedAnimationState,

    pub(crate) params: FrameParams,

    /// Base color per sprite slot
    pub(crate) slot_colors: Vec<SlotColor>,

    pub(crate) scratch: FrameScratch,

    /// Host signal that the sprite atlas is loaded
    pub(crate) texture_ready: bool,

    /// Undrained haptic threshold crossings
    pub(crate) events: Vec<ThresholdCrossing>,

    pub(crate) stats: FrameStats,
}
