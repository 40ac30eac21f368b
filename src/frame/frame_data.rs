//! Frame Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in frame_operations.rs

use crate::config::TuningConfig;

/// Per-point output of the transform pipeline, recomputed every frame.
/// Must stay Pod so renderers can upload the buffer as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointTransform {
    pub screen_x: f32,
    pub screen_y: f32,
    pub size: f32,
    pub corner_radius: f32,
    pub image_opacity: f32,
    pub background_opacity: f32,
    /// Eased local progress of this point
    pub eased: f32,
    /// View-space depth; larger is farther from the camera
    pub z: f32,
    /// Index into the shape arrays
    pub index: u32,
    /// Sprite slot
    pub slot: u32,
}

static_assertions::const_assert_eq!(std::mem::size_of::<PointTransform>(), 40);

/// Everything the pipeline needs besides the shapes and the snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub center_x: f32,
    pub center_y: f32,
    pub avatar_size: f32,
    pub module_size: f32,
    pub tuning: TuningConfig,
}

/// Wave delays cached per stagger angle
#[derive(Debug, Clone, Default)]
pub struct WaveDelayCache {
    pub delays: Vec<f32>,
    /// Bit pattern of the stagger angle the delays were computed for
    pub stagger_key: Option<u32>,
}
