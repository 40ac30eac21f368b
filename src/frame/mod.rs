/// Frame Module - Data-Oriented Programming (DOP) style
///
/// - frame_data.rs: PointTransform, FrameParams and the wave delay cache
/// - frame_operations.rs: the per-point transform pipeline

pub mod frame_data;
pub mod frame_operations;

pub use frame_data::{FrameParams, PointTransform, WaveDelayCache};

pub use frame_operations::{
    compute_point_transform, compute_transforms, ease_in_out_cubic, local_progress,
    perspective_scale, refresh_wave_delays, rotate_x, rotate_y, smoothstep, transforms_as_bytes,
    wave_delay,
};
