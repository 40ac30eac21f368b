/// Engine Module - Data-Oriented Programming (DOP) style
///
/// - engine_data.rs: MorphEngine and its frame scratch buffers
/// - engine_operations.rs: construction, the frame pipeline and the public API

pub mod engine_data;
pub mod engine_operations;

pub use engine_data::{FrameScratch, MorphEngine};

pub use engine_operations::{
    advance_and_snapshot, compute_frame_into, create_engine, create_frame_scratch, depth_range_for,
    frame_params,
};
