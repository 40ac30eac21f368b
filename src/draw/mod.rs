/// Draw Module - Data-Oriented Programming (DOP) style
///
/// - draw_data.rs: render primitives, colors and frame counters
/// - draw_operations.rs: color math and command emission

pub mod draw_data;
pub mod draw_operations;

pub use draw_data::{DrawCommand, FrameStats, Rect, Rgba, SlotColor};

pub use draw_operations::{background_color, emit_draw_commands, hsl_to_rgb, slot_colors};
