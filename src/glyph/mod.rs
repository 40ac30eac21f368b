/// Glyph Module - Data-Oriented Programming (DOP) style
///
/// - glyph_data.rs: matrix, cell and point containers
/// - glyph_operations.rs: QR encoding and flat point layout

pub mod glyph_data;
pub mod glyph_operations;

pub use glyph_data::{ErrorCorrection, GlyphCell, GlyphMatrix, GlyphPoints};

pub use glyph_operations::{active_cells, glyph_points, is_active, rasterize_payload};
