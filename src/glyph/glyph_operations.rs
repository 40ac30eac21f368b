//! Glyph Operations - Pure DOP Functions
//!
//! Payload -> QR matrix -> active cells -> flat points.

use super::glyph_data::{ErrorCorrection, GlyphCell, GlyphMatrix, GlyphPoints};
use crate::error::{EngineInitError, EngineResult};
use glam::Vec3;
use qrcode::{Color, EcLevel, QrCode};

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::Low => EcLevel::L,
        ErrorCorrection::Medium => EcLevel::M,
        ErrorCorrection::Quartile => EcLevel::Q,
        ErrorCorrection::High => EcLevel::H,
    }
}

/// Encode a payload into a square module matrix
pub fn rasterize_payload(payload: &str, level: ErrorCorrection) -> EngineResult<GlyphMatrix> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), ec_level(level)).map_err(
        |e| EngineInitError::Encoding {
            payload_len: payload.len(),
            reason: e.to_string(),
        },
    )?;

    let size = code.width();
    let cells: Vec<bool> = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();

    log::debug!(
        "[glyph_operations::rasterize] {} byte payload -> {}x{} matrix ({:?})",
        payload.len(),
        size,
        size,
        level
    );

    Ok(GlyphMatrix { size, cells })
}

/// Whether the module at (col, row) is active. Out of range reads as inactive.
#[inline]
pub fn is_active(matrix: &GlyphMatrix, col: usize, row: usize) -> bool {
    col < matrix.size && row < matrix.size && matrix.cells[row * matrix.size + col]
}

/// Active cells in row-major order
pub fn active_cells(matrix: &GlyphMatrix) -> Vec<GlyphCell> {
    (0..matrix.size)
        .flat_map(|row| (0..matrix.size).map(move |col| GlyphCell { col, row }))
        .filter(|cell| is_active(matrix, cell.col, cell.row))
        .collect()
}

/// Lay active cells out on a square footprint centered at the origin, z = 0
pub fn glyph_points(cells: &[GlyphCell], matrix_size: usize, footprint: f32) -> GlyphPoints {
    let module_size = footprint / matrix_size.max(1) as f32;
    let half = footprint * 0.5;

    let points = cells
        .iter()
        .map(|cell| {
            Vec3::new(
                (cell.col as f32 + 0.5) * module_size - half,
                (cell.row as f32 + 0.5) * module_size - half,
                0.0,
            )
        })
        .collect();

    GlyphPoints {
        points,
        module_size,
    }
}
