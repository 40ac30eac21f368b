//! Shape Operations - Pure DOP Functions
//!
//! One-time construction of `ShapeData` from a `MorphConfig`.

use super::normalize::normalize_shape;
use super::shape_data::{ShapeData, SpriteRect};
use super::torus::generate_torus_points;
use crate::config::{MorphConfig, SpriteConfig};
use crate::correspondence::{
    apply_assignment, flow_order, is_bijection, solve_correspondence, spiral_order,
};
use crate::error::{EngineInitError, EngineResult};
use crate::glyph::{active_cells, glyph_points, rasterize_payload};

/// Atlas rectangles for every slot, row-major over the sprite grid
pub fn sprite_rects(sprite: &SpriteConfig) -> Vec<SpriteRect> {
    (0..sprite.num_slots)
        .map(|slot| SpriteRect {
            x: (slot % sprite.cols) as f32 * sprite.cell_size,
            y: (slot / sprite.cols) as f32 * sprite.cell_size,
            width: sprite.cell_size,
            height: sprite.cell_size,
        })
        .collect()
}

/// Slot of each point: `i % slot_count`
pub fn sprite_assignment(point_count: usize, slot_count: usize) -> Vec<usize> {
    let slots = slot_count.max(1);
    (0..point_count).map(|i| i % slots).collect()
}

/// Check the index-alignment invariants of a built shape
pub fn verify_shape_data(shape: &ShapeData) -> EngineResult<()> {
    if shape.shape_a.len() != shape.shape_b.len() {
        return Err(EngineInitError::ShapeMismatch {
            shape_a: shape.shape_a.len(),
            shape_b: shape.shape_b.len(),
        });
    }
    if shape.sprite_assignment.len() != shape.shape_a.len() {
        return Err(EngineInitError::ShapeMismatch {
            shape_a: shape.shape_a.len(),
            shape_b: shape.sprite_assignment.len(),
        });
    }
    Ok(())
}

/// Largest distance from the origin over both endpoints.
///
/// Interpolated points stay within it and rotation about the origin keeps
/// it, so every frame's z lies in `[-radius, radius]`.
pub fn bounding_radius(shape: &ShapeData) -> f32 {
    shape
        .shape_a
        .iter()
        .chain(&shape.shape_b)
        .map(|p| p.length())
        .fold(0.0, f32::max)
}

/// Rasterize the payload, generate both shapes and match them
pub fn build_shape_data(config: &MorphConfig) -> EngineResult<ShapeData> {
    let matrix = rasterize_payload(&config.payload, config.error_correction)?;
    let cells = active_cells(&matrix);
    let glyph = glyph_points(&cells, matrix.size, config.glyph.footprint);
    let glyph_normalized = normalize_shape(&glyph.points, config.glyph.target_height);
    let module_size = glyph.module_size * glyph_normalized.scale;

    let n = glyph_normalized.points.len();
    let torus = generate_torus_points(n, config.torus.major_radius, config.torus.minor_radius);
    let torus_normalized = normalize_shape(&torus, config.torus.target_height);

    if torus_normalized.points.len() != glyph_normalized.points.len() {
        return Err(EngineInitError::ShapeMismatch {
            shape_a: torus_normalized.points.len(),
            shape_b: glyph_normalized.points.len(),
        });
    }

    let shape_a = flow_order(&torus_normalized.points);
    let glyph_ordered = spiral_order(&glyph_normalized.points, module_size);

    let correspondence =
        solve_correspondence(&shape_a, &glyph_ordered, config.solver.exact_threshold);
    if !is_bijection(&correspondence.assignment, glyph_ordered.len()) {
        return Err(EngineInitError::NotBijective {
            reason: format!(
                "{:?} solver returned {} indices for {} targets",
                correspondence.mode,
                correspondence.assignment.len(),
                glyph_ordered.len()
            ),
        });
    }
    let shape_b = apply_assignment(&glyph_ordered, &correspondence.assignment);

    let shape = ShapeData {
        sprite_assignment: sprite_assignment(n, config.sprite.num_slots as usize),
        sprite_rects: sprite_rects(&config.sprite),
        shape_a,
        shape_b,
        module_size,
        matrix_size: matrix.size,
        solver_mode: correspondence.mode,
        total_distance: correspondence.total_distance,
    };
    verify_shape_data(&shape)?;

    log::info!(
        "[shape_operations::build] {} points, {}x{} matrix, module {:.2}, solver {:?}",
        n,
        matrix.size,
        matrix.size,
        module_size,
        shape.solver_mode
    );

    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correspondence::SolverMode;
    use crate::shape::normalize::{aabb_extent, aabb_from_points};
    use glam::Vec3;

    #[test]
    fn test_build_default_shape() {
        let config = MorphConfig::default();
        let shape = build_shape_data(&config).expect("default config should build");

        assert!(!shape.shape_a.is_empty());
        assert_eq!(shape.shape_a.len(), shape.shape_b.len());
        assert_eq!(shape.sprite_assignment.len(), shape.shape_a.len());
        assert_eq!(shape.sprite_rects.len(), config.sprite.num_slots as usize);
        assert_eq!(shape.solver_mode, SolverMode::Exact);

        // Glyph is flat and scaled to its target height
        assert!(shape.shape_b.iter().all(|p| p.z == 0.0));
        let glyph_height = aabb_extent(&aabb_from_points(&shape.shape_b)).y;
        assert!((glyph_height - config.glyph.target_height).abs() < 1e-2);

        let torus_height = aabb_extent(&aabb_from_points(&shape.shape_a)).y;
        assert!((torus_height - config.torus.target_height).abs() < 1e-2);
    }

    #[test]
    fn test_shape_b_is_permutation_of_glyph() {
        let config = MorphConfig {
            payload: "permute".to_string(),
            ..Default::default()
        };
        let shape = build_shape_data(&config).expect("build");

        let matrix = rasterize_payload(&config.payload, config.error_correction).expect("encode");
        let glyph = glyph_points(&active_cells(&matrix), matrix.size, config.glyph.footprint);
        let normalized = normalize_shape(&glyph.points, config.glyph.target_height);

        let key = |p: &Vec3| ((p.x * 100.0).round() as i64, (p.y * 100.0).round() as i64);
        let mut expected: Vec<_> = normalized.points.iter().map(key).collect();
        let mut actual: Vec<_> = shape.shape_b.iter().map(key).collect();
        expected.sort();
        actual.sort();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_greedy_mode_for_low_threshold() {
        let mut config = MorphConfig::default();
        config.solver.exact_threshold = 10;
        let shape = build_shape_data(&config).expect("build");
        assert_eq!(shape.solver_mode, SolverMode::Greedy);
        assert_eq!(shape.shape_a.len(), shape.shape_b.len());
    }

    #[test]
    fn test_sprite_rects_layout() {
        let sprite = SpriteConfig {
            cols: 3,
            rows: 2,
            cell_size: 10.0,
            num_slots: 5,
        };
        let rects = sprite_rects(&sprite);
        assert_eq!(rects.len(), 5);
        assert_eq!(
            rects[4],
            SpriteRect {
                x: 10.0,
                y: 10.0,
                width: 10.0,
                height: 10.0
            }
        );
    }

    #[test]
    fn test_bounding_radius_covers_both_shapes() {
        let shape = ShapeData {
            shape_a: vec![Vec3::new(3.0, 0.0, 4.0), Vec3::ZERO],
            shape_b: vec![Vec3::new(-6.0, 0.0, 0.0), Vec3::X],
            sprite_assignment: vec![0, 1],
            sprite_rects: Vec::new(),
            module_size: 1.0,
            matrix_size: 21,
            solver_mode: SolverMode::Exact,
            total_distance: 0.0,
        };
        assert_eq!(bounding_radius(&shape), 6.0);
    }

    #[test]
    fn test_sprite_assignment_wraps() {
        assert_eq!(sprite_assignment(5, 2), vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_encoding_failure_surfaces() {
        let config = MorphConfig {
            payload: "q".repeat(8000),
            ..Default::default()
        };
        assert!(matches!(
            build_shape_data(&config),
            Err(EngineInitError::Encoding { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        let shape = ShapeData {
            shape_a: vec![Vec3::ZERO; 3],
            shape_b: vec![Vec3::ZERO; 2],
            sprite_assignment: vec![0; 3],
            sprite_rects: Vec::new(),
            module_size: 1.0,
            matrix_size: 21,
            solver_mode: SolverMode::Exact,
            total_distance: 0.0,
        };
        assert!(matches!(
            verify_shape_data(&shape),
            Err(EngineInitError::ShapeMismatch { shape_a: 3, shape_b: 2 })
        ));
    }
}
