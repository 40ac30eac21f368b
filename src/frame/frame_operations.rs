//! Frame Operations - Pure DOP Functions
//!
//! The per-point transform: wave delay, staggered easing, interpolation,
//! rotation blend, perspective projection, sizing and opacity. Points do
//! not depend on each other, so a frame can be split across threads.

use super::frame_data::{FrameParams, PointTransform, WaveDelayCache};
use crate::animation::{wrap_signed, AnimationSnapshot};
use crate::constants::camera::MIN_DEPTH_DENOMINATOR;
use crate::shape::ShapeData;
use glam::Vec3;
use rayon::prelude::*;
use std::f32::consts::{PI, TAU};

// ============================================================================
// EASING
// ============================================================================

/// Symmetric cubic ease-in-out
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
    }
}

/// Hermite smoothstep between two edges
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ============================================================================
// ROTATION / PROJECTION
// ============================================================================

#[inline]
pub fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

#[inline]
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

/// Perspective factor for a point at depth `z`
#[inline]
pub fn perspective_scale(z: f32, camera_distance: f32) -> f32 {
    camera_distance / (camera_distance + z).max(MIN_DEPTH_DENOMINATOR)
}

// ============================================================================
// STAGGER
// ============================================================================

/// Delay in [0, wave_span] from the point's angle around the tilted, staggered ring
pub fn wave_delay(point: Vec3, tilt: f32, stagger_angle: f32, wave_span: f32) -> f32 {
    let p = rotate_y(rotate_x(point, tilt), stagger_angle);
    let normalized = (p.z.atan2(p.x) + PI) / TAU;
    normalized.clamp(0.0, 1.0) * wave_span
}

/// Recompute delays when the stagger snapshot changed; no-op otherwise
pub fn refresh_wave_delays(
    cache: &mut WaveDelayCache,
    shape_a: &[Vec3],
    stagger_angle: f32,
    params: &FrameParams,
) {
    let key = stagger_angle.to_bits();
    if cache.stagger_key == Some(key) && cache.delays.len() == shape_a.len() {
        return;
    }
    cache.delays.clear();
    cache.delays.extend(shape_a.iter().map(|p| {
        wave_delay(*p, params.tuning.tilt, stagger_angle, params.tuning.wave_span)
    }));
    cache.stagger_key = Some(key);
}

/// Point-local progress after its wave delay
#[inline]
pub fn local_progress(progress: f32, delay: f32) -> f32 {
    let span = (1.0 - delay).max(f32::EPSILON);
    ((progress - delay) / span).clamp(0.0, 1.0)
}

// ============================================================================
// TRANSFORM
// ============================================================================

/// Full transform of one point
pub fn compute_point_transform(
    index: usize,
    a: Vec3,
    b: Vec3,
    slot: usize,
    delay: f32,
    snapshot: &AnimationSnapshot,
    params: &FrameParams,
) -> PointTransform {
    let tuning = &params.tuning;

    let local = local_progress(snapshot.progress, delay);
    let eased = ease_in_out_cubic(local);
    let position = a.lerp(b, eased);

    let rotation_delta = wrap_signed(snapshot.rotation_angle - snapshot.frozen_rotation);
    let arc = (eased * PI).sin();
    let rotation = (snapshot.frozen_rotation + rotation_delta) * (1.0 - eased)
        + arc * tuning.transition_boost;
    let tilt = tuning.tilt * (1.0 - eased);
    let rotated = rotate_y(rotate_x(position, tilt), rotation);

    let scale = perspective_scale(rotated.z, tuning.camera_distance);
    let screen_x = params.center_x + rotated.x * scale;
    let screen_y = params.center_y + rotated.y * scale;

    let avatar_size = params.avatar_size * scale;
    let glyph_size = params.module_size * scale * tuning.glyph_size_factor;
    let pulse = 1.0 + arc * (1.0 - eased).powf(tuning.pulse_exponent) * tuning.pulse_amount;
    let size = lerp(avatar_size, glyph_size, eased) * pulse;
    let corner_radius = size * 0.5 * (1.0 - eased);

    let front_fade = 1.0 - smoothstep(tuning.front_fade_start, tuning.front_fade_end, -rotated.z);
    let image_opacity = front_fade * (1.0 - eased);
    let background_opacity = image_opacity.max(eased);

    PointTransform {
        screen_x,
        screen_y,
        size,
        corner_radius,
        image_opacity,
        background_opacity,
        eased,
        z: rotated.z,
        index: index as u32,
        slot: slot as u32,
    }
}

/// Transform every point into `out`, reusing its allocation.
///
/// Large clouds are split across the rayon pool; results are identical
/// either way.
pub fn compute_transforms(
    shape: &ShapeData,
    delays: &[f32],
    snapshot: &AnimationSnapshot,
    params: &FrameParams,
    out: &mut Vec<PointTransform>,
) {
    let n = shape.shape_a.len();
    out.clear();
    out.resize(n, PointTransform::default());

    let compute = |(i, transform): (usize, &mut PointTransform)| {
        *transform = compute_point_transform(
            i,
            shape.shape_a[i],
            shape.shape_b[i],
            shape.sprite_assignment[i],
            delays[i],
            snapshot,
            params,
        );
    };

    if n >= params.tuning.parallel_threshold {
        out.par_iter_mut().enumerate().for_each(compute);
    } else {
        out.iter_mut().enumerate().for_each(compute);
    }
}

/// Raw bytes of a transform buffer for GPU upload
pub fn transforms_as_bytes(transforms: &[PointTransform]) -> &[u8] {
    bytemuck::cast_slice(transforms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuningConfig;
    use crate::correspondence::SolverMode;

    fn params() -> FrameParams {
        FrameParams {
            center_x: 200.0,
            center_y: 200.0,
            avatar_size: 18.0,
            module_size: 8.0,
            tuning: TuningConfig::default(),
        }
    }

    fn snapshot(progress: f32, rotation: f32, frozen: f32) -> AnimationSnapshot {
        AnimationSnapshot {
            progress,
            rotation_angle: rotation,
            frozen_stagger_angle: frozen,
            frozen_rotation: frozen,
        }
    }

    fn small_shape() -> ShapeData {
        ShapeData {
            shape_a: vec![
                Vec3::new(60.0, 10.0, 0.0),
                Vec3::new(0.0, -20.0, 60.0),
                Vec3::new(-60.0, 0.0, 0.0),
                Vec3::new(0.0, 20.0, -60.0),
            ],
            shape_b: vec![
                Vec3::new(8.0, 8.0, 0.0),
                Vec3::new(-8.0, 8.0, 0.0),
                Vec3::new(-8.0, -8.0, 0.0),
                Vec3::new(8.0, -8.0, 0.0),
            ],
            sprite_assignment: vec![0, 1, 2, 0],
            sprite_rects: Vec::new(),
            module_size: 8.0,
            matrix_size: 2,
            solver_mode: SolverMode::Exact,
            total_distance: 0.0,
        }
    }

    #[test]
    fn test_easing_endpoints_and_symmetry() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        let a = ease_in_out_cubic(0.2);
        let b = ease_in_out_cubic(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_local_progress_is_clamped() {
        assert_eq!(local_progress(0.0, 0.2), 0.0);
        assert_eq!(local_progress(0.1, 0.2), 0.0);
        assert_eq!(local_progress(1.0, 0.2), 1.0);
        assert!((local_progress(0.6, 0.2) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_wave_delay_range() {
        for shape_point in small_shape().shape_a {
            for stagger in [0.0, 1.0, 4.0] {
                let delay = wave_delay(shape_point, 0.3, stagger, 0.25);
                assert!((0.0..=0.25).contains(&delay));
            }
        }
    }

    #[test]
    fn test_progress_zero_is_rotated_torus() {
        let shape = small_shape();
        let params = params();
        let rotation = 2.2;
        let snap = snapshot(0.0, rotation, 0.7);

        for i in 0..shape.shape_a.len() {
            let t = compute_point_transform(i, shape.shape_a[i], shape.shape_b[i], 0, 0.1, &snap, &params);
            let expected = rotate_y(rotate_x(shape.shape_a[i], params.tuning.tilt), rotation);
            let scale = perspective_scale(expected.z, params.tuning.camera_distance);

            assert_eq!(t.eased, 0.0);
            assert!((t.screen_x - (200.0 + expected.x * scale)).abs() < 1e-3);
            assert!((t.screen_y - (200.0 + expected.y * scale)).abs() < 1e-3);
            assert!((t.z - expected.z).abs() < 1e-3);
            assert!((t.size - params.avatar_size * scale).abs() < 1e-3);
            assert!((t.corner_radius - t.size * 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_progress_one_is_square_glyph() {
        let shape = small_shape();
        let params = params();
        let snap = snapshot(1.0, 5.0, 1.3);

        for i in 0..shape.shape_a.len() {
            let t = compute_point_transform(i, shape.shape_a[i], shape.shape_b[i], 0, 0.25, &snap, &params);
            assert_eq!(t.eased, 1.0);
            assert_eq!(t.corner_radius, 0.0);
            assert_eq!(t.image_opacity, 0.0);
            assert_eq!(t.background_opacity, 1.0);
            // Glyph faces the camera: no rotation, no tilt
            assert!(t.z.abs() < 1e-4);
            assert!((t.screen_x - (200.0 + shape.shape_b[i].x)).abs() < 1e-3);
            assert!((t.size - 8.0 * params.tuning.glyph_size_factor).abs() < 1e-3);
        }
    }

    #[test]
    fn test_front_points_fade() {
        let params = params();
        let snap = snapshot(0.0, 0.0, 0.0);
        let mut untilted = params;
        untilted.tuning.tilt = 0.0;

        let near = compute_point_transform(0, Vec3::new(0.0, 0.0, -150.0), Vec3::ZERO, 0, 0.0, &snap, &untilted);
        let far = compute_point_transform(1, Vec3::new(0.0, 0.0, 150.0), Vec3::ZERO, 0, 0.0, &snap, &untilted);
        assert_eq!(near.image_opacity, 0.0);
        assert_eq!(far.image_opacity, 1.0);
        assert!(near.size > far.size);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let shape = small_shape();
        let snap = snapshot(0.4, 1.0, 0.5);
        let mut delays = WaveDelayCache::default();

        let serial_params = params();
        let mut parallel_params = params();
        parallel_params.tuning.parallel_threshold = 0;

        refresh_wave_delays(&mut delays, &shape.shape_a, snap.frozen_stagger_angle, &serial_params);

        let mut serial = Vec::new();
        let mut parallel = Vec::new();
        compute_transforms(&shape, &delays.delays, &snap, &serial_params, &mut serial);
        compute_transforms(&shape, &delays.delays, &snap, &parallel_params, &mut parallel);
        assert_eq!(serial, parallel);
        assert_eq!(serial.len(), 4);
        assert_eq!(serial[1].slot, 1);
    }

    #[test]
    fn test_wave_cache_reuses_buffer() {
        let shape = small_shape();
        let params = params();
        let mut cache = WaveDelayCache::default();

        refresh_wave_delays(&mut cache, &shape.shape_a, 0.5, &params);
        let first = cache.delays.clone();
        let ptr = cache.delays.as_ptr();
        refresh_wave_delays(&mut cache, &shape.shape_a, 0.5, &params);
        assert_eq!(cache.delays.as_ptr(), ptr);

        refresh_wave_delays(&mut cache, &shape.shape_a, 2.0, &params);
        assert_ne!(cache.delays, first);
        assert_eq!(cache.stagger_key, Some(2.0f32.to_bits()));
    }

    #[test]
    fn test_transform_bytes() {
        let transforms = [PointTransform::default(); 3];
        assert_eq!(transforms_as_bytes(&transforms).len(), 120);
    }
}
