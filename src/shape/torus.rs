//! Torus point generation
//!
//! Points sit on a (u, v) grid: u goes around the ring, v around the tube.
//! Odd rings are shifted by half a tube step so the rows interlock like
//! bricks instead of lining up into a visible seam.

use glam::Vec3;
use std::f32::consts::TAU;

/// Point on a torus with major radius `major` and tube radius `minor`
#[inline]
pub fn torus_point(u: f32, v: f32, major: f32, minor: f32) -> Vec3 {
    let ring = major + minor * v.cos();
    Vec3::new(ring * u.cos(), minor * v.sin(), ring * u.sin())
}

/// Segment counts for a near-uniform grid of `n` points
pub fn torus_segments(n: usize, major: f32, minor: f32) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let minor_segments = ((n as f32 * minor / major).sqrt().round() as usize).max(1);
    let major_segments = ((n as f32 / minor_segments as f32).round() as usize).max(1);
    (major_segments, minor_segments)
}

/// Exactly `n` points spread over the torus surface
pub fn generate_torus_points(n: usize, major: f32, minor: f32) -> Vec<Vec3> {
    let (major_segments, minor_segments) = torus_segments(n, major, minor);
    let mut points = Vec::with_capacity(n);

    'rings: for i in 0..major_segments {
        let u = i as f32 / major_segments as f32 * TAU;
        let brick_offset = if i % 2 == 1 { 0.5 } else { 0.0 };
        for j in 0..minor_segments {
            if points.len() == n {
                break 'rings;
            }
            let v = (j as f32 + brick_offset) / minor_segments as f32 * TAU;
            points.push(torus_point(u, v, major, minor));
        }
    }

    // Rounding can leave the grid short; continue along a helical sweep
    let missing = n - points.len();
    if missing > 0 {
        log::debug!(
            "[torus::generate] Grid {}x{} short by {}, filling along sweep",
            major_segments,
            minor_segments,
            missing
        );
        for k in 0..missing {
            let t = (k as f32 + 0.5) / missing as f32;
            let u = t * TAU + 0.5 * TAU / major_segments as f32;
            let v = t * TAU * minor_segments as f32 + 0.25 * TAU / minor_segments as f32;
            points.push(torus_point(u, v, major, minor));
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_on_surface(p: Vec3, major: f32, minor: f32) {
        let ring_distance = (p.x * p.x + p.z * p.z).sqrt() - major;
        let tube_distance = (ring_distance * ring_distance + p.y * p.y).sqrt();
        assert!(
            (tube_distance - minor).abs() < 1e-3,
            "point {:?} is {} from the tube center",
            p,
            tube_distance
        );
    }

    #[test]
    fn test_exact_count() {
        for n in [0, 1, 2, 7, 100, 333, 1024] {
            let points = generate_torus_points(n, 100.0, 40.0);
            assert_eq!(points.len(), n, "n = {}", n);
        }
    }

    #[test]
    fn test_points_lie_on_surface() {
        for p in generate_torus_points(250, 100.0, 40.0) {
            assert_on_surface(p, 100.0, 40.0);
        }
    }

    #[test]
    fn test_shortfall_is_filled() {
        // 16 points at r/R = 0.4 -> 3 tube segments x 5 rings = 15
        let (major, minor) = torus_segments(16, 100.0, 40.0);
        assert_eq!((major, minor), (5, 3));
        let points = generate_torus_points(16, 100.0, 40.0);
        assert_eq!(points.len(), 16);
        for p in points {
            assert_on_surface(p, 100.0, 40.0);
        }
    }

    #[test]
    fn test_brick_offset_on_odd_rings() {
        let (_, minor_segments) = torus_segments(100, 100.0, 40.0);
        let points = generate_torus_points(100, 100.0, 40.0);
        // First point of ring 0 sits at v = 0 (outer equator, y = 0)
        assert!(points[0].y.abs() < 1e-4);
        // First point of ring 1 is shifted half a step up the tube
        assert!(points[minor_segments].y > 1.0);
    }
}
