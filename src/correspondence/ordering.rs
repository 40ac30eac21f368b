//! Pre-match orderings.
//!
//! Sorting both clouds into a coherent traversal before matching keeps
//! neighbouring sources close to neighbouring targets, which matters most
//! for the greedy solver.

use glam::Vec3;
use std::cmp::Ordering;

/// Angle around the torus ring (about Y), then height
pub fn flow_order(points: &[Vec3]) -> Vec<Vec3> {
    let mut keyed: Vec<(f32, f32, Vec3)> = points
        .iter()
        .map(|p| (p.z.atan2(p.x), p.y, *p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));
    keyed.into_iter().map(|(_, _, p)| p).collect()
}

/// Rings of width `ring_width` outward from the center, angle within a ring
pub fn spiral_order(points: &[Vec3], ring_width: f32) -> Vec<Vec3> {
    let width = if ring_width > f32::EPSILON { ring_width } else { 1.0 };
    let mut keyed: Vec<(u32, f32, Vec3)> = points
        .iter()
        .map(|p| {
            let ring = (p.truncate().length() / width).floor() as u32;
            (ring, p.y.atan2(p.x), *p)
        })
        .collect();
    keyed.sort_by(|a, b| match a.0.cmp(&b.0) {
        Ordering::Equal => a.1.total_cmp(&b.1),
        other => other,
    });
    keyed.into_iter().map(|(_, _, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_order_sweeps_by_angle() {
        let points = [
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.5, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, -0.5, 0.0),
        ];
        let ordered = flow_order(&points);
        assert_eq!(ordered[0], Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ordered[1], Vec3::new(1.0, -0.5, 0.0));
        assert_eq!(ordered[2], Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(ordered[3], Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_spiral_order_starts_at_center() {
        let points = [
            Vec3::new(30.0, 0.0, 0.0),
            Vec3::new(0.0, 12.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-12.0, 0.0, 0.0),
        ];
        let ordered = spiral_order(&points, 10.0);
        assert_eq!(ordered[0], Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(ordered[1], Vec3::new(0.0, 12.0, 0.0));
        assert_eq!(ordered[2], Vec3::new(-12.0, 0.0, 0.0));
        assert_eq!(ordered[3], Vec3::new(30.0, 0.0, 0.0));
    }

    #[test]
    fn test_orderings_are_permutations() {
        let points: Vec<Vec3> = (0..50)
            .map(|i| Vec3::new((i as f32).sin() * 10.0, i as f32, (i as f32).cos() * 10.0))
            .collect();
        assert_eq!(flow_order(&points).len(), points.len());
        assert_eq!(spiral_order(&points, 2.0).len(), points.len());
    }
}
