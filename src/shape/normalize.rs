/// Data-Oriented bounding box and normalization
///
/// Pure functions - no methods, just data transformations.
use super::shape_data::{Aabb, NormalizedShape};
use glam::Vec3;

/// Bounding box of a point cloud. Empty input yields a zero box at the origin.
pub fn aabb_from_points(points: &[Vec3]) -> Aabb {
    if points.is_empty() {
        return Aabb {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        };
    }
    points.iter().fold(
        Aabb {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        },
        |acc, p| Aabb {
            min: acc.min.min(*p),
            max: acc.max.max(*p),
        },
    )
}

/// Get center point of AABB
pub fn aabb_center(aabb: &Aabb) -> Vec3 {
    (aabb.min + aabb.max) * 0.5
}

/// Get full extents of AABB
pub fn aabb_extent(aabb: &Aabb) -> Vec3 {
    aabb.max - aabb.min
}

/// Center the cloud on the origin and scale it so its Y-extent is `target_height`.
///
/// A flat cloud (zero height) is treated as height 1.
pub fn normalize_shape(points: &[Vec3], target_height: f32) -> NormalizedShape {
    if points.is_empty() {
        return NormalizedShape {
            points: Vec::new(),
            scale: 1.0,
        };
    }

    let bounds = aabb_from_points(points);
    let center = aabb_center(&bounds);
    let mut height = aabb_extent(&bounds).y;
    if height <= f32::EPSILON {
        height = 1.0;
    }
    let scale = target_height / height;

    NormalizedShape {
        points: points.iter().map(|p| (*p - center) * scale).collect(),
        scale,
    }
}
