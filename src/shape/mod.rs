/// Shape Module - Data-Oriented Programming (DOP) style
///
/// - shape_data.rs: ShapeData, bounds and sprite rectangles
/// - torus.rs: torus surface sampling
/// - normalize.rs: bounding boxes and height normalization
/// - shape_operations.rs: one-time ShapeData construction

pub mod normalize;
pub mod shape_data;
pub mod shape_operations;
pub mod torus;

pub use shape_data::{Aabb, NormalizedShape, ShapeData, SpriteRect};

pub use normalize::{aabb_center, aabb_extent, aabb_from_points, normalize_shape};
pub use shape_operations::{bounding_radius, build_shape_data, sprite_assignment, sprite_rects, verify_shape_data};
pub use torus::{generate_torus_points, torus_point, torus_segments};
