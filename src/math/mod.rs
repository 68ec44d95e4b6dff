pub mod intersect_2d;
pub mod polygon_2d;
pub mod rect;
pub mod vector_2d;

pub use rect::Rect;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Orientation predicates do not use it; they compare the cross product
/// against zero exactly.
pub const TOLERANCE: f64 = 1e-10;
