use super::vector_2d::dist;
use super::{Point2, Rect};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y-up). Fewer than
/// three vertices have zero area.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Reverses the vertex order in place, flipping the winding.
pub fn reverse(points: &mut [Point2]) {
    points.reverse();
}

/// Reorders `points` if needed so the polygon has non-negative signed area.
///
/// Returns `true` if the order was reversed.
pub fn orient_positive(points: &mut [Point2]) -> bool {
    if signed_area(points) < 0.0 {
        reverse(points);
        return true;
    }
    false
}

/// Total length of the closed tour through `points`, including the closing edge.
#[must_use]
pub fn tour_length(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|i| dist(&points[i], &points[(i + 1) % n])).sum()
}

/// Maps `points` affinely so their bounding box fills `target`.
///
/// An axis with zero extent in the source uses a unit scale factor instead of
/// dividing by zero.
#[must_use]
pub fn rescale(points: &[Point2], target: &Rect) -> Vec<Point2> {
    let Some(src) = Rect::bounding_box(points) else {
        return Vec::new();
    };

    let mut src_w = src.width();
    let mut src_h = src.height();
    if src_w == 0.0 {
        src_w = 1.0;
    }
    if src_h == 0.0 {
        src_h = 1.0;
    }
    let sx = target.width() / src_w;
    let sy = target.height() / src_h;

    points
        .iter()
        .map(|p| {
            Point2::new(
                target.left + (p.x - src.left) * sx,
                target.top + (p.y - src.top) * sy,
            )
        })
        .collect()
}
