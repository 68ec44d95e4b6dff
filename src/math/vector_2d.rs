use super::{Point2, Vector2};

/// Euclidean distance between two points.
#[must_use]
pub fn dist(a: &Point2, b: &Point2) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Returns the unit vector in the direction of `v`.
///
/// A zero-length input yields the zero vector instead of dividing by zero.
#[must_use]
pub fn norm(v: &Vector2) -> Vector2 {
    let len = (v.x * v.x + v.y * v.y).sqrt();
    if len == 0.0 {
        return Vector2::zeros();
    }
    Vector2::new(v.x / len, v.y / len)
}

/// Weighted average `(1 - lambda) * a + lambda * b`.
#[must_use]
pub fn weighted_average(a: &Point2, b: &Point2, lambda: f64) -> Point2 {
    Point2::new(
        (1.0 - lambda) * a.x + lambda * b.x,
        (1.0 - lambda) * a.y + lambda * b.y,
    )
}

/// Midpoint of `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    weighted_average(a, b, 0.5)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn dist_three_four_five() {
        let d = dist(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn dist_negative_coordinates() {
        let d = dist(&Point2::new(-1.0, -1.0), &Point2::new(-4.0, -5.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn dist_same_point_is_zero() {
        let p = Point2::new(5.0, 5.0);
        assert!(dist(&p, &p).abs() < f64::EPSILON);
    }

    #[test]
    fn norm_basic() {
        let n = norm(&Vector2::new(3.0, 4.0));
        assert_abs_diff_eq!(n.x, 0.6, epsilon = TOLERANCE);
        assert_abs_diff_eq!(n.y, 0.8, epsilon = TOLERANCE);
    }

    #[test]
    fn norm_zero_vector() {
        let n = norm(&Vector2::zeros());
        assert!(n.x.abs() < f64::EPSILON);
        assert!(n.y.abs() < f64::EPSILON);
        assert!(n.x.is_finite() && n.y.is_finite());
    }

    #[test]
    fn weighted_average_quarter() {
        let p = weighted_average(&Point2::new(0.0, 0.0), &Point2::new(8.0, 4.0), 0.25);
        assert_abs_diff_eq!(p.x, 2.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn weighted_average_endpoints() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(-3.0, 7.0);
        assert_eq!(weighted_average(&a, &b, 0.0), a);
        assert_eq!(weighted_average(&a, &b, 1.0), b);
    }

    #[test]
    fn left_normal_basic() {
        let n = left_normal(&Vector2::new(1.0, 0.0));
        assert_abs_diff_eq!(n.x, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(n.y, 1.0, epsilon = TOLERANCE);
    }
}
