use crate::math::{Point2, Vector2};

/// Estimates the signed curvature at every vertex of a closed polygon.
///
/// Uses the five vertices centred on each index:
/// `r' = (p[i+1] - p[i-1]) / 2`, `r'' = (p[i+2] - 2 p[i] + p[i-2]) / 4`,
/// `k = (r' x r'') / |r'|^3`. Positive values turn counter-clockwise.
/// A vertex whose neighbours coincide gets zero curvature.
#[must_use]
pub fn estimate_curvature(points: &[Point2]) -> Vec<f64> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    (0..n)
        .map(|i| {
            let prev2 = points[(i + 2 * n - 2) % n];
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            let next2 = points[(i + 2) % n];

            let d1: Vector2 = 0.5 * (next - prev);
            let d2: Vector2 = 0.25 * ((next2 - curr) - (curr - prev2));

            let cross = d1.x * d2.y - d1.y * d2.x;
            let speed = (d1.x * d1.x + d1.y * d1.y).sqrt();
            if speed == 0.0 {
                return 0.0;
            }
            cross / (speed * speed * speed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn circle(radius: f64, count: u32, ccw: bool) -> Vec<Point2> {
        let step = 2.0 * std::f64::consts::PI / f64::from(count);
        (0..count)
            .map(|i| {
                let a = f64::from(i) * step * if ccw { 1.0 } else { -1.0 };
                Point2::new(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    #[test]
    fn circle_curvature_is_inverse_radius() {
        for k in estimate_curvature(&circle(100.0, 64, true)) {
            assert_abs_diff_eq!(k, 0.01, epsilon = 1e-9);
        }
    }

    #[test]
    fn clockwise_circle_is_negative() {
        for k in estimate_curvature(&circle(50.0, 32, false)) {
            assert_abs_diff_eq!(k, -0.02, epsilon = 1e-9);
        }
    }

    #[test]
    fn straight_run_is_flat() {
        let pts: Vec<Point2> = (0..8_u32)
            .map(|i| Point2::new(f64::from(i) * 10.0, 0.0))
            .collect();
        let k = estimate_curvature(&pts);
        // Interior vertices away from the wrap-around are collinear.
        for &v in &k[2..6] {
            assert!(v.abs() < 1e-12);
        }
    }

    #[test]
    fn coincident_neighbours_give_zero() {
        let pts = vec![Point2::new(3.0, 3.0); 5];
        assert!(estimate_curvature(&pts).iter().all(|k| k.abs() < f64::EPSILON));
    }
}
