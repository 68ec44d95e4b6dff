use crate::math::vector_2d::weighted_average;
use crate::math::Point2;

/// Rounds a closed polygon by cutting its corners.
///
/// Each pass replaces every edge `(i, i+1)` by its 25% and 75% points, so an
/// `n`-vertex polygon becomes `2n` vertices per pass.
#[derive(Debug)]
pub struct SmoothCorners<'a> {
    points: &'a [Point2],
    passes: usize,
}

impl<'a> SmoothCorners<'a> {
    /// Creates a single-pass smoothing of `points`.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points, passes: 1 }
    }

    /// Sets the number of corner-cutting passes.
    #[must_use]
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    /// Returns the smoothed polygon. The input is left untouched.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let mut current = self.points.to_vec();
        for _ in 0..self.passes {
            current = cut_corners(&current);
        }
        current
    }
}

fn cut_corners(points: &[Point2]) -> Vec<Point2> {
    let n = points.len();
    let mut smoothed = Vec::with_capacity(2 * n);
    for i in 0..n {
        let j = (i + 1) % n;
        smoothed.push(weighted_average(&points[i], &points[j], 0.25));
        smoothed.push(weighted_average(&points[i], &points[j], 0.75));
    }
    smoothed
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::polygon_2d::signed_area;
    use crate::math::TOLERANCE;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(8.0, 0.0),
            Point2::new(8.0, 8.0),
            Point2::new(0.0, 8.0),
        ]
    }

    #[test]
    fn doubles_vertex_count() {
        assert_eq!(SmoothCorners::new(&square()).execute().len(), 8);
    }

    #[test]
    fn k_passes_scale_by_power_of_two() {
        for k in 0..4 {
            let out = SmoothCorners::new(&square()).with_passes(k).execute();
            assert_eq!(out.len(), 4 << k);
        }
    }

    #[test]
    fn quarter_points_on_each_edge() {
        let out = SmoothCorners::new(&square()).execute();
        assert_abs_diff_eq!(out[0].x, 2.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(out[0].y, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(out[1].x, 6.0, epsilon = TOLERANCE);
        // Closing edge (3 -> 0).
        assert_abs_diff_eq!(out[7].x, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(out[7].y, 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn cuts_off_corner_area() {
        // Each corner loses a right triangle with legs of 2.
        let out = SmoothCorners::new(&square()).execute();
        assert_abs_diff_eq!(signed_area(&out), 64.0 - 4.0 * 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn input_untouched() {
        let pts = square();
        let _ = SmoothCorners::new(&pts).with_passes(2).execute();
        assert_eq!(pts, square());
    }
}
