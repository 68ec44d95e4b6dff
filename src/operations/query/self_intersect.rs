use crate::math::intersect_2d::segments_intersect;
use crate::math::Point2;

/// Checks whether a closed polygon crosses or touches itself.
///
/// Every pair of non-adjacent edges is tested, O(n^2). Adjacent edges share
/// a vertex and are skipped. Collinear overlaps and vertex-on-edge touches
/// count as intersections.
#[derive(Debug)]
pub struct IsSelfIntersecting<'a> {
    points: &'a [Point2],
}

impl<'a> IsSelfIntersecting<'a> {
    /// Creates a new self-intersection query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Returns `true` if any two non-adjacent edges intersect.
    /// Polygons with fewer than three vertices never self-intersect.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.first_crossing().is_some()
    }

    /// Returns the start indices `(i, j)`, `i < j`, of the first pair of
    /// intersecting non-adjacent edges.
    #[must_use]
    pub fn first_crossing(&self) -> Option<(usize, usize)> {
        let pts = self.points;
        let n = pts.len();
        if n < 3 {
            return None;
        }

        for i in 0..n {
            let p1 = &pts[i];
            let q1 = &pts[(i + 1) % n];
            for j in (i + 2)..n {
                // Edge (n-1, 0) is adjacent to edge (0, 1).
                if i == 0 && j == n - 1 {
                    continue;
                }
                let p2 = &pts[j];
                let q2 = &pts[(j + 1) % n];
                if segments_intersect(p1, q1, p2, q2) {
                    return Some((i, j));
                }
            }
        }
        None
    }
}
