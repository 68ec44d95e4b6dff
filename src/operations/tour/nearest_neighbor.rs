use crate::math::vector_2d::dist;
use crate::math::Point2;

/// Builds a tour by walking from the first point to the nearest unvisited
/// point until every point is visited. Ties go to the lowest index.
#[must_use]
pub fn build(points: &[Point2]) -> Vec<Point2> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);

    let mut current = 0;
    visited[current] = true;
    tour.push(points[current]);

    while tour.len() < n {
        let mut nearest: Option<(usize, f64)> = None;
        for (i, p) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = dist(&points[current], p);
            if nearest.map_or(true, |(_, best)| d < best) {
                nearest = Some((i, d));
            }
        }
        let Some((next, _)) = nearest else {
            break;
        };
        visited[next] = true;
        tour.push(points[next]);
        current = next;
    }

    tour
}
