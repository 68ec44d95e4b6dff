use crate::math::vector_2d::{dist, midpoint, norm};
use crate::math::{Point2, Vector2};

use super::RelaxParams;

/// Accumulates the per-vertex displacement for one relaxation step.
///
/// Every force is read from `points` as given; nothing is applied here.
/// For each `i` with neighbours `j = i+1` and `k = i+2` (cyclic):
///
/// - bending pulls `j` toward the midpoint of `i` and `k`
/// - length pushes `i` and `j` apart or together toward the target edge length
/// - repulsion pushes `j` away from every non-neighbour closer than the
///   repulsion range
#[must_use]
pub fn accumulate(points: &[Point2], road_half_width: f64, params: &RelaxParams) -> Vec<Vector2> {
    let n = points.len();
    let mut forces = vec![Vector2::zeros(); n];
    let range = params.repulsion_range * road_half_width;

    for i in 0..n {
        let j = (i + 1) % n;
        let k = (i + 2) % n;

        let target = midpoint(&points[i], &points[k]);
        forces[j] += params.bending * (target - points[j]);

        let stretch = params.length * (dist(&points[j], &points[i]) - params.target_edge_length);
        let dir = norm(&(points[j] - points[i]));
        forces[i] += dir * stretch;
        forces[j] -= dir * stretch;

        for m in 0..n {
            if m == i || m == j || m == k {
                continue;
            }
            let d = dist(&points[j], &points[m]);
            if d < range {
                let magnitude = -params.repulsion * (range - d);
                forces[j] += magnitude * (points[m] - points[j]);
            }
        }
    }

    forces
}
