use tracing::trace;

use crate::math::vector_2d::dist;
use crate::math::{Point2, TOLERANCE};

/// Improves a closed tour in place with 2-opt moves.
///
/// For every pair of non-adjacent edges `(i, i+1)` and `(j, j+1)`, the
/// reconnection `(i, j)`, `(i+1, j+1)` is applied by reversing `i+1..=j`
/// whenever it shortens the tour by more than [`TOLERANCE`]. Full passes
/// repeat until one makes no change or `max_passes` is reached.
///
/// Returns the number of passes run.
pub fn improve(tour: &mut [Point2], max_passes: Option<usize>) -> usize {
    let n = tour.len();
    if n <= 3 {
        return 0;
    }

    let mut passes = 0;
    let mut improved = true;
    while improved {
        if max_passes.is_some_and(|max| passes >= max) {
            break;
        }
        improved = false;
        passes += 1;

        for i in 0..n - 1 {
            for j in (i + 2)..n {
                // Edge (n-1, 0) shares vertex 0 with edge (0, 1).
                if i == 0 && j == n - 1 {
                    continue;
                }
                let a = tour[i];
                let b = tour[i + 1];
                let c = tour[j];
                let d = tour[(j + 1) % n];

                let before = dist(&a, &b) + dist(&c, &d);
                let after = dist(&a, &c) + dist(&b, &d);
                if after < before - TOLERANCE {
                    tour[i + 1..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    trace!(passes, vertices = n, "2-opt converged");
    passes
}
