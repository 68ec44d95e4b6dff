use std::f64::consts::PI;

use rand::Rng;
use tracing::trace;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::vector_2d::dist;
use crate::math::{Point2, Rect};

/// Draws well-separated random points inside a rectangle (dart throwing).
///
/// The minimum spacing is `sqrt(area / (n * PI))`: each accepted point owns a
/// disc whose area is roughly `area / n`. Candidates are drawn uniformly and
/// rejected if they fall within that distance of an accepted point.
///
/// Without a candidate budget the sampler loops until `n` points are accepted,
/// so callers must keep `n` reasonable relative to the rectangle's area.
#[derive(Debug)]
pub struct PoissonDiscSampler {
    count: usize,
    bounds: Rect,
    max_candidates: Option<usize>,
}

impl PoissonDiscSampler {
    /// Creates a sampler for `count` points inside `bounds`.
    #[must_use]
    pub fn new(count: usize, bounds: Rect) -> Self {
        Self {
            count,
            bounds,
            max_candidates: None,
        }
    }

    /// Caps the number of candidates drawn before giving up.
    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: Option<usize>) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Minimum distance enforced between any two accepted points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn min_distance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.bounds.area() / (self.count as f64 * PI)).sqrt()
    }

    /// Draws the points.
    ///
    /// # Errors
    ///
    /// - `GeometryError::Degenerate` if the bounds have no area
    /// - `OperationError::Exhausted` if the candidate budget runs out
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point2>> {
        if self.bounds.is_degenerate() {
            return Err(GeometryError::Degenerate(format!(
                "cannot sample inside {:?}",
                self.bounds
            ))
            .into());
        }

        let min_distance = self.min_distance();
        let mut points: Vec<Point2> = Vec::with_capacity(self.count);
        let mut candidates = 0_usize;

        while points.len() < self.count {
            if self.max_candidates.is_some_and(|max| candidates >= max) {
                return Err(OperationError::Exhausted {
                    stage: "poisson disc sampling",
                    attempts: candidates,
                }
                .into());
            }
            candidates += 1;

            let candidate = Point2::new(
                self.bounds.left + rng.gen::<f64>() * self.bounds.width(),
                self.bounds.top + rng.gen::<f64>() * self.bounds.height(),
            );
            if points.iter().all(|p| dist(p, &candidate) >= min_distance) {
                points.push(candidate);
            }
        }

        trace!(
            accepted = points.len(),
            candidates,
            min_distance,
            "poisson disc sampling done"
        );
        Ok(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn produces_requested_count_inside_bounds() {
        let bounds = Rect::new(50.0, 50.0, 550.0, 450.0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pts = PoissonDiscSampler::new(12, bounds).execute(&mut rng).unwrap();
        assert_eq!(pts.len(), 12);
        assert!(pts.iter().all(|p| bounds.contains(p)));
    }

    #[test]
    fn respects_min_distance() {
        let bounds = Rect::from_size(600.0, 600.0);
        let sampler = PoissonDiscSampler::new(20, bounds);
        let min_distance = sampler.min_distance();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pts = sampler.execute(&mut rng).unwrap();
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                assert!(dist(&pts[i], &pts[j]) >= min_distance);
            }
        }
    }

    #[test]
    fn min_distance_formula() {
        let sampler = PoissonDiscSampler::new(4, Rect::from_size(PI.sqrt(), PI.sqrt()));
        assert!((sampler.min_distance() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn same_seed_same_points() {
        let bounds = Rect::from_size(400.0, 300.0);
        let a = PoissonDiscSampler::new(10, bounds)
            .execute(&mut ChaCha8Rng::seed_from_u64(3))
            .unwrap();
        let b = PoissonDiscSampler::new(10, bounds)
            .execute(&mut ChaCha8Rng::seed_from_u64(3))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_bounds_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = PoissonDiscSampler::new(5, Rect::from_size(0.0, 10.0)).execute(&mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn candidate_budget_exhausts() {
        // Far denser than the spacing rule allows in a tiny budget.
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = PoissonDiscSampler::new(500, Rect::from_size(10.0, 10.0))
            .with_max_candidates(Some(50))
            .execute(&mut rng);
        assert!(matches!(
            result,
            Err(crate::TrackgenError::Operation(OperationError::Exhausted { .. }))
        ));
    }
}
