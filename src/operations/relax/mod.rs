mod forces;

use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Rect};

/// Coefficients for the spring relaxation of a track skeleton.
///
/// The defaults are empirical; nothing requires exactly these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxParams {
    /// Number of relaxation steps.
    pub iterations: usize,
    /// Pull of each vertex toward the midpoint of its two neighbours.
    pub bending: f64,
    /// Pull of each edge toward `target_edge_length`.
    pub length: f64,
    /// Push between non-adjacent vertices closer than the repulsion range.
    pub repulsion: f64,
    /// Preferred edge length.
    pub target_edge_length: f64,
    /// Repulsion range as a multiple of the road half-width.
    pub repulsion_range: f64,
}

impl Default for RelaxParams {
    fn default() -> Self {
        Self {
            iterations: 20,
            bending: 0.1,
            length: 0.05,
            repulsion: 0.005,
            target_edge_length: 50.0,
            repulsion_range: 3.0,
        }
    }
}

/// Nudges a closed skeleton toward even spacing and gentle turns.
///
/// Each step computes all forces from the positions at the start of the
/// step, applies them at once, then clamps every vertex into `bounds` inset
/// by the road half-width. The step count is fixed; there is no convergence
/// test.
#[derive(Debug)]
pub struct SkeletonRelax {
    points: Vec<Point2>,
    bounds: Rect,
    road_half_width: f64,
    params: RelaxParams,
}

impl SkeletonRelax {
    /// Creates a relaxation of `points` with the default coefficients.
    #[must_use]
    pub fn new(points: Vec<Point2>, bounds: Rect, road_half_width: f64) -> Self {
        Self {
            points,
            bounds,
            road_half_width,
            params: RelaxParams::default(),
        }
    }

    /// Overrides the relaxation coefficients.
    #[must_use]
    pub fn with_params(mut self, params: RelaxParams) -> Self {
        self.params = params;
        self
    }

    /// Runs all relaxation steps and returns the relaxed skeleton.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `bounds` inset by the road
    /// half-width leaves no room for the skeleton.
    pub fn execute(mut self) -> Result<Vec<Point2>> {
        let inner = self.bounds.inset(self.road_half_width);
        if inner.is_degenerate() {
            return Err(GeometryError::Degenerate(format!(
                "road half-width {} leaves no room inside {:?}",
                self.road_half_width, self.bounds
            ))
            .into());
        }

        for _ in 0..self.params.iterations {
            self.step(&inner);
        }
        trace!(
            iterations = self.params.iterations,
            vertices = self.points.len(),
            "skeleton relaxed"
        );
        Ok(self.points)
    }

    fn step(&mut self, inner: &Rect) {
        let forces = forces::accumulate(&self.points, self.road_half_width, &self.params);
        for (p, f) in self.points.iter_mut().zip(forces) {
            *p += f;
            p.x = p.x.clamp(inner.left, inner.right);
            p.y = p.y.clamp(inner.top, inner.bottom);
        }
    }
}
