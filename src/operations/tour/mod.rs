mod nearest_neighbor;
mod two_opt;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::tour_length;
use crate::math::Point2;

/// Orders an unordered point set into a short closed tour.
///
/// Nearest-neighbour construction followed by 2-opt improvement. The result
/// is a local optimum, not the shortest cycle.
#[derive(Debug)]
pub struct ShortestCycle {
    points: Vec<Point2>,
    max_passes: Option<usize>,
}

impl ShortestCycle {
    /// Creates a new cycle-ordering operation.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            max_passes: None,
        }
    }

    /// Caps the number of 2-opt passes. `None` runs to convergence.
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: Option<usize>) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Executes the ordering, returning the points as a closed tour.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if no points are provided.
    pub fn execute(self) -> Result<Vec<Point2>> {
        if self.points.is_empty() {
            return Err(
                OperationError::InvalidInput("cannot order an empty point set".to_owned()).into(),
            );
        }

        let mut tour = nearest_neighbor::build(&self.points);
        let greedy_length = tour_length(&tour);
        let passes = two_opt::improve(&mut tour, self.max_passes);

        debug!(
            points = tour.len(),
            greedy_length,
            final_length = tour_length(&tour),
            passes,
            "cycle ordered"
        );
        Ok(tour)
    }
}
