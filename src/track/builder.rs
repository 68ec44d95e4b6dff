use rand::Rng;
use tracing::{debug, warn};

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::{orient_positive, rescale};
use crate::math::Rect;
use crate::operations::offset::BoundaryOffset;
use crate::operations::query::IsSelfIntersecting;
use crate::operations::relax::SkeletonRelax;
use crate::operations::sampling::PoissonDiscSampler;
use crate::operations::smoothing::SmoothCorners;
use crate::operations::tour::ShortestCycle;

use super::params::{validate, TrackParams};
use super::{Track, TrackStages};

/// Generates a racetrack by sampling, ordering, relaxing, smoothing and
/// offsetting a skeleton, retrying with fresh randomness until both
/// boundaries are simple.
///
/// # Algorithm
///
/// 1. Sample well-separated points inside `bounds`
/// 2. Order them into a short closed tour and orient it positively
/// 3. Rescale the tour to fill `bounds`
/// 4. Relax it for a fixed number of steps, clamped inside `bounds` inset by
///    the road half-width
/// 5. Cut corners
/// 6. Offset by `+road_half_width` (inner) and `-road_half_width` (outer)
/// 7. Reject and start over if either boundary self-intersects
///
/// Unlucky or adversarial parameters (a road too wide for the point spacing)
/// can make every attempt fail; `max_attempts` bounds the loop.
#[derive(Debug, Clone)]
pub struct TrackBuilder {
    point_count: usize,
    bounds: Rect,
    road_half_width: f64,
    params: TrackParams,
}

impl TrackBuilder {
    /// Creates a builder with the default tuning.
    #[must_use]
    pub fn new(point_count: usize, bounds: Rect, road_half_width: f64) -> Self {
        Self {
            point_count,
            bounds,
            road_half_width,
            params: TrackParams::default(),
        }
    }

    /// Overrides the tuning.
    #[must_use]
    pub fn with_params(mut self, params: TrackParams) -> Self {
        self.params = params;
        self
    }

    /// Builds a track whose inner and outer boundaries are both simple.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than 3 points are requested
    ///   or `max_attempts` is zero
    /// - `GeometryError::ParameterOutOfRange` if the road half-width is not a
    ///   positive finite number
    /// - `GeometryError::Degenerate` if the bounds, or the bounds inset by the
    ///   road half-width, have no area
    /// - `OperationError::Exhausted` if every attempt produced an invalid track
    ///   or the sampling budget ran out
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Track> {
        validate(self.point_count, &self.bounds, self.road_half_width, &self.params)?;

        for attempt in 1..=self.params.max_attempts {
            let stages = self.attempt(rng)?;
            if stages.is_valid() {
                debug!(attempt, vertices = stages.inner.len(), "track accepted");
                return Ok(stages.into_track(attempt));
            }
            debug!(
                attempt,
                inner_crossing = ?IsSelfIntersecting::new(&stages.inner).first_crossing(),
                outer_crossing = ?IsSelfIntersecting::new(&stages.outer).first_crossing(),
                "track rejected, resampling"
            );
        }

        warn!(
            attempts = self.params.max_attempts,
            point_count = self.point_count,
            road_half_width = self.road_half_width,
            "no valid track found"
        );
        Err(OperationError::Exhausted {
            stage: "track generation",
            attempts: self.params.max_attempts,
        }
        .into())
    }

    /// Runs a single attempt without validating the result.
    ///
    /// All intermediate shapes are returned for inspection.
    ///
    /// # Errors
    ///
    /// Same input errors as [`TrackBuilder::execute`].
    pub fn build_attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrackStages> {
        validate(self.point_count, &self.bounds, self.road_half_width, &self.params)?;
        self.attempt(rng)
    }

    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrackStages> {
        let points = PoissonDiscSampler::new(self.point_count, self.bounds)
            .with_max_candidates(self.params.max_sample_candidates)
            .execute(rng)?;

        let mut original = ShortestCycle::new(points)
            .with_max_passes(self.params.max_two_opt_passes)
            .execute()?;
        orient_positive(&mut original);

        let rescaled = rescale(&original, &self.bounds);
        let relaxed = SkeletonRelax::new(rescaled, self.bounds, self.road_half_width)
            .with_params(self.params.relax)
            .execute()?;

        let smoothed = SmoothCorners::new(&relaxed)
            .with_passes(self.params.smoothing_passes)
            .execute();

        let inner = BoundaryOffset::new(&smoothed, self.road_half_width)
            .with_mode(self.params.offset_mode)
            .execute();
        let outer = BoundaryOffset::new(&smoothed, -self.road_half_width)
            .with_mode(self.params.offset_mode)
            .execute();

        Ok(TrackStages {
            original,
            relaxed,
            smoothed,
            inner,
            outer,
        })
    }
}
