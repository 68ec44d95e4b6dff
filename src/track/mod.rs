mod builder;
mod params;

pub use builder::TrackBuilder;
pub use params::TrackParams;

use rand::Rng;

use crate::error::Result;
use crate::math::{Point2, Rect};
use crate::operations::query::IsSelfIntersecting;

/// A finished track: two simple boundary polygons around a centerline.
///
/// All three polygons have the same vertex count; vertex `i` of `inner` and
/// `outer` are the offsets of vertex `i` of `centerline`.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Boundary on the inside of the loop.
    pub inner: Vec<Point2>,
    /// Boundary on the outside of the loop.
    pub outer: Vec<Point2>,
    /// Smoothed skeleton both boundaries were offset from.
    pub centerline: Vec<Point2>,
    /// Number of attempts it took to find this track (1-based).
    pub attempts: usize,
}

impl Track {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.centerline.len()
    }

    /// Start/finish line across the road at the first vertex, from the inner
    /// boundary to the outer one.
    #[must_use]
    pub fn finish_line(&self) -> Option<(Point2, Point2)> {
        Some((*self.inner.first()?, *self.outer.first()?))
    }
}

/// Every intermediate shape from one generation attempt.
///
/// Each stage owns its own buffer, so earlier shapes remain available after
/// later stages run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackStages {
    /// Sampled points ordered into a positively oriented cycle.
    pub original: Vec<Point2>,
    /// Cycle after rescaling and relaxation.
    pub relaxed: Vec<Point2>,
    /// Relaxed cycle after corner cutting.
    pub smoothed: Vec<Point2>,
    /// Smoothed cycle offset inward.
    pub inner: Vec<Point2>,
    /// Smoothed cycle offset outward.
    pub outer: Vec<Point2>,
}

impl TrackStages {
    /// True if neither boundary self-intersects.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !IsSelfIntersecting::new(&self.inner).execute()
            && !IsSelfIntersecting::new(&self.outer).execute()
    }

    fn into_track(self, attempts: usize) -> Track {
        Track {
            inner: self.inner,
            outer: self.outer,
            centerline: self.smoothed,
            attempts,
        }
    }
}

/// Builds a track with the default tuning.
///
/// # Errors
///
/// See [`TrackBuilder::execute`].
pub fn build_track<R: Rng + ?Sized>(
    point_count: usize,
    bounds: Rect,
    road_half_width: f64,
    rng: &mut R,
) -> Result<Track> {
    TrackBuilder::new(point_count, bounds, road_half_width).execute(rng)
}
