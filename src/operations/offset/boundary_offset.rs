use crate::math::vector_2d::{left_normal, norm};
use crate::math::Point2;

use super::curvature::estimate_curvature;

/// How the offset distance is chosen per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetMode {
    /// Every vertex moves by the full distance.
    #[default]
    Chord,
    /// Toward the centre of curvature, a vertex moves at most the local
    /// radius of curvature, so tight bends do not fold over.
    CurvatureClamped,
}

/// Offsets a closed polygon vertex by vertex.
///
/// Each vertex moves along the left normal of the chord joining its previous
/// and next neighbours. This is a miter-less offset: edges of the result are
/// not exactly parallel to the input, which is acceptable on smoothed input.
///
/// # Sign Convention
///
/// - Positive distance: left of the walking direction (inward for a
///   positively oriented polygon)
/// - Negative distance: right of the walking direction (outward)
#[derive(Debug)]
pub struct BoundaryOffset<'a> {
    points: &'a [Point2],
    distance: f64,
    mode: OffsetMode,
}

impl<'a> BoundaryOffset<'a> {
    /// Creates a fixed-distance offset of `points`.
    #[must_use]
    pub fn new(points: &'a [Point2], distance: f64) -> Self {
        Self {
            points,
            distance,
            mode: OffsetMode::Chord,
        }
    }

    /// Selects how the per-vertex distance is chosen.
    #[must_use]
    pub fn with_mode(mut self, mode: OffsetMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the offset polygon; it has as many vertices as the input.
    ///
    /// A vertex whose neighbours coincide has no defined normal and stays put.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let n = self.points.len();
        let curvatures = match self.mode {
            OffsetMode::Chord => None,
            OffsetMode::CurvatureClamped => Some(estimate_curvature(self.points)),
        };

        (0..n)
            .map(|i| {
                let prev = self.points[(i + n - 1) % n];
                let curr = self.points[i];
                let next = self.points[(i + 1) % n];

                let normal = left_normal(&norm(&(next - prev)));
                let distance = curvatures
                    .as_ref()
                    .map_or(self.distance, |k| clamp_to_radius(self.distance, k[i]));
                curr + normal * distance
            })
            .collect()
    }
}

/// Limits `distance` to the radius of curvature when both point the same way.
fn clamp_to_radius(distance: f64, curvature: f64) -> f64 {
    if curvature == 0.0 {
        return distance;
    }
    let radius = 1.0 / curvature;
    if (radius > 0.0 && distance > 0.0 && radius < distance)
        || (radius < 0.0 && distance < 0.0 && radius > distance)
    {
        radius
    } else {
        distance
    }
}
