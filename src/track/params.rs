use crate::error::{GeometryError, OperationError, Result};
use crate::math::Rect;
use crate::operations::offset::OffsetMode;
use crate::operations::relax::RelaxParams;

/// Tuning for a track build. Everything here is externally adjustable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackParams {
    /// Relaxation coefficients and step count.
    pub relax: RelaxParams,
    /// Number of corner-cutting passes; each doubles the vertex count.
    pub smoothing_passes: usize,
    /// Per-vertex offset strategy for the boundaries.
    pub offset_mode: OffsetMode,
    /// Attempts before the builder reports exhaustion.
    pub max_attempts: usize,
    /// Candidate budget for point sampling per attempt. `None` is unbounded.
    pub max_sample_candidates: Option<usize>,
    /// Cap on 2-opt passes. `None` runs to convergence.
    pub max_two_opt_passes: Option<usize>,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            relax: RelaxParams::default(),
            smoothing_passes: 1,
            offset_mode: OffsetMode::Chord,
            max_attempts: 1000,
            max_sample_candidates: None,
            max_two_opt_passes: None,
        }
    }
}

/// Rejects inputs no amount of retrying can fix.
pub(crate) fn validate(
    point_count: usize,
    bounds: &Rect,
    road_half_width: f64,
    params: &TrackParams,
) -> Result<()> {
    if point_count < 3 {
        return Err(OperationError::InvalidInput(format!(
            "a track needs at least 3 points, got {point_count}"
        ))
        .into());
    }
    if !road_half_width.is_finite() || road_half_width <= 0.0 {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "road_half_width",
            value: road_half_width,
            min: f64::MIN_POSITIVE,
            max: f64::INFINITY,
        }
        .into());
    }
    if bounds.is_degenerate() {
        return Err(GeometryError::Degenerate(format!("bounds {bounds:?} have no area")).into());
    }
    if bounds.inset(road_half_width).is_degenerate() {
        return Err(GeometryError::Degenerate(format!(
            "road half-width {road_half_width} leaves no room inside {bounds:?}"
        ))
        .into());
    }
    if params.max_attempts == 0 {
        return Err(
            OperationError::InvalidInput("max_attempts must be at least 1".to_owned()).into(),
        );
    }
    Ok(())
}
