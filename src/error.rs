use thiserror::Error;

/// Top-level error type for the track generator.
#[derive(Debug, Error)]
pub enum TrackgenError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to pipeline operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{stage} gave up after {attempts} attempts")]
    Exhausted { stage: &'static str, attempts: usize },
}

/// Convenience type alias for results using [`TrackgenError`].
pub type Result<T> = std::result::Result<T, TrackgenError>;
