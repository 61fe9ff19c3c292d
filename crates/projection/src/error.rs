//! Projection errors.

use thiserror::Error;

/// Result type alias using ProjectionError.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Invalid projection descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Unsupported projection: {0}")]
    UnsupportedProjection(String),

    #[error("Missing projection parameter '{0}'")]
    MissingParameter(String),

    #[error("Invalid value for projection parameter '{param}': {value}")]
    InvalidParameter { param: String, value: String },

    #[error("Coordinate out of projection domain: lat={lat}, lon={lon}")]
    OutOfDomain { lat: f64, lon: f64 },
}
