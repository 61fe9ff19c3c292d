//! Error types for annotation rendering.

use crate::surface::SurfaceError;
use projection::ProjectionError;
use thiserror::Error;
use viz_common::{ColorError, DataError};

/// Result type alias using AnnotationError.
pub type AnnotationResult<T> = Result<T, AnnotationError>;

/// Primary error type for building and rendering annotations.
#[derive(Debug, Error)]
pub enum AnnotationError {
    // === Configuration Errors ===
    #[error("Invalid projection '{descriptor}': {source}")]
    Projection {
        descriptor: String,
        #[source]
        source: ProjectionError,
    },

    #[error("Invalid color: {0}")]
    Color(#[from] ColorError),

    #[error("Invalid dataset: {0}")]
    Data(#[from] DataError),

    #[error("Mask '{field}' has shape {mask:?} but the terrain mesh grid is {mesh:?}")]
    ShapeMismatch {
        field: String,
        mask: Vec<usize>,
        mesh: Vec<usize>,
    },

    #[error("Legend label list is empty")]
    EmptyLegend,

    #[error("Invalid texture: {0}")]
    Texture(String),

    // === Delegation Errors ===
    #[error(transparent)]
    Surface(SurfaceError),
}

impl AnnotationError {
    /// True for errors caused by invalid annotation or dataset configuration,
    /// false for failures raised by the plotting surface.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, AnnotationError::Surface(_))
    }
}
