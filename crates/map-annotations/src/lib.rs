//! Annotations for 3D glacier map scenes.
//!
//! Each annotation computes its geometry from a shared
//! [`VisualizationContext`](viz_common::VisualizationContext) and draws itself
//! through a [`PlottingSurface`]:
//! - Point labels at reprojected geographic coordinates
//! - Directional arrows (e.g. a north arrow) placed relative to the scene extents
//! - Outline overlays textured onto the terrain mesh
//! - Legends

pub mod annotation;
pub mod arrow;
pub mod config;
pub mod error;
pub mod legend;
pub mod outline;
pub mod png;
pub mod point;
pub mod recording;
pub mod scene;
pub mod surface;
pub mod texture;

pub use annotation::Annotation;
pub use arrow::{ArrowAnnotation, ArrowConfig};
pub use config::{AnnotationConfig, AnnotationFile, ConfigFileError};
pub use error::{AnnotationError, AnnotationResult};
pub use legend::{LegendAnnotation, LegendConfig, LegendEntry, LegendLabel};
pub use outline::{OutlineAnnotation, OutlineConfig};
pub use point::{PointAnnotation, PointConfig};
pub use recording::{DrawCall, RecordingSurface};
pub use scene::AnnotationSet;
pub use surface::{PlottingSurface, SurfaceError};
pub use texture::Texture;
