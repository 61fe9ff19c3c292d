//! Common types shared by the glacier annotation crates.

pub mod color;
pub mod context;
pub mod dataset;
pub mod error;
pub mod extent;
pub mod mesh;
pub mod options;

pub use color::{Color, ColorError, Rgba};
pub use context::{FieldNames, VisualizationContext};
pub use dataset::{Dataset, Field};
pub use error::{DataError, DataResult};
pub use extent::{AxisRange, Extent3};
pub use mesh::TerrainMesh;
pub use options::{DrawOptions, OptionValue};
