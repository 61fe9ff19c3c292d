//! Shared read-only state handed to every annotation at render time.

use crate::dataset::{Dataset, Field};
use crate::error::DataResult;
use crate::extent::Extent3;
use crate::mesh::TerrainMesh;
use serde::{Deserialize, Serialize};

/// Names of the coordinate and elevation fields inside a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNames {
    #[serde(default = "default_x")]
    pub x: String,
    #[serde(default = "default_y")]
    pub y: String,
    #[serde(default = "default_topo_bedrock")]
    pub topo_bedrock: String,
}

fn default_x() -> String {
    "x".to_string()
}
fn default_y() -> String {
    "y".to_string()
}
fn default_topo_bedrock() -> String {
    "topo_bedrock".to_string()
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            x: default_x(),
            y: default_y(),
            topo_bedrock: default_topo_bedrock(),
        }
    }
}

/// A dataset together with its precomputed bedrock terrain mesh.
#[derive(Debug, Clone)]
pub struct VisualizationContext {
    dataset: Dataset,
    names: FieldNames,
    topo_mesh: TerrainMesh,
}

impl VisualizationContext {
    /// Build a context using the default field names.
    pub fn new(dataset: Dataset) -> DataResult<Self> {
        Self::with_names(dataset, FieldNames::default())
    }

    /// Build a context, deriving the terrain mesh from x, y and bedrock.
    pub fn with_names(dataset: Dataset, names: FieldNames) -> DataResult<Self> {
        let topo_mesh = TerrainMesh::from_surface(
            dataset.field(&names.x)?,
            dataset.field(&names.y)?,
            dataset.field(&names.topo_bedrock)?,
        )?;
        Ok(Self {
            dataset,
            names,
            topo_mesh,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn names(&self) -> &FieldNames {
        &self.names
    }

    /// Projection descriptor of the dataset coordinates.
    pub fn srs(&self) -> &str {
        self.dataset.srs()
    }

    pub fn terrain_mesh(&self) -> &TerrainMesh {
        &self.topo_mesh
    }

    pub fn x(&self) -> DataResult<&Field> {
        self.dataset.field(&self.names.x)
    }

    pub fn y(&self) -> DataResult<&Field> {
        self.dataset.field(&self.names.y)
    }

    pub fn topo_bedrock(&self) -> DataResult<&Field> {
        self.dataset.field(&self.names.topo_bedrock)
    }

    /// Scene extents: x and y from the coordinate axes, z from bedrock.
    pub fn extent(&self) -> DataResult<Extent3> {
        Ok(Extent3::new(
            self.dataset.range(&self.names.x)?,
            self.dataset.range(&self.names.y)?,
            self.dataset.range(&self.names.topo_bedrock)?,
        ))
    }
}
