//! Headless surface that records draw calls instead of rendering them.
//!
//! Used to preview what a set of annotations would draw without a 3D backend,
//! and to inspect draw calls in tests.

use crate::legend::LegendEntry;
use crate::surface::{PlottingSurface, SurfaceError};
use crate::texture::Texture;
use nalgebra::{Point3, Vector3};
use serde::Serialize;
use viz_common::{DrawOptions, TerrainMesh};

/// Kind of draw primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawKind {
    PointLabels,
    Arrows,
    Mesh,
    Legend,
}

/// One recorded draw call.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum DrawCall {
    PointLabels {
        points: Vec<[f64; 3]>,
        labels: Vec<String>,
        options: DrawOptions,
    },
    Arrows {
        centers: Vec<[f64; 3]>,
        directions: Vec<[f64; 3]>,
        magnitude: f64,
        options: DrawOptions,
    },
    Mesh {
        grid_shape: [usize; 2],
        texture_size: Option<[usize; 2]>,
        options: DrawOptions,
        #[serde(skip)]
        mesh: Box<TerrainMesh>,
        #[serde(skip)]
        texture: Option<Texture>,
    },
    Legend {
        labels: Option<Vec<LegendEntry>>,
        options: DrawOptions,
    },
}

impl DrawCall {
    pub fn kind(&self) -> DrawKind {
        match self {
            DrawCall::PointLabels { .. } => DrawKind::PointLabels,
            DrawCall::Arrows { .. } => DrawKind::Arrows,
            DrawCall::Mesh { .. } => DrawKind::Mesh,
            DrawCall::Legend { .. } => DrawKind::Legend,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{kind:?} draw call rejected: {message}")]
pub struct RecordingError {
    pub kind: DrawKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    fail_on: Option<(DrawKind, String)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every draw call of `kind` with `message`.
    pub fn failing_on(kind: DrawKind, message: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some((kind, message.into())),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn count(&self, kind: DrawKind) -> usize {
        self.calls.iter().filter(|c| c.kind() == kind).count()
    }

    fn record(&mut self, call: DrawCall) -> Result<(), SurfaceError> {
        if let Some((kind, message)) = &self.fail_on {
            if *kind == call.kind() {
                return Err(RecordingError {
                    kind: *kind,
                    message: message.clone(),
                }
                .into());
            }
        }
        self.calls.push(call);
        Ok(())
    }
}

fn to_array(p: &Point3<f64>) -> [f64; 3] {
    [p.x, p.y, p.z]
}

impl PlottingSurface for RecordingSurface {
    fn add_point_labels(
        &mut self,
        points: &[Point3<f64>],
        labels: &[String],
        options: &DrawOptions,
    ) -> Result<(), SurfaceError> {
        self.record(DrawCall::PointLabels {
            points: points.iter().map(to_array).collect(),
            labels: labels.to_vec(),
            options: options.clone(),
        })
    }

    fn add_arrows(
        &mut self,
        centers: &[Point3<f64>],
        directions: &[Vector3<f64>],
        magnitude: f64,
        options: &DrawOptions,
    ) -> Result<(), SurfaceError> {
        self.record(DrawCall::Arrows {
            centers: centers.iter().map(to_array).collect(),
            directions: directions.iter().map(|d| [d.x, d.y, d.z]).collect(),
            magnitude,
            options: options.clone(),
        })
    }

    fn add_mesh(
        &mut self,
        mesh: TerrainMesh,
        texture: Option<&Texture>,
        options: &DrawOptions,
    ) -> Result<(), SurfaceError> {
        self.record(DrawCall::Mesh {
            grid_shape: mesh.grid_shape(),
            texture_size: texture.map(|t| [t.height(), t.width()]),
            options: options.clone(),
            mesh: Box::new(mesh),
            texture: texture.cloned(),
        })
    }

    fn add_legend(
        &mut self,
        labels: Option<&[LegendEntry]>,
        options: &DrawOptions,
    ) -> Result<(), SurfaceError> {
        self.record(DrawCall::Legend {
            labels: labels.map(<[LegendEntry]>::to_vec),
            options: options.clone(),
        })
    }
}
