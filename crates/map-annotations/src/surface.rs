//! The plotting surface annotations draw onto.
//!
//! A surface is the scene backend (a 3D plotter, a headless recorder, ...).
//! Options are forwarded unmodified; their meaning is up to the backend.
//! Draw calls are not assumed to be thread-safe, so every primitive takes
//! `&mut self`.

use crate::legend::LegendEntry;
use crate::texture::Texture;
use nalgebra::{Point3, Vector3};
use viz_common::{DrawOptions, TerrainMesh};

/// Error raised by a plotting backend. Propagated to callers unchanged.
pub type SurfaceError = Box<dyn std::error::Error + Send + Sync>;

pub trait PlottingSurface {
    /// Place one text label at each point.
    fn add_point_labels(
        &mut self,
        points: &[Point3<f64>],
        labels: &[String],
        options: &DrawOptions,
    ) -> Result<(), SurfaceError>;

    /// Draw one arrow glyph per center, pointing along the matching direction,
    /// scaled to `magnitude`.
    fn add_arrows(
        &mut self,
        centers: &[Point3<f64>],
        directions: &[Vector3<f64>],
        magnitude: f64,
        options: &DrawOptions,
    ) -> Result<(), SurfaceError>;

    /// Draw a mesh, optionally textured. The surface takes ownership.
    fn add_mesh(
        &mut self,
        mesh: TerrainMesh,
        texture: Option<&Texture>,
        options: &DrawOptions,
    ) -> Result<(), SurfaceError>;

    /// Draw a legend box. `None` means "use the labels already registered
    /// with the surface".
    fn add_legend(
        &mut self,
        labels: Option<&[LegendEntry]>,
        options: &DrawOptions,
    ) -> Result<(), SurfaceError>;
}
