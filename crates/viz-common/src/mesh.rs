//! Structured terrain mesh derived from a dataset.

use crate::dataset::Field;
use crate::error::{DataError, DataResult};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Structured `ny x nx` surface grid.
///
/// Points are stored row-major in the same order as the dataset fields they
/// were built from, so a `[ny, nx]` field maps one-to-one onto the points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainMesh {
    nx: usize,
    ny: usize,
    points: Vec<Point3<f64>>,
    /// Per-point (u, v) texture coordinates in [0, 1]
    texture_coords: Option<Vec<[f64; 2]>>,
}

impl TerrainMesh {
    /// Build a surface from 1D x (len nx) and y (len ny) axes and a `[ny, nx]`
    /// elevation field, warping the plane by the elevation.
    pub fn from_surface(x: &Field, y: &Field, elevation: &Field) -> DataResult<Self> {
        let nx = x.len();
        let ny = y.len();
        let expected = vec![ny, nx];
        if elevation.shape() != expected.as_slice() {
            return Err(DataError::ShapeMismatch {
                field: "elevation".to_string(),
                expected,
                actual: elevation.shape().to_vec(),
            });
        }

        let mut points = Vec::with_capacity(nx * ny);
        for (row, &yv) in y.values().iter().enumerate() {
            for (col, &xv) in x.values().iter().enumerate() {
                points.push(Point3::new(xv, yv, elevation.values()[row * nx + col]));
            }
        }

        Ok(Self {
            nx,
            ny,
            points,
            texture_coords: None,
        })
    }

    /// Grid shape as `[ny, nx]`, matching dataset field layout.
    pub fn grid_shape(&self) -> [usize; 2] {
        [self.ny, self.nx]
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    pub fn texture_coords(&self) -> Option<&[[f64; 2]]> {
        self.texture_coords.as_deref()
    }

    /// Project every point onto the xy-plane bounds to get texture coordinates.
    ///
    /// u runs with x and v with y, both normalized to [0, 1]. A degenerate
    /// axis maps to 0.
    pub fn texture_map_to_plane(&mut self) {
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let normalize = |v: f64, min: f64, max: f64| {
            let span = max - min;
            if span.abs() < f64::EPSILON {
                0.0
            } else {
                (v - min) / span
            }
        };

        self.texture_coords = Some(
            self.points
                .iter()
                .map(|p| [normalize(p.x, min_x, max_x), normalize(p.y, min_y, max_y)])
                .collect(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_mesh() -> TerrainMesh {
        let x = Field::from_vec(vec![0.0, 5.0, 10.0]);
        let y = Field::from_vec(vec![0.0, 20.0]);
        let z = Field::grid(2, 3, vec![100.0, 110.0, 120.0, 130.0, 140.0, 200.0]).unwrap();
        TerrainMesh::from_surface(&x, &y, &z).unwrap()
    }

    #[test]
    fn test_from_surface_layout() {
        let mesh = small_mesh();
        assert_eq!(mesh.grid_shape(), [2, 3]);
        assert_eq!(mesh.points()[4], Point3::new(5.0, 20.0, 140.0));
    }

    #[test]
    fn test_elevation_shape_mismatch() {
        let x = Field::from_vec(vec![0.0, 1.0]);
        let y = Field::from_vec(vec![0.0, 1.0]);
        let z = Field::grid(1, 4, vec![0.0; 4]).unwrap();
        assert!(matches!(
            TerrainMesh::from_surface(&x, &y, &z),
            Err(DataError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_texture_map_to_plane() {
        let mut mesh = small_mesh();
        assert!(mesh.texture_coords().is_none());
        mesh.texture_map_to_plane();
        let tcoords = mesh.texture_coords().unwrap();
        assert_eq!(tcoords[0], [0.0, 0.0]);
        assert_eq!(tcoords[5], [1.0, 1.0]);
        assert_eq!(tcoords[1], [0.5, 0.0]);
    }
}
