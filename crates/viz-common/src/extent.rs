//! Axis ranges and 3D scene extents.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Minimum and maximum of a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range over the finite values of a slice. NaN and infinities are skipped.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self::new(v, v)),
                Some(r) => Some(Self::new(r.min.min(v), r.max.max(v))),
            })
    }

    /// Length of the axis in coordinate units.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Relative position along the axis: 0 is the minimum, 1 the maximum.
    /// Fractions outside [0, 1] extrapolate.
    pub fn at(&self, fraction: f64) -> f64 {
        self.min + fraction * (self.max - self.min)
    }
}

/// Extents of a scene along x, y and z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent3 {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

impl Extent3 {
    pub fn new(x: AxisRange, y: AxisRange, z: AxisRange) -> Self {
        Self { x, y, z }
    }

    /// Point at relative positions along each axis.
    pub fn point_at(&self, fractions: [f64; 3]) -> Point3<f64> {
        Point3::new(
            self.x.at(fractions[0]),
            self.y.at(fractions[1]),
            self.z.at(fractions[2]),
        )
    }
}
