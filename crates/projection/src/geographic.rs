//! Reference ellipsoids and the geographic (lon/lat) pseudo-projection.

use crate::error::{ProjectionError, ProjectionResult};
use std::f64::consts::PI;

/// Reference ellipsoid given by its semi-major axis and flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    pub a: f64,
    /// Flattening (0 for a sphere)
    pub f: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6378137.0,
        f: 1.0 / 298.257223563,
    };

    pub const GRS80: Ellipsoid = Ellipsoid {
        a: 6378137.0,
        f: 1.0 / 298.257222101,
    };

    pub const INTERNATIONAL: Ellipsoid = Ellipsoid {
        a: 6378388.0,
        f: 1.0 / 297.0,
    };

    pub const BESSEL: Ellipsoid = Ellipsoid {
        a: 6377397.155,
        f: 1.0 / 299.1528128,
    };

    pub fn sphere(radius: f64) -> Self {
        Self { a: radius, f: 0.0 }
    }

    pub fn from_axes(a: f64, b: f64) -> Self {
        Self { a, f: (a - b) / a }
    }

    /// Clarke 1866, defined by its axes.
    pub fn clarke_1866() -> Self {
        Self::from_axes(6378206.4, 6356583.8)
    }

    /// Look up an ellipsoid by its proj `+ellps` name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "wgs84" => Some(Self::WGS84),
            "grs80" => Some(Self::GRS80),
            "intl" => Some(Self::INTERNATIONAL),
            "bessel" => Some(Self::BESSEL),
            "clrk66" => Some(Self::clarke_1866()),
            "sphere" => Some(Self::sphere(6370997.0)),
            _ => None,
        }
    }

    /// Ellipsoid implied by a proj `+datum` name.
    pub fn for_datum(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "wgs84" => Some(Self::WGS84),
            "nad83" => Some(Self::GRS80),
            "nad27" => Some(Self::clarke_1866()),
            _ => None,
        }
    }

    /// First eccentricity squared.
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// First eccentricity.
    pub fn e(&self) -> f64 {
        self.e2().sqrt()
    }

    pub fn is_sphere(&self) -> bool {
        self.f == 0.0
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

/// Normalize a longitude difference in radians to [-π, π].
pub fn normalize_lon_rad(mut dlon: f64) -> f64 {
    while dlon > PI {
        dlon -= 2.0 * PI;
    }
    while dlon < -PI {
        dlon += 2.0 * PI;
    }
    dlon
}

/// Reject non-finite coordinates and latitudes beyond the poles.
pub fn check_geographic(lat_deg: f64, lon_deg: f64) -> ProjectionResult<()> {
    if !lat_deg.is_finite() || !lon_deg.is_finite() || lat_deg.abs() > 90.0 {
        return Err(ProjectionError::OutOfDomain {
            lat: lat_deg,
            lon: lon_deg,
        });
    }
    Ok(())
}

/// Geographic coordinates passed through unchanged (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geographic;

impl Geographic {
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> ProjectionResult<(f64, f64)> {
        check_geographic(lat_deg, lon_deg)?;
        Ok((lon_deg, lat_deg))
    }
}
