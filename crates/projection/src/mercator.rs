//! Mercator projection, ellipsoidal and spherical (Web Mercator).

use crate::error::{ProjectionError, ProjectionResult};
use crate::geographic::{check_geographic, normalize_lon_rad, Ellipsoid};
use std::f64::consts::PI;

/// Latitudes closer to the poles than this are rejected (y diverges).
const MAX_LATITUDE_DEG: f64 = 89.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Mercator {
    /// Central meridian in radians
    pub lon0: f64,
    /// Scale factor at the equator (derived from lat_ts when given)
    pub k0: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    pub ellipsoid: Ellipsoid,
}

impl Mercator {
    pub fn new(
        lon0_deg: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
        ellipsoid: Ellipsoid,
    ) -> ProjectionResult<Self> {
        if k0 <= 0.0 {
            return Err(ProjectionError::InvalidParameter {
                param: "k_0".to_string(),
                value: k0.to_string(),
            });
        }
        Ok(Self {
            lon0: lon0_deg.to_radians(),
            k0,
            false_easting,
            false_northing,
            ellipsoid,
        })
    }

    /// Scale factor giving true scale along the parallel `lat_ts_deg`.
    pub fn scale_for_true_latitude(lat_ts_deg: f64, ellipsoid: &Ellipsoid) -> f64 {
        let phi = lat_ts_deg.to_radians();
        let sin_phi = phi.sin();
        phi.cos() / (1.0 - ellipsoid.e2() * sin_phi * sin_phi).sqrt()
    }

    /// Spherical Web Mercator (EPSG:3857).
    pub fn web() -> Self {
        Self {
            lon0: 0.0,
            k0: 1.0,
            false_easting: 0.0,
            false_northing: 0.0,
            ellipsoid: Ellipsoid::sphere(Ellipsoid::WGS84.a),
        }
    }

    /// Convert geographic coordinates (degrees) to projected (x, y) meters.
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> ProjectionResult<(f64, f64)> {
        check_geographic(lat_deg, lon_deg)?;
        if lat_deg.abs() > MAX_LATITUDE_DEG {
            return Err(ProjectionError::OutOfDomain {
                lat: lat_deg,
                lon: lon_deg,
            });
        }

        let a = self.ellipsoid.a;
        let e = self.ellipsoid.e();
        let phi = lat_deg.to_radians();
        let dlon = normalize_lon_rad(lon_deg.to_radians() - self.lon0);

        let x = self.k0 * a * dlon;

        let e_sin = e * phi.sin();
        let y = self.k0
            * a
            * ((PI / 4.0 + phi / 2.0).tan() * ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)).ln();

        Ok((x + self.false_easting, y + self.false_northing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_mercator_known_point() {
        // 180 degrees east is half the equator
        let (x, y) = Mercator::web().forward(0.0, 180.0).unwrap();
        assert!((x - 20037508.342789244).abs() < 1e-6, "x = {}", x);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_web_mercator_latitude() {
        // Standard reference value for 45N
        let (_, y) = Mercator::web().forward(45.0, 0.0).unwrap();
        assert!((y - 5621521.486).abs() < 0.01, "y = {}", y);
    }

    #[test]
    fn test_ellipsoidal_is_south_of_spherical() {
        let ellipsoidal = Mercator::new(0.0, 1.0, 0.0, 0.0, Ellipsoid::WGS84).unwrap();
        let (_, ye) = ellipsoidal.forward(60.0, 0.0).unwrap();
        let (_, ys) = Mercator::web().forward(60.0, 0.0).unwrap();
        assert!(ye < ys);
    }

    #[test]
    fn test_pole_rejected() {
        assert!(Mercator::web().forward(90.0, 0.0).is_err());
    }

    #[test]
    fn test_true_scale_latitude() {
        let k = Mercator::scale_for_true_latitude(0.0, &Ellipsoid::WGS84);
        assert!((k - 1.0).abs() < 1e-12);
    }
}
