//! Lambert Conformal Conic projection.
//!
//! Maps a cone tangent or secant to the Earth's surface onto a flat plane.
//! Common for national grids (e.g. Lambert-93 in France) and regional glacier
//! inventories.
//!
//! The projection parameters include:
//! - Latitude of origin (lat0) and central meridian (lon0)
//! - Standard parallel(s): lat1 and lat2 (can be equal for tangent cone)
//! - False easting/northing in meters

use crate::error::{ProjectionError, ProjectionResult};
use crate::geographic::{check_geographic, normalize_lon_rad, Ellipsoid};
use std::f64::consts::PI;

/// Lambert Conformal Conic projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LambertConformal {
    /// Central meridian in radians
    pub lon0: f64,
    /// Latitude of origin in radians
    pub lat0: f64,
    /// First standard parallel in radians
    pub latin1: f64,
    /// Second standard parallel in radians
    pub latin2: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    pub ellipsoid: Ellipsoid,
    /// Cone constant (n)
    n: f64,
    /// F constant
    f: f64,
    /// Rho at the latitude of origin
    rho0: f64,
}

impl LambertConformal {
    /// Create a new Lambert Conformal projection from parameters in degrees.
    ///
    /// # Arguments
    /// * `lat0_deg` - Latitude of origin
    /// * `lon0_deg` - Central meridian
    /// * `latin1_deg` - First standard parallel
    /// * `latin2_deg` - Second standard parallel
    /// * `false_easting`, `false_northing` - Offsets in meters
    pub fn new(
        lat0_deg: f64,
        lon0_deg: f64,
        latin1_deg: f64,
        latin2_deg: f64,
        false_easting: f64,
        false_northing: f64,
        ellipsoid: Ellipsoid,
    ) -> ProjectionResult<Self> {
        let lat0 = lat0_deg.to_radians();
        let lon0 = lon0_deg.to_radians();
        let latin1 = latin1_deg.to_radians();
        let latin2 = latin2_deg.to_radians();

        if (latin1 + latin2).abs() < 1e-10 {
            return Err(ProjectionError::InvalidParameter {
                param: "lat_1".to_string(),
                value: format!("{} (standard parallels symmetric about the equator)", latin1_deg),
            });
        }

        let e = ellipsoid.e();
        let m1 = m_factor(latin1, e);
        let t1 = t_factor(latin1, e);

        // Compute cone constant n
        let n = if (latin1 - latin2).abs() < 1e-10 {
            // Tangent cone (single standard parallel)
            latin1.sin()
        } else {
            // Secant cone (two standard parallels)
            let m2 = m_factor(latin2, e);
            let t2 = t_factor(latin2, e);
            (m1.ln() - m2.ln()) / (t1.ln() - t2.ln())
        };

        // Compute F constant
        let f = m1 / (n * t1.powf(n));

        // Compute rho at the latitude of origin
        let rho0 = ellipsoid.a * f * t_factor(lat0, e).powf(n);

        Ok(Self {
            lon0,
            lat0,
            latin1,
            latin2,
            false_easting,
            false_northing,
            ellipsoid,
            n,
            f,
            rho0,
        })
    }

    /// Cone constant.
    pub fn cone_constant(&self) -> f64 {
        self.n
    }

    /// Convert geographic coordinates (degrees) to projected (x, y) meters.
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> ProjectionResult<(f64, f64)> {
        check_geographic(lat_deg, lon_deg)?;

        let lat = lat_deg.to_radians();

        // The pole opposite the cone apex maps to infinity
        if (lat + self.n.signum() * PI / 2.0).abs() < 1e-10 {
            return Err(ProjectionError::OutOfDomain {
                lat: lat_deg,
                lon: lon_deg,
            });
        }

        let dlon = normalize_lon_rad(lon_deg.to_radians() - self.lon0);

        // Compute rho for this latitude
        let rho = self.ellipsoid.a * self.f * t_factor(lat, self.ellipsoid.e()).powf(self.n);

        // Compute theta (angle from central meridian)
        let theta = self.n * dlon;

        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();

        Ok((x + self.false_easting, y + self.false_northing))
    }
}

fn m_factor(phi: f64, e: f64) -> f64 {
    let e_sin = e * phi.sin();
    phi.cos() / (1.0 - e_sin * e_sin).sqrt()
}

fn t_factor(phi: f64, e: f64) -> f64 {
    let e_sin = e * phi.sin();
    (PI / 4.0 - phi / 2.0).tan() / ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lambert93() -> LambertConformal {
        LambertConformal::new(46.5, 3.0, 49.0, 44.0, 700000.0, 6600000.0, Ellipsoid::GRS80)
            .unwrap()
    }

    #[test]
    fn test_origin_maps_to_false_origin() {
        let (x, y) = lambert93().forward(46.5, 3.0).unwrap();
        assert!((x - 700000.0).abs() < 1e-6, "x = {}", x);
        assert!((y - 6600000.0).abs() < 1e-6, "y = {}", y);
    }

    #[test]
    fn test_lambert93_paris() {
        let (x, y) = lambert93().forward(48.8566, 2.3522).unwrap();
        assert!((x - 652469.02).abs() < 0.1, "x = {}", x);
        assert!((y - 6862035.26).abs() < 0.1, "y = {}", y);
    }

    #[test]
    fn test_tangent_cone() {
        let proj =
            LambertConformal::new(38.5, -97.5, 38.5, 38.5, 0.0, 0.0, Ellipsoid::WGS84).unwrap();
        assert!((proj.cone_constant() - 38.5_f64.to_radians().sin()).abs() < 1e-12);
        let (x, y) = proj.forward(38.5, -97.5).unwrap();
        assert!(x.abs() < 1e-6 && y.abs() < 1e-6);
    }

    #[test]
    fn test_south_pole_rejected_for_northern_cone() {
        assert!(matches!(
            lambert93().forward(-90.0, 3.0),
            Err(ProjectionError::OutOfDomain { .. })
        ));
    }
}
