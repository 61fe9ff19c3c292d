//! Transverse Mercator projection (and UTM).
//!
//! Glacier datasets are usually stored in a local transverse Mercator grid
//! centred on the glacier, so this is the projection most point annotations
//! go through. Uses the ellipsoidal series expansion (Snyder, "Map
//! Projections: A Working Manual", eq. 8-9 and 8-10), accurate to well below
//! a metre within a few degrees of the central meridian.

use crate::error::{ProjectionError, ProjectionResult};
use crate::geographic::{check_geographic, normalize_lon_rad, Ellipsoid};
use std::f64::consts::PI;

/// Transverse Mercator projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransverseMercator {
    /// Central meridian in radians
    pub lon0: f64,
    /// Latitude of origin in radians
    pub lat0: f64,
    /// Scale factor on the central meridian
    pub k0: f64,
    /// False easting (meters)
    pub false_easting: f64,
    /// False northing (meters)
    pub false_northing: f64,
    pub ellipsoid: Ellipsoid,
    /// Second eccentricity squared
    ep2: f64,
    /// Meridional distance at lat0
    m0: f64,
}

impl TransverseMercator {
    /// Create a projection from parameters in degrees.
    pub fn new(
        lat0_deg: f64,
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

        let to_rad = PI / 180.0;
        let lat0 = lat0_deg * to_rad;
        let e2 = ellipsoid.e2();
        let ep2 = e2 / (1.0 - e2);
        let m0 = meridional_distance(lat0, &ellipsoid);

        Ok(Self {
            lon0: lon0_deg * to_rad,
            lat0,
            k0,
            false_easting,
            false_northing,
            ellipsoid,
            ep2,
            m0,
        })
    }

    /// Universal Transverse Mercator zone (1-60).
    pub fn utm(zone: u32, south: bool, ellipsoid: Ellipsoid) -> ProjectionResult<Self> {
        if !(1..=60).contains(&zone) {
            return Err(ProjectionError::InvalidParameter {
                param: "zone".to_string(),
                value: zone.to_string(),
            });
        }
        let lon0 = -183.0 + 6.0 * zone as f64;
        let false_northing = if south { 10_000_000.0 } else { 0.0 };
        Self::new(0.0, lon0, 0.9996, 500_000.0, false_northing, ellipsoid)
    }

    /// Convert geographic coordinates (degrees) to projected (x, y) meters.
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> ProjectionResult<(f64, f64)> {
        check_geographic(lat_deg, lon_deg)?;

        let phi = lat_deg.to_radians();
        let dlon = normalize_lon_rad(lon_deg.to_radians() - self.lon0);

        // The series diverges far from the central meridian
        if dlon.abs() >= PI / 2.0 {
            return Err(ProjectionError::OutOfDomain {
                lat: lat_deg,
                lon: lon_deg,
            });
        }

        let a = self.ellipsoid.a;
        let e2 = self.ellipsoid.e2();
        let ep2 = self.ep2;

        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = phi.tan();

        let n = a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let aa = dlon * cos_phi;
        let m = meridional_distance(phi, &self.ellipsoid);

        let aa2 = aa * aa;
        let aa3 = aa2 * aa;
        let aa4 = aa3 * aa;
        let aa5 = aa4 * aa;
        let aa6 = aa5 * aa;

        let x = self.k0
            * n
            * (aa
                + (1.0 - t + c) * aa3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * aa5 / 120.0);

        let y = self.k0
            * (m - self.m0
                + n * tan_phi
                    * (aa2 / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * aa4 / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * aa6 / 720.0));

        Ok((x + self.false_easting, y + self.false_northing))
    }
}

/// Distance along the meridian from the equator to latitude `phi` (radians).
fn meridional_distance(phi: f64, ellipsoid: &Ellipsoid) -> f64 {
    let e2 = ellipsoid.e2();
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    ellipsoid.a
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}
