//! Projection selection from a descriptor string.

use crate::error::{ProjectionError, ProjectionResult};
use crate::geographic::{Ellipsoid, Geographic};
use crate::lambert::LambertConformal;
use crate::mercator::Mercator;
use crate::proj_string::ProjParams;
use crate::transverse_mercator::TransverseMercator;
use std::str::FromStr;

/// Any supported forward projection.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Geographic(Geographic),
    TransverseMercator(TransverseMercator),
    Mercator(Mercator),
    LambertConformal(LambertConformal),
}

impl Projection {
    /// Parse a projection descriptor.
    ///
    /// Accepts proj-strings (`+proj=tmerc ...`) and EPSG codes:
    /// - "EPSG:4326" (geographic)
    /// - "EPSG:3857" / "EPSG:900913" (Web Mercator)
    /// - "EPSG:326zz" / "EPSG:327zz" (WGS84 UTM north/south)
    pub fn from_descriptor(descriptor: &str) -> ProjectionResult<Self> {
        let trimmed = descriptor.trim();
        if trimmed.is_empty() {
            return Err(ProjectionError::InvalidDescriptor(descriptor.to_string()));
        }

        let upper = trimmed.to_uppercase();
        if let Some(code) = upper.strip_prefix("EPSG:") {
            return Self::from_epsg(code, descriptor);
        }

        Self::from_params(&ProjParams::parse(trimmed)?)
    }

    fn from_epsg(code: &str, descriptor: &str) -> ProjectionResult<Self> {
        let code: u32 = code
            .parse()
            .map_err(|_| ProjectionError::InvalidDescriptor(descriptor.to_string()))?;

        match code {
            4326 => Ok(Projection::Geographic(Geographic)),
            3857 | 900913 => Ok(Projection::Mercator(Mercator::web())),
            32601..=32660 => Ok(Projection::TransverseMercator(TransverseMercator::utm(
                code - 32600,
                false,
                Ellipsoid::WGS84,
            )?)),
            32701..=32760 => Ok(Projection::TransverseMercator(TransverseMercator::utm(
                code - 32700,
                true,
                Ellipsoid::WGS84,
            )?)),
            _ => Err(ProjectionError::UnsupportedProjection(format!(
                "EPSG:{}",
                code
            ))),
        }
    }

    /// Build a projection from parsed proj-string parameters.
    pub fn from_params(params: &ProjParams) -> ProjectionResult<Self> {
        let ellipsoid = params.ellipsoid()?;

        match params.proj.as_str() {
            "longlat" | "latlong" | "lonlat" | "latlon" => Ok(Projection::Geographic(Geographic)),
            "tmerc" => {
                params.check_units()?;
                Ok(Projection::TransverseMercator(TransverseMercator::new(
                    params.f64_or("lat_0", 0.0)?,
                    params.f64_or("lon_0", 0.0)?,
                    params.scale_factor(1.0)?,
                    params.f64_or("x_0", 0.0)?,
                    params.f64_or("y_0", 0.0)?,
                    ellipsoid,
                )?))
            }
            "utm" => {
                params.check_units()?;
                let raw_zone = params.require_f64("zone")?;
                if raw_zone.fract() != 0.0 || raw_zone < 1.0 {
                    return Err(ProjectionError::InvalidParameter {
                        param: "zone".to_string(),
                        value: raw_zone.to_string(),
                    });
                }
                Ok(Projection::TransverseMercator(TransverseMercator::utm(
                    raw_zone as u32,
                    params.has_flag("south"),
                    ellipsoid,
                )?))
            }
            "merc" => {
                params.check_units()?;
                let k0 = match params.get_f64("lat_ts")? {
                    Some(lat_ts) => Mercator::scale_for_true_latitude(lat_ts, &ellipsoid),
                    None => params.scale_factor(1.0)?,
                };
                Ok(Projection::Mercator(Mercator::new(
                    params.f64_or("lon_0", 0.0)?,
                    k0,
                    params.f64_or("x_0", 0.0)?,
                    params.f64_or("y_0", 0.0)?,
                    ellipsoid,
                )?))
            }
            "lcc" => {
                params.check_units()?;
                let lat1 = params.require_f64("lat_1")?;
                let lat2 = params.f64_or("lat_2", lat1)?;
                Ok(Projection::LambertConformal(LambertConformal::new(
                    params.f64_or("lat_0", lat1)?,
                    params.f64_or("lon_0", 0.0)?,
                    lat1,
                    lat2,
                    params.f64_or("x_0", 0.0)?,
                    params.f64_or("y_0", 0.0)?,
                    ellipsoid,
                )?))
            }
            other => Err(ProjectionError::UnsupportedProjection(other.to_string())),
        }
    }

    /// Project geographic coordinates (degrees) to (x, y) in the target CRS.
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> ProjectionResult<(f64, f64)> {
        match self {
            Projection::Geographic(p) => p.forward(lat_deg, lon_deg),
            Projection::TransverseMercator(p) => p.forward(lat_deg, lon_deg),
            Projection::Mercator(p) => p.forward(lat_deg, lon_deg),
            Projection::LambertConformal(p) => p.forward(lat_deg, lon_deg),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Projection::Geographic(_) => "longlat",
            Projection::TransverseMercator(_) => "tmerc",
            Projection::Mercator(_) => "merc",
            Projection::LambertConformal(_) => "lcc",
        }
    }
}

impl FromStr for Projection {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_descriptor(s)
    }
}
