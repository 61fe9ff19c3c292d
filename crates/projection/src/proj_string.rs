//! Parsing of proj-style descriptors.
//!
//! Accepts strings like:
//! - "+proj=tmerc +lat_0=0 +lon_0=-121 +k=0.9996 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs"
//! - "+proj=utm +zone=32 +south +ellps=GRS80"
//! - "+proj=lcc +lat_1=33 +lat_2=45 +lat_0=39 +lon_0=-96"
//!
//! Parameters without a value (`+south`, `+no_defs`) are flags.

use crate::error::{ProjectionError, ProjectionResult};
use crate::geographic::Ellipsoid;
use std::collections::BTreeMap;

/// Parsed `+key=value` parameters of a proj-string.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjParams {
    /// Value of `+proj`, lowercased
    pub proj: String,
    params: BTreeMap<String, Option<String>>,
}

impl ProjParams {
    pub fn parse(descriptor: &str) -> ProjectionResult<Self> {
        let mut params = BTreeMap::new();

        for token in descriptor.split_whitespace() {
            let token = token.strip_prefix('+').unwrap_or(token);
            if token.is_empty() {
                return Err(ProjectionError::InvalidDescriptor(descriptor.to_string()));
            }

            match token.split_once('=') {
                Some((key, value)) => {
                    if key.is_empty() || value.is_empty() {
                        return Err(ProjectionError::InvalidDescriptor(descriptor.to_string()));
                    }
                    params.insert(key.to_lowercase(), Some(value.to_string()));
                }
                None => {
                    params.insert(token.to_lowercase(), None);
                }
            }
        }

        let proj = match params.remove("proj") {
            Some(Some(proj)) => proj.to_lowercase(),
            _ => return Err(ProjectionError::InvalidDescriptor(descriptor.to_string())),
        };

        Ok(Self { proj, params })
    }

    /// Raw string value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(|v| v.as_deref())
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Numeric parameter, `None` when absent.
    pub fn get_f64(&self, key: &str) -> ProjectionResult<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Some)
                .ok_or_else(|| ProjectionError::InvalidParameter {
                    param: key.to_string(),
                    value: raw.to_string(),
                }),
        }
    }

    /// Numeric parameter with a fallback.
    pub fn f64_or(&self, key: &str, default: f64) -> ProjectionResult<f64> {
        Ok(self.get_f64(key)?.unwrap_or(default))
    }

    /// Numeric parameter that must be present.
    pub fn require_f64(&self, key: &str) -> ProjectionResult<f64> {
        self.get_f64(key)?
            .ok_or_else(|| ProjectionError::MissingParameter(key.to_string()))
    }

    /// Scale factor, spelled either `+k` or `+k_0`.
    pub fn scale_factor(&self, default: f64) -> ProjectionResult<f64> {
        match self.get_f64("k_0")? {
            Some(k) => Ok(k),
            None => self.f64_or("k", default),
        }
    }

    /// Resolve the ellipsoid from `+R`, `+a/+b/+rf/+f`, `+ellps` or `+datum`.
    /// Defaults to WGS84.
    pub fn ellipsoid(&self) -> ProjectionResult<Ellipsoid> {
        if let Some(r) = self.get_f64("r")? {
            return Ok(Ellipsoid::sphere(r));
        }

        if let Some(a) = self.get_f64("a")? {
            if let Some(b) = self.get_f64("b")? {
                return Ok(Ellipsoid::from_axes(a, b));
            }
            if let Some(rf) = self.get_f64("rf")? {
                return Ok(Ellipsoid { a, f: 1.0 / rf });
            }
            if let Some(f) = self.get_f64("f")? {
                return Ok(Ellipsoid { a, f });
            }
            return Ok(Ellipsoid::sphere(a));
        }

        if let Some(name) = self.get("ellps") {
            return Ellipsoid::by_name(name).ok_or_else(|| ProjectionError::InvalidParameter {
                param: "ellps".to_string(),
                value: name.to_string(),
            });
        }

        if let Some(name) = self.get("datum") {
            return Ellipsoid::for_datum(name).ok_or_else(|| ProjectionError::InvalidParameter {
                param: "datum".to_string(),
                value: name.to_string(),
            });
        }

        Ok(Ellipsoid::WGS84)
    }

    /// Only metre-based output is supported.
    pub fn check_units(&self) -> ProjectionResult<()> {
        match self.get("units") {
            None | Some("m") => Ok(()),
            Some(other) => Err(ProjectionError::InvalidParameter {
                param: "units".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
