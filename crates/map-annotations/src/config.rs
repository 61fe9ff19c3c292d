//! Annotation files: a list of annotations in JSON or YAML.
//!
//! ```yaml
//! version: "1.0"
//! annotations:
//!   - type: arrow
//!     text: N
//!   - type: outline
//!     outline_color: [255, 0, 0]
//!   - type: legend
//!     labels: [["ice", "steelblue"]]
//! ```

use crate::arrow::{ArrowAnnotation, ArrowConfig};
use crate::error::AnnotationResult;
use crate::legend::{LegendAnnotation, LegendConfig};
use crate::outline::{OutlineAnnotation, OutlineConfig};
use crate::point::{PointAnnotation, PointConfig};
use crate::scene::AnnotationSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse annotation file: {0}")]
    ParseError(String),

    #[error("Unsupported annotation file format: {0}")]
    UnsupportedFormat(String),
}

/// One annotation entry, selected by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnnotationConfig {
    Point(PointConfig),
    Arrow(ArrowConfig),
    Outline(OutlineConfig),
    Legend(LegendConfig),
}

impl AnnotationConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            AnnotationConfig::Point(_) => "point",
            AnnotationConfig::Arrow(_) => "arrow",
            AnnotationConfig::Outline(_) => "outline",
            AnnotationConfig::Legend(_) => "legend",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationFile {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub annotations: Vec<AnnotationConfig>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl AnnotationFile {
    pub fn from_json(json: &str) -> Result<Self, ConfigFileError> {
        serde_json::from_str(json).map_err(|e| ConfigFileError::ParseError(e.to_string()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigFileError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigFileError::ParseError(e.to_string()))
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigFileError::IoError {
                path: path.display().to_string(),
                source,
            })
        };

        match extension.as_str() {
            "json" => Self::from_json(&read()?),
            "yaml" | "yml" => Self::from_yaml(&read()?),
            _ => Err(ConfigFileError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    /// Construct every annotation in file order. Fails on the first entry
    /// whose configuration is invalid (e.g. an unknown color).
    pub fn build(&self) -> AnnotationResult<AnnotationSet> {
        let mut set = AnnotationSet::new();
        for config in &self.annotations {
            match config.clone() {
                AnnotationConfig::Point(c) => set.push(PointAnnotation::new(c)),
                AnnotationConfig::Arrow(c) => set.push(ArrowAnnotation::new(c)),
                AnnotationConfig::Outline(c) => set.push(OutlineAnnotation::new(c)?),
                AnnotationConfig::Legend(c) => set.push(LegendAnnotation::new(c)?),
            }
        }
        tracing::debug!(count = set.len(), "Built annotations");
        Ok(set)
    }
}
