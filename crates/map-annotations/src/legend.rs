//! Scene legend.

use crate::annotation::Annotation;
use crate::error::{AnnotationError, AnnotationResult};
use crate::surface::PlottingSurface;
use serde::{Deserialize, Serialize};
use viz_common::{Color, DrawOptions, Rgba, VisualizationContext};

/// A `(label, color)` pair as written in configuration, e.g. `["ice", "blue"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabel(pub String, pub Color);

impl LegendLabel {
    pub fn new(label: impl Into<String>, color: impl Into<Color>) -> Self {
        Self(label.into(), color.into())
    }
}

/// A legend entry with its color normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgba,
}

/// Configuration of a legend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    /// Entries to show. `None` reuses the labels already registered with the
    /// plotting surface.
    #[serde(default)]
    pub labels: Option<Vec<LegendLabel>>,

    /// Passed through to the legend draw call
    #[serde(default)]
    pub options: DrawOptions,
}

/// Defaults for a single-entry legend: gray box at the lower center.
pub fn default_legend_options() -> DrawOptions {
    DrawOptions::new()
        .with("bcolor", vec![0.5, 0.5, 0.5])
        .with("size", vec![0.2, 0.1])
        .with("loc", "lower center")
        .with("face", "rectangle")
}

#[derive(Debug, Clone)]
pub struct LegendAnnotation {
    labels: Option<Vec<LegendEntry>>,
    options: DrawOptions,
}

impl LegendAnnotation {
    /// Normalizes every color up front. Fails on an invalid color or an empty
    /// label list.
    pub fn new(config: LegendConfig) -> AnnotationResult<Self> {
        let labels = match config.labels {
            None => None,
            Some(labels) if labels.is_empty() => return Err(AnnotationError::EmptyLegend),
            Some(labels) => Some(
                labels
                    .into_iter()
                    .map(|LegendLabel(label, color)| -> AnnotationResult<LegendEntry> {
                        Ok(LegendEntry {
                            label,
                            color: color.normalize()?,
                        })
                    })
                    .collect::<AnnotationResult<Vec<_>>>()?,
            ),
        };

        Ok(Self {
            labels,
            options: config.options.with_defaults(&default_legend_options()),
        })
    }

    pub fn labels(&self) -> Option<&[LegendEntry]> {
        self.labels.as_deref()
    }

    pub fn options(&self) -> &DrawOptions {
        &self.options
    }
}

impl Annotation for LegendAnnotation {
    fn render(
        &mut self,
        _ctx: &VisualizationContext,
        surface: &mut dyn PlottingSurface,
    ) -> AnnotationResult<()> {
        tracing::debug!(
            entries = self.labels.as_ref().map(Vec::len),
            "Drawing legend"
        );

        surface
            .add_legend(self.labels.as_deref(), &self.options)
            .map_err(AnnotationError::Surface)
    }

    fn kind(&self) -> &'static str {
        "legend"
    }
}
