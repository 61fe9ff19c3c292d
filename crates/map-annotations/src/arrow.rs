//! Directional arrows with a text label, e.g. a north arrow.
//!
//! Position and size are relative to the scene, so the same configuration
//! works for glaciers of any extent:
//! - the anchor is interpolated between the minimum and maximum of each axis
//!   (x and y from the coordinate fields, z from bedrock elevation)
//! - the length is a fraction of the y extent, whatever the arrow direction

use crate::annotation::Annotation;
use crate::error::{AnnotationError, AnnotationResult};
use crate::surface::PlottingSurface;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use viz_common::{DrawOptions, Extent3, VisualizationContext};

/// Configuration of an arrow annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowConfig {
    /// Relative x position: 0 at the minimum, 1 at the maximum
    #[serde(default = "default_x_position")]
    pub x_position: f64,

    /// Relative y position: 0 at the minimum, 1 at the maximum
    #[serde(default = "default_center")]
    pub y_position: f64,

    /// Relative z position between lowest and highest bedrock
    #[serde(default = "default_center")]
    pub z_position: f64,

    /// Arrow direction
    #[serde(default = "default_direction")]
    pub direction: [f64; 3],

    /// Arrow length relative to the total y extent
    #[serde(default = "default_magnitude")]
    pub magnitude: f64,

    /// Text displayed next to the arrow
    #[serde(default = "default_text")]
    pub text: String,

    /// Text position along the arrow: 0 at the tail, 1 at the tip
    #[serde(default = "default_text_position")]
    pub text_position: f64,

    /// Passed through to the arrow draw call
    #[serde(default)]
    pub arrow_options: DrawOptions,

    /// Passed through to the text draw call
    #[serde(default)]
    pub text_options: DrawOptions,
}

fn default_x_position() -> f64 {
    1.05
}
fn default_center() -> f64 {
    0.5
}
fn default_direction() -> [f64; 3] {
    [0.0, 1.0, 0.0]
}
fn default_magnitude() -> f64 {
    0.2
}
fn default_text() -> String {
    "N".to_string()
}
fn default_text_position() -> f64 {
    1.3
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            x_position: default_x_position(),
            y_position: default_center(),
            z_position: default_center(),
            direction: default_direction(),
            magnitude: default_magnitude(),
            text: default_text(),
            text_position: default_text_position(),
            arrow_options: DrawOptions::new(),
            text_options: DrawOptions::new(),
        }
    }
}

/// Defaults for the arrow glyph: no scalar bar, neutral gray.
pub fn default_arrow_options() -> DrawOptions {
    DrawOptions::new()
        .with("show_scalar_bar", false)
        .with("color", vec![0.2, 0.2, 0.2])
}

/// Defaults for the arrow text: no label box, no point marker, large font.
pub fn default_text_options() -> DrawOptions {
    DrawOptions::new()
        .with("shape", serde_json::Value::Null)
        .with("show_points", false)
        .with("font_size", 30)
}

/// Arrow plus label, positioned relative to the scene extents.
#[derive(Debug, Clone)]
pub struct ArrowAnnotation {
    position: [f64; 3],
    direction: Vector3<f64>,
    magnitude_relative: f64,
    text: String,
    text_position: f64,
    arrow_options: DrawOptions,
    text_options: DrawOptions,

    anchor: Option<Point3<f64>>,
    magnitude: Option<f64>,
}

impl ArrowAnnotation {
    pub fn new(config: ArrowConfig) -> Self {
        Self {
            position: [config.x_position, config.y_position, config.z_position],
            direction: Vector3::from(config.direction),
            magnitude_relative: config.magnitude,
            text: config.text,
            text_position: config.text_position,
            arrow_options: config.arrow_options.with_defaults(&default_arrow_options()),
            text_options: config.text_options.with_defaults(&default_text_options()),
            anchor: None,
            magnitude: None,
        }
    }

    pub fn direction(&self) -> Vector3<f64> {
        self.direction
    }

    pub fn arrow_options(&self) -> &DrawOptions {
        &self.arrow_options
    }

    pub fn text_options(&self) -> &DrawOptions {
        &self.text_options
    }

    /// Anchor computed by the last render.
    pub fn anchor(&self) -> Option<Point3<f64>> {
        self.anchor
    }

    /// Absolute magnitude computed by the last render.
    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }

    /// Anchor point for the given scene extents.
    pub fn anchor_for(&self, extent: &Extent3) -> Point3<f64> {
        extent.point_at(self.position)
    }

    /// Arrow length for the given scene extents. Always scaled by the y
    /// extent so arrows keep the same size whatever their direction.
    pub fn magnitude_for(&self, extent: &Extent3) -> f64 {
        extent.y.span() * self.magnitude_relative
    }

    /// Where the label goes for a given anchor and magnitude.
    pub fn text_point_for(&self, anchor: Point3<f64>, magnitude: f64) -> Point3<f64> {
        anchor + self.direction * magnitude * self.text_position
    }
}

impl Default for ArrowAnnotation {
    fn default() -> Self {
        Self::new(ArrowConfig::default())
    }
}

impl Annotation for ArrowAnnotation {
    fn render(
        &mut self,
        ctx: &VisualizationContext,
        surface: &mut dyn PlottingSurface,
    ) -> AnnotationResult<()> {
        self.anchor = None;
        self.magnitude = None;
        let extent = ctx.extent()?;
        let anchor = self.anchor_for(&extent);
        let magnitude = self.magnitude_for(&extent);
        self.anchor = Some(anchor);
        self.magnitude = Some(magnitude);

        tracing::debug!(
            text = %self.text,
            anchor = ?anchor,
            magnitude,
            "Drawing arrow"
        );

        surface
            .add_arrows(&[anchor], &[self.direction], magnitude, &self.arrow_options)
            .map_err(AnnotationError::Surface)?;

        let text_point = self.text_point_for(anchor, magnitude);
        surface
            .add_point_labels(&[text_point], &[self.text.clone()], &self.text_options)
            .map_err(AnnotationError::Surface)
    }

    fn kind(&self) -> &'static str {
        "arrow"
    }
}
