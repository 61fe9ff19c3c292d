//! Text labels at geographic locations.

use crate::annotation::Annotation;
use crate::error::{AnnotationError, AnnotationResult};
use crate::surface::PlottingSurface;
use nalgebra::Point3;
use projection::Projection;
use serde::{Deserialize, Serialize};
use viz_common::{DrawOptions, VisualizationContext};

/// Configuration of a point label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    /// Latitude of the point (degrees)
    pub latitude: f64,
    /// Longitude of the point (degrees)
    pub longitude: f64,
    /// Height of the label in meters
    pub height: f64,
    /// Text to display at the point
    pub text: String,
    /// Passed through to the label draw call
    #[serde(default)]
    pub options: DrawOptions,
}

/// Label placed at a latitude/longitude, reprojected into the scene CRS.
#[derive(Debug, Clone)]
pub struct PointAnnotation {
    config: PointConfig,
    projected: Option<Point3<f64>>,
}

impl PointAnnotation {
    pub fn new(config: PointConfig) -> Self {
        Self {
            config,
            projected: None,
        }
    }

    pub fn config(&self) -> &PointConfig {
        &self.config
    }

    /// Scene coordinates computed by the last render.
    pub fn projected(&self) -> Option<Point3<f64>> {
        self.projected
    }

    /// Reproject the configured location into the context's CRS.
    pub fn reproject(&self, ctx: &VisualizationContext) -> AnnotationResult<Point3<f64>> {
        let projection_error = |source| AnnotationError::Projection {
            descriptor: ctx.srs().to_string(),
            source,
        };

        let projection = Projection::from_descriptor(ctx.srs()).map_err(projection_error)?;
        let (x, y) = projection
            .forward(self.config.latitude, self.config.longitude)
            .map_err(projection_error)?;

        Ok(Point3::new(x, y, self.config.height))
    }
}

impl Annotation for PointAnnotation {
    fn render(
        &mut self,
        ctx: &VisualizationContext,
        surface: &mut dyn PlottingSurface,
    ) -> AnnotationResult<()> {
        self.projected = None;
        let point = self.reproject(ctx)?;
        self.projected = Some(point);

        tracing::debug!(
            text = %self.config.text,
            x = point.x,
            y = point.y,
            z = point.z,
            "Drawing point label"
        );

        surface
            .add_point_labels(&[point], &[self.config.text.clone()], &self.config.options)
            .map_err(AnnotationError::Surface)
    }

    fn kind(&self) -> &'static str {
        "point"
    }
}
