//! Ordered collection of annotations rendered once per draw cycle.

use crate::annotation::Annotation;
use crate::error::{AnnotationError, AnnotationResult};
use crate::surface::PlottingSurface;
use tracing::{info, warn};
use viz_common::VisualizationContext;

/// Annotations in draw order.
#[derive(Default)]
pub struct AnnotationSet {
    annotations: Vec<Box<dyn Annotation>>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, annotation: impl Annotation + 'static) {
        self.annotations.push(Box::new(annotation));
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Annotation kinds in draw order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.annotations.iter().map(|a| a.kind()).collect()
    }

    /// Render every annotation in order, stopping at the first failure.
    pub fn render_all(
        &mut self,
        ctx: &VisualizationContext,
        surface: &mut dyn PlottingSurface,
    ) -> AnnotationResult<()> {
        for annotation in &mut self.annotations {
            annotation.render(ctx, surface)?;
        }
        info!(count = self.annotations.len(), "Rendered annotations");
        Ok(())
    }

    /// Render every annotation in order. A failing annotation is logged and
    /// skipped; failures are returned with the index of the annotation.
    pub fn render_each(
        &mut self,
        ctx: &VisualizationContext,
        surface: &mut dyn PlottingSurface,
    ) -> Vec<(usize, AnnotationError)> {
        let mut failures = Vec::new();

        for (index, annotation) in self.annotations.iter_mut().enumerate() {
            if let Err(e) = annotation.render(ctx, surface) {
                warn!(
                    index,
                    kind = annotation.kind(),
                    configuration = e.is_configuration_error(),
                    error = %e,
                    "Annotation failed to render"
                );
                failures.push((index, e));
            }
        }

        info!(
            count = self.annotations.len(),
            failed = failures.len(),
            "Rendered annotations"
        );
        failures
    }
}

impl std::fmt::Debug for AnnotationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationSet")
            .field("annotations", &self.kinds())
            .finish()
    }
}
