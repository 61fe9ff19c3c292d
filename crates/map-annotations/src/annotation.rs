//! The annotation capability.

use crate::error::AnnotationResult;
use crate::surface::PlottingSurface;
use viz_common::VisualizationContext;

/// Something that can draw itself onto a scene.
///
/// Implementations keep their own configuration plus transient geometry that
/// is recomputed on every call to [`render`](Annotation::render). The context
/// is never mutated.
pub trait Annotation {
    /// Draw onto `surface` using data derived from `ctx`.
    fn render(
        &mut self,
        ctx: &VisualizationContext,
        surface: &mut dyn PlottingSurface,
    ) -> AnnotationResult<()>;

    /// Short name of the annotation type, used in logs.
    fn kind(&self) -> &'static str;
}
