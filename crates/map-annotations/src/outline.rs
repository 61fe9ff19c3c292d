//! Gridded outlines (e.g. the glacier extent) draped over the terrain.

use crate::annotation::Annotation;
use crate::error::{AnnotationError, AnnotationResult};
use crate::surface::PlottingSurface;
use crate::texture::Texture;
use serde::{Deserialize, Serialize};
use viz_common::{Color, DrawOptions, Field, Rgba, VisualizationContext};

/// Configuration of an outline overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Name of the binary mask field in the dataset
    #[serde(default = "default_outline_data")]
    pub outline_data: String,

    /// Outline color, name or 0-255 components
    #[serde(default = "default_outline_color")]
    pub outline_color: Color,

    /// Passed through to the mesh draw call
    #[serde(default)]
    pub options: DrawOptions,
}

fn default_outline_data() -> String {
    "glacier_ext".to_string()
}
fn default_outline_color() -> Color {
    Color::named("black")
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            outline_data: default_outline_data(),
            outline_color: default_outline_color(),
            options: DrawOptions::new(),
        }
    }
}

/// Mask field rendered as a colored texture on a copy of the terrain mesh.
#[derive(Debug, Clone)]
pub struct OutlineAnnotation {
    outline_data: String,
    outline_color: Rgba,
    options: DrawOptions,
    texture: Option<Texture>,
}

impl OutlineAnnotation {
    /// Fails if the outline color cannot be normalized.
    pub fn new(config: OutlineConfig) -> AnnotationResult<Self> {
        Ok(Self {
            outline_data: config.outline_data,
            outline_color: config.outline_color.normalize()?,
            options: config.options,
            texture: None,
        })
    }

    pub fn outline_data(&self) -> &str {
        &self.outline_data
    }

    pub fn outline_color(&self) -> Rgba {
        self.outline_color
    }

    /// Texture built by the last render. Kept when only the surface rejected
    /// the mesh; `None` when the texture itself could not be built.
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Build the outline texture for a context: transparent everywhere except
    /// where the mask equals 1.
    pub fn build_texture(&self, ctx: &VisualizationContext) -> AnnotationResult<Texture> {
        let mask = ctx.dataset().field(&self.outline_data)?;
        let [ny, nx] = ctx.terrain_mesh().grid_shape();

        if mask.shape() != [ny, nx] {
            return Err(AnnotationError::ShapeMismatch {
                field: self.outline_data.clone(),
                mask: mask.shape().to_vec(),
                mesh: vec![ny, nx],
            });
        }

        mask_to_texture(mask, nx, ny, self.outline_color)
    }
}

/// Convert a `[rows, cols]` mask into an RGBA texture of the same shape.
pub fn mask_to_texture(mask: &Field, cols: usize, rows: usize, color: Rgba) -> AnnotationResult<Texture> {
    let mut pixels = vec![0u8; rows * cols * 4];
    for (pixel, &value) in pixels.chunks_exact_mut(4).zip(mask.values()) {
        if value == 1.0 {
            pixel.copy_from_slice(&color.0);
        }
    }
    Texture::from_rgba(cols, rows, pixels)
}

impl Annotation for OutlineAnnotation {
    fn render(
        &mut self,
        ctx: &VisualizationContext,
        surface: &mut dyn PlottingSurface,
    ) -> AnnotationResult<()> {
        self.texture = None;
        let texture = self.build_texture(ctx)?;

        // Texture coordinates are set on a copy so the shared mesh stays untouched
        let mut mesh = ctx.terrain_mesh().clone();
        mesh.texture_map_to_plane();

        tracing::debug!(
            field = %self.outline_data,
            color = %self.outline_color,
            outlined = texture.opaque_count(),
            "Drawing outline"
        );

        let result = surface
            .add_mesh(mesh, Some(&texture), &self.options)
            .map_err(AnnotationError::Surface);
        self.texture = Some(texture);
        result
    }

    fn kind(&self) -> &'static str {
        "outline"
    }
}
