//! RGBA texture images applied to terrain meshes.

use crate::error::{AnnotationError, AnnotationResult};
use crate::png::{create_png_auto, PngError};
use std::path::Path;
use viz_common::Rgba;

/// Row-major RGBA image. Row 0 corresponds to row 0 of the dataset field the
/// texture was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Texture {
    /// Wrap an RGBA buffer of `width * height * 4` bytes.
    pub fn from_rgba(width: usize, height: usize, pixels: Vec<u8>) -> AnnotationResult<Self> {
        if pixels.len() != width * height * 4 {
            return Err(AnnotationError::Texture(format!(
                "{}x{} texture needs {} bytes, got {}",
                width,
                height,
                width * height * 4,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<Rgba> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let i = (row * self.width + col) * 4;
        Some(Rgba([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]))
    }

    /// Number of pixels with non-zero alpha.
    pub fn opaque_count(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|p| p[3] != 0).count()
    }

    /// Encode as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, PngError> {
        create_png_auto(&self.pixels, self.width, self.height)
    }

    /// Encode as PNG and write to `path`.
    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<(), PngError> {
        let png = self.to_png()?;
        std::fs::write(path, png)?;
        Ok(())
    }
}
