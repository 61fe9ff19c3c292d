//! JSON report of a render pass.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use map_annotations::{AnnotationError, AnnotationSet, DrawCall};

#[derive(Debug, Serialize)]
pub struct Failure {
    pub index: usize,
    pub kind: &'static str,
    pub configuration: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub annotations: Vec<&'static str>,
    pub calls: Vec<DrawCall>,
    pub failures: Vec<Failure>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub textures: Vec<PathBuf>,
}

impl Report {
    pub fn new(
        set: &AnnotationSet,
        calls: Vec<DrawCall>,
        failures: Vec<(usize, AnnotationError)>,
    ) -> Self {
        let annotations = set.kinds();
        let failures = failures
            .into_iter()
            .map(|(index, e)| Failure {
                index,
                kind: annotations.get(index).copied().unwrap_or("unknown"),
                configuration: e.is_configuration_error(),
                error: e.to_string(),
            })
            .collect();

        Self {
            annotations,
            calls,
            failures,
            textures: Vec::new(),
        }
    }

    /// Write every textured mesh call as `texture_<call index>.png`.
    pub fn write_textures(&mut self, dir: &Path) -> Result<()> {
        for (i, call) in self.calls.iter().enumerate() {
            if let DrawCall::Mesh {
                texture: Some(texture),
                ..
            } = call
            {
                let path = dir.join(format!("texture_{}.png", i));
                texture
                    .write_png(&path)
                    .with_context(|| format!("Failed to write texture to {:?}", path))?;
                info!(path = %path.display(), "Wrote texture");
                self.textures.push(path);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_annotations::{ArrowAnnotation, OutlineAnnotation, OutlineConfig, RecordingSurface};
    use test_utils::{glacier_context, temp_output_dir};

    fn rendered() -> (AnnotationSet, RecordingSurface) {
        let mut set = AnnotationSet::new();
        set.push(ArrowAnnotation::default());
        set.push(OutlineAnnotation::new(OutlineConfig::default()).unwrap());

        let mut surface = RecordingSurface::new();
        set.render_all(&glacier_context(), &mut surface).unwrap();
        (set, surface)
    }

    #[test]
    fn test_report_serializes_calls() {
        let (set, surface) = rendered();
        let report = Report::new(&set, surface.into_calls(), Vec::new());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["annotations"], serde_json::json!(["arrow", "outline"]));
        assert_eq!(json["calls"][0]["call"], "arrows");
        assert_eq!(json["calls"][1]["call"], "point_labels");
        assert_eq!(json["calls"][2]["call"], "mesh");
        assert!(json.get("textures").is_none());
    }

    #[test]
    fn test_failures_carry_kind() {
        let (set, surface) = rendered();
        let report = Report::new(
            &set,
            surface.into_calls(),
            vec![(1, AnnotationError::EmptyLegend)],
        );

        assert_eq!(report.failures[0].kind, "outline");
        assert!(report.failures[0].configuration);
    }

    #[test]
    fn test_write_textures() {
        let (set, surface) = rendered();
        let mut report = Report::new(&set, surface.into_calls(), Vec::new());
        let dir = temp_output_dir();

        report.write_textures(dir.path()).unwrap();

        assert_eq!(report.textures, vec![dir.path().join("texture_2.png")]);
        assert!(report.textures[0].exists());
    }
}
