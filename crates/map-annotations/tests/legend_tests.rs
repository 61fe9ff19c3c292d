//! Tests for legend construction and pass-through.

use map_annotations::legend::default_legend_options;
use map_annotations::{
    Annotation, AnnotationError, DrawCall, LegendAnnotation, LegendConfig, LegendEntry,
    LegendLabel, RecordingSurface,
};
use serde_json::json;
use test_utils::glacier_context;
use viz_common::{DrawOptions, Rgba};

fn ice_and_rock() -> LegendConfig {
    LegendConfig {
        labels: Some(vec![
            LegendLabel::new("ice", "blue"),
            LegendLabel::new("rock", [100u8, 100, 100, 255]),
        ]),
        options: DrawOptions::new(),
    }
}

#[test]
fn test_labels_are_normalized() {
    let legend = LegendAnnotation::new(ice_and_rock()).unwrap();

    assert_eq!(
        legend.labels().unwrap(),
        &[
            LegendEntry {
                label: "ice".to_string(),
                color: Rgba([0, 0, 255, 255]),
            },
            LegendEntry {
                label: "rock".to_string(),
                color: Rgba([100, 100, 100, 255]),
            },
        ]
    );
}

#[test]
fn test_default_options_applied() {
    let legend = LegendAnnotation::new(ice_and_rock()).unwrap();
    let options = legend.options();

    assert_eq!(options.get("bcolor"), Some(&json!([0.5, 0.5, 0.5])));
    assert_eq!(options.get("size"), Some(&json!([0.2, 0.1])));
    assert_eq!(options.get("loc"), Some(&json!("lower center")));
    assert_eq!(options.get("face"), Some(&json!("rectangle")));
    assert_eq!(options, &default_legend_options());
}

#[test]
fn test_caller_options_win() {
    let legend = LegendAnnotation::new(LegendConfig {
        options: DrawOptions::new().with("loc", "upper right").with("border", true),
        ..ice_and_rock()
    })
    .unwrap();

    assert_eq!(legend.options().get("loc"), Some(&json!("upper right")));
    assert_eq!(legend.options().get("border"), Some(&json!(true)));
    assert_eq!(legend.options().get("face"), Some(&json!("rectangle")));
}

#[test]
fn test_render_passes_labels_and_options() {
    let mut surface = RecordingSurface::new();
    LegendAnnotation::new(ice_and_rock())
        .unwrap()
        .render(&glacier_context(), &mut surface)
        .unwrap();

    match surface.calls() {
        [DrawCall::Legend { labels, options }] => {
            assert_eq!(
                labels.as_deref(),
                Some(
                    &[
                        LegendEntry {
                            label: "ice".to_string(),
                            color: Rgba([0, 0, 255, 255]),
                        },
                        LegendEntry {
                            label: "rock".to_string(),
                            color: Rgba([100, 100, 100, 255]),
                        },
                    ][..]
                )
            );
            assert_eq!(options, &default_legend_options());
        }
        other => panic!("expected one legend call, got {:?}", other),
    }
}

#[test]
fn test_no_labels_defers_to_surface() {
    let mut surface = RecordingSurface::new();
    let mut legend = LegendAnnotation::new(LegendConfig::default()).unwrap();
    assert!(legend.labels().is_none());

    legend.render(&glacier_context(), &mut surface).unwrap();

    assert!(matches!(
        surface.calls(),
        [DrawCall::Legend { labels: None, .. }]
    ));
}

#[test]
fn test_empty_label_list_rejected() {
    let err = LegendAnnotation::new(LegendConfig {
        labels: Some(Vec::new()),
        options: DrawOptions::new(),
    })
    .unwrap_err();

    assert!(matches!(err, AnnotationError::EmptyLegend));
    assert!(err.is_configuration_error());
}

#[test]
fn test_invalid_color_rejected() {
    let err = LegendAnnotation::new(LegendConfig {
        labels: Some(vec![
            LegendLabel::new("ice", "blue"),
            LegendLabel::new("firn", "sparkly"),
        ]),
        options: DrawOptions::new(),
    })
    .unwrap_err();

    assert!(matches!(err, AnnotationError::Color(_)));
    assert!(err.to_string().contains("sparkly"));
}

#[test]
fn test_labels_from_json() {
    let config: LegendConfig = serde_json::from_str(
        r#"{"labels": [["ice", "steelblue"], ["rock", [100, 100, 100]]], "options": {"loc": "upper left"}}"#,
    )
    .unwrap();
    let legend = LegendAnnotation::new(config).unwrap();

    let labels = legend.labels().unwrap();
    assert_eq!(labels[0].color, Rgba([70, 130, 180, 255]));
    assert_eq!(labels[1].color, Rgba([100, 100, 100, 255]));
    assert_eq!(legend.options().get("loc"), Some(&json!("upper left")));
}
