//! Tests for outline textures draped on the terrain.

use map_annotations::recording::DrawKind;
use map_annotations::{
    Annotation, AnnotationError, DrawCall, OutlineAnnotation, OutlineConfig, RecordingSurface,
};
use test_utils::{
    create_outline_mask, glacier_context, glacier_dataset, srs, temp_output_dir, GLACIER_COLS,
    GLACIER_ROWS, OUTLINE_FIELD,
};
use viz_common::{Color, DataError, Rgba, VisualizationContext};

fn red_outline() -> OutlineAnnotation {
    OutlineAnnotation::new(OutlineConfig {
        outline_color: Color::from([255u8, 0, 0]),
        ..OutlineConfig::default()
    })
    .unwrap()
}

#[test]
fn test_defaults() {
    let outline = OutlineAnnotation::new(OutlineConfig::default()).unwrap();
    assert_eq!(outline.outline_data(), "glacier_ext");
    assert_eq!(outline.outline_color(), Rgba([0, 0, 0, 255]));
    assert!(outline.texture().is_none());
}

#[test]
fn test_texture_follows_mask() {
    let ctx = glacier_context();
    let mask = ctx.dataset().field(OUTLINE_FIELD).unwrap();
    let texture = red_outline().build_texture(&ctx).unwrap();

    assert_eq!(texture.width(), GLACIER_COLS);
    assert_eq!(texture.height(), GLACIER_ROWS);

    for row in 0..GLACIER_ROWS {
        for col in 0..GLACIER_COLS {
            let pixel = texture.pixel(row, col).unwrap();
            if mask.get2(row, col) == Some(1.0) {
                assert_eq!(pixel, Rgba([255, 0, 0, 255]), "row {} col {}", row, col);
            } else {
                assert_eq!(pixel.a(), 0, "row {} col {}", row, col);
            }
        }
    }
    assert_eq!(texture.opaque_count(), 6);
}

#[test]
fn test_render_drapes_texture_on_mesh_copy() {
    let ctx = glacier_context();
    let mut surface = RecordingSurface::new();
    let mut outline = red_outline();

    outline.render(&ctx, &mut surface).unwrap();

    assert_eq!(surface.calls().len(), 1);
    match &surface.calls()[0] {
        DrawCall::Mesh {
            grid_shape,
            texture_size,
            mesh,
            texture,
            ..
        } => {
            assert_eq!(*grid_shape, [GLACIER_ROWS, GLACIER_COLS]);
            assert_eq!(*texture_size, Some([GLACIER_ROWS, GLACIER_COLS]));
            assert!(mesh.texture_coords().is_some());
            assert_eq!(texture.as_ref(), outline.texture());
        }
        other => panic!("expected mesh, got {:?}", other),
    }

    // The shared mesh never gets texture coordinates
    assert!(ctx.terrain_mesh().texture_coords().is_none());
}

#[test]
fn test_mask_shape_mismatch() {
    let dataset = glacier_dataset(srs::TMERC_ALPS).with_field(
        OUTLINE_FIELD,
        create_outline_mask(GLACIER_COLS, GLACIER_ROWS, 0..1, 0..1),
    );
    let ctx = VisualizationContext::new(dataset).unwrap();
    let mut surface = RecordingSurface::new();

    let err = red_outline().render(&ctx, &mut surface).unwrap_err();

    match &err {
        AnnotationError::ShapeMismatch { field, mask, mesh } => {
            assert_eq!(field, OUTLINE_FIELD);
            assert_eq!(mask, &vec![GLACIER_COLS, GLACIER_ROWS]);
            assert_eq!(mesh, &vec![GLACIER_ROWS, GLACIER_COLS]);
        }
        other => panic!("expected shape mismatch, got {:?}", other),
    }
    assert!(err.is_configuration_error());
    assert!(surface.calls().is_empty());
}

#[test]
fn test_missing_mask_field() {
    let outline = OutlineAnnotation::new(OutlineConfig {
        outline_data: "debris_cover".to_string(),
        ..OutlineConfig::default()
    })
    .unwrap();

    let err = outline.build_texture(&glacier_context()).unwrap_err();
    assert!(matches!(
        err,
        AnnotationError::Data(DataError::MissingField(ref name)) if name == "debris_cover"
    ));
}

#[test]
fn test_invalid_color_rejected_at_construction() {
    let err = OutlineAnnotation::new(OutlineConfig {
        outline_color: Color::named("glacier-ish"),
        ..OutlineConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, AnnotationError::Color(_)));

    let err = OutlineAnnotation::new(OutlineConfig {
        outline_color: Color::Components(vec![0, 300, 0]),
        ..OutlineConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, AnnotationError::Color(_)));
}

#[test]
fn test_texture_kept_when_surface_rejects_mesh() {
    let ctx = glacier_context();
    let mut surface = RecordingSurface::failing_on(DrawKind::Mesh, "mesh limit reached");
    let mut outline = red_outline();

    let err = outline.render(&ctx, &mut surface).unwrap_err();

    assert!(matches!(err, AnnotationError::Surface(_)));
    assert_eq!(outline.texture().map(|t| t.opaque_count()), Some(6));
}

#[test]
fn test_texture_png_export() {
    let dir = temp_output_dir();
    let path = dir.path().join("outline.png");

    let texture = red_outline().build_texture(&glacier_context()).unwrap();
    texture.write_png(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    assert_eq!(&bytes[12..16], b"IHDR");
    assert_eq!(u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]), GLACIER_COLS as u32);
    assert_eq!(u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]), GLACIER_ROWS as u32);
}

#[test]
fn test_failed_render_clears_previous_texture() {
    let mut surface = RecordingSurface::new();
    let mut outline = red_outline();

    outline.render(&glacier_context(), &mut surface).unwrap();
    assert!(outline.texture().is_some());

    let dataset = glacier_dataset(srs::TMERC_ALPS)
        .with_field(OUTLINE_FIELD, create_outline_mask(2, 2, 0..1, 0..1));
    let small_mask = VisualizationContext::new(dataset).unwrap();

    let err = outline.render(&small_mask, &mut surface).unwrap_err();
    assert!(matches!(err, AnnotationError::ShapeMismatch { .. }));
    assert!(outline.texture().is_none());
    assert_eq!(surface.count(DrawKind::Mesh), 1);
}
