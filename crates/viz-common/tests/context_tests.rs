//! Tests for the visualization context and its extents.

use viz_common::{
    AxisRange, DataError, Dataset, Field, FieldNames, VisualizationContext,
};

fn dataset() -> Dataset {
    Dataset::new("+proj=tmerc +lat_0=0 +lon_0=10 +k=0.9996 +x_0=0 +y_0=0 +datum=WGS84")
        .with_field("x", Field::from_vec(vec![0.0, 5.0, 10.0]))
        .with_field("y", Field::from_vec(vec![20.0, 10.0, 0.0]))
        .with_field(
            "topo_bedrock",
            Field::grid(3, 3, vec![100.0, 120.0, 140.0, 150.0, f64::NAN, 160.0, 170.0, 180.0, 200.0])
                .unwrap(),
        )
}

#[test]
fn test_context_extent() {
    let ctx = VisualizationContext::new(dataset()).unwrap();
    let extent = ctx.extent().unwrap();
    assert_eq!(extent.x, AxisRange::new(0.0, 10.0));
    assert_eq!(extent.y, AxisRange::new(0.0, 20.0));
    assert_eq!(extent.z, AxisRange::new(100.0, 200.0));
}

#[test]
fn test_context_builds_mesh() {
    let ctx = VisualizationContext::new(dataset()).unwrap();
    assert_eq!(ctx.terrain_mesh().grid_shape(), [3, 3]);
    assert_eq!(ctx.terrain_mesh().n_points(), 9);
}

#[test]
fn test_axis_fraction_endpoints() {
    let range = AxisRange::new(-3.5, 42.0);
    for fraction in [0.0, 1.0] {
        let expected = if fraction == 0.0 { range.min } else { range.max };
        assert_eq!(range.at(fraction), expected);
    }
    assert_eq!(range.at(2.0), 87.5);
}

#[test]
fn test_custom_field_names() {
    let names = FieldNames {
        topo_bedrock: "bedrock".to_string(),
        ..FieldNames::default()
    };
    let err = VisualizationContext::with_names(dataset(), names).unwrap_err();
    assert_eq!(err, DataError::MissingField("bedrock".to_string()));
}

#[test]
fn test_context_from_dataset_json() {
    let json = r#"{
        "srs": "EPSG:3857",
        "fields": {
            "x": {"shape": [2], "values": [0.0, 1.0]},
            "y": {"shape": [2], "values": [0.0, 1.0]},
            "topo_bedrock": {"shape": [2, 2], "values": [1.0, 2.0, 3.0, 4.0]}
        }
    }"#;
    let ctx = VisualizationContext::new(Dataset::from_json(json).unwrap()).unwrap();
    assert_eq!(ctx.srs(), "EPSG:3857");
}
