#![cfg(feature = "serde-derive")]

use serde_json::json;

use vessel_shapes::{
    CylinderDimensions, Dimensions, RectangularBoxOptimizer, ShapeOptimizer, ShapeVariant, Volume,
    compare_shapes,
};

#[test]
fn shape_labels_match_report_labels() {
    for variant in ShapeVariant::ALL {
        let value = serde_json::to_value(variant).unwrap();
        assert_eq!(value, json!(variant.label()));
        let parsed: ShapeVariant = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, variant);
    }
}

#[test]
fn volume_is_validated_when_deserialized() {
    assert_eq!(serde_json::from_str::<Volume>("8.0").unwrap().value(), 8.0);
    assert!(serde_json::from_str::<Volume>("-8.0").is_err());
    assert!(serde_json::from_str::<Volume>("0").is_err());
}

#[test]
fn dimensions_are_tagged_by_shape() {
    let d = Dimensions::from(CylinderDimensions::new(1.5, 3.0));

    let value = serde_json::to_value(d).unwrap();

    let expected = json!({ "shape": "cylinder", "radius": 1.5, "height": 3.0 });
    assert_eq!(value, expected);
    assert_eq!(serde_json::from_value::<Dimensions>(value).unwrap(), d);
}

#[test]
fn report_serializes_in_evaluation_order() {
    let report = compare_shapes(1000.0).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    let labels: Vec<_> = value["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["variant"].as_str().unwrap().to_owned())
        .collect();

    assert_eq!(value["volume"], json!(1000.0));
    assert_eq!(
        labels,
        ["cylinder_closed", "cylinder_open", "box_open", "box_closed"]
    );
    assert!(value["entries"][0]["verified"].is_null());
}

#[test]
fn record_exposes_its_fields() {
    let record = RectangularBoxOptimizer::new(27.0, false)
        .unwrap()
        .analytical_solution()
        .unwrap();

    let value = serde_json::to_value(record).unwrap();

    assert!(value["dimensions"]["length"].is_number());
    assert!(value["surface_area"].is_number());
    assert!(value["volume_achieved"].is_number());
}
