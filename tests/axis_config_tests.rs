use approx::assert_relative_eq;
use vizor_chart::core::{FieldSelector, Record, derive_axes};
use vizor_chart::error::ChartError;

fn record(category: &str, value: f64) -> Record {
    Record::new().with("c", category).with("v", value)
}

fn selector() -> FieldSelector {
    FieldSelector::new("c", "v")
}

#[test]
fn value_axis_minimum_is_the_data_minimum_not_zero() {
    let records = vec![record("a", 5.0), record("b", 2.0), record("c", 9.0)];

    let axes = derive_axes(&records, &selector()).expect("axis derivation");

    assert_relative_eq!(axes.value.min, 2.0);
    assert_relative_eq!(axes.value.max, 9.0);
    assert_eq!(axes.value.title, "v");
}

#[test]
fn negative_minimum_is_preserved() {
    let records = vec![record("a", -3.5), record("b", 4.0)];

    let axes = derive_axes(&records, &selector()).expect("axis derivation");

    assert_relative_eq!(axes.value.min, -3.5);
}

#[test]
fn category_ticks_are_distinct_in_first_appearance_order() {
    let records = vec![
        record("berlin", 1.0),
        record("paris", 2.0),
        record("berlin", 3.0),
        record("madrid", 4.0),
        record("paris", 5.0),
    ];

    let axes = derive_axes(&records, &selector()).expect("axis derivation");

    assert_eq!(axes.category.ticks, ["berlin", "paris", "madrid"]);
    assert_eq!(axes.category.title, "c");
}

#[test]
fn derivation_is_idempotent() {
    let records = vec![record("a", 5.0), record("b", 2.0), record("c", 9.0)];

    let first = derive_axes(&records, &selector()).expect("first derivation");
    let second = derive_axes(&records, &selector()).expect("second derivation");

    assert_eq!(first, second);
}

#[test]
fn presentation_constants_match_the_component_contract() {
    let records = vec![record("a", 1.0)];

    let axes = derive_axes(&records, &selector()).expect("axis derivation");

    assert_relative_eq!(axes.category.label_rotation_deg, 270.0);
    assert_relative_eq!(axes.category.min_grid_distance_px, 30.0);
    assert_relative_eq!(axes.category.min_height_px, 110.0);
    assert_relative_eq!(axes.value.min_width_px, 50.0);
    assert!(!axes.category.axis_tooltip_enabled);
}

#[test]
fn empty_dataset_is_rejected() {
    let result = derive_axes(&[], &selector());
    assert!(matches!(result, Err(ChartError::EmptyDataset)));
}

#[test]
fn missing_category_field_is_reported_with_the_offending_record() {
    let records = vec![record("a", 1.0), Record::new().with("v", 2.0)];

    let result = derive_axes(&records, &selector());

    match result {
        Err(ChartError::MissingField {
            field,
            record_index,
        }) => {
            assert_eq!(field, "c");
            assert_eq!(record_index, 1);
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn missing_value_field_is_reported() {
    let records = vec![Record::new().with("c", "a")];

    let result = derive_axes(&records, &selector());

    assert!(matches!(
        result,
        Err(ChartError::MissingField { field, record_index: 0 }) if field == "v"
    ));
}

#[test]
fn string_value_cell_is_rejected_as_non_numeric() {
    let records = vec![record("a", 1.0), Record::new().with("c", "b").with("v", "oops")];

    let result = derive_axes(&records, &selector());

    assert!(matches!(
        result,
        Err(ChartError::NonNumericValue { field, record_index: 1 }) if field == "v"
    ));
}

#[test]
fn non_finite_value_is_rejected() {
    let records = vec![record("a", f64::NAN)];

    assert!(matches!(
        derive_axes(&records, &selector()),
        Err(ChartError::NonNumericValue { record_index: 0, .. })
    ));
}

#[test]
fn numeric_categories_tick_by_display_value() {
    let records = vec![
        Record::new().with("c", 2024.0).with("v", 1.0),
        Record::new().with("c", 2025.0).with("v", 2.0),
    ];

    let axes = derive_axes(&records, &selector()).expect("axis derivation");

    assert_eq!(axes.category.ticks, ["2024", "2025"]);
}
