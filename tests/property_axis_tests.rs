use proptest::prelude::*;
use vizor_chart::core::{FieldSelector, Record, derive_axes};

fn dataset(values: &[f64]) -> Vec<Record> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Record::new()
                .with("label", format!("row-{i}"))
                .with("amount", *value)
        })
        .collect()
}

proptest! {
    #[test]
    fn value_bounds_track_the_data_extremes(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)
    ) {
        let records = dataset(&values);
        let selector = FieldSelector::new("label", "amount");

        let axes = derive_axes(&records, &selector).expect("axis derivation");

        let expected_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let expected_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(axes.value.min, expected_min);
        prop_assert_eq!(axes.value.max, expected_max);
        prop_assert!(axes.value.min <= axes.value.max);
    }

    #[test]
    fn one_tick_per_record_when_categories_are_unique(
        len in 1usize..200
    ) {
        let values: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let records = dataset(&values);
        let selector = FieldSelector::new("label", "amount");

        let axes = derive_axes(&records, &selector).expect("axis derivation");

        prop_assert_eq!(axes.category.ticks.len(), len);
    }

    #[test]
    fn derivation_is_deterministic(
        values in prop::collection::vec(-1.0e3f64..1.0e3, 1..50)
    ) {
        let records = dataset(&values);
        let selector = FieldSelector::new("label", "amount");

        let first = derive_axes(&records, &selector).expect("first");
        let second = derive_axes(&records, &selector).expect("second");
        prop_assert_eq!(first, second);
    }
}
