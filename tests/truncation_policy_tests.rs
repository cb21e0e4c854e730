use vizor_chart::core::truncation::{self, CARDINALITY_LIMIT};
use vizor_chart::core::Record;

fn dataset(len: usize) -> Vec<Record> {
    (0..len)
        .map(|i| {
            Record::new()
                .with("city", format!("city-{i}"))
                .with("population", i as f64)
        })
        .collect()
}

#[test]
fn disabled_truncation_is_identity() {
    let records = dataset(5_000);
    let bounded = truncation::apply(&records, false);

    assert_eq!(bounded.len(), 5_000);
    assert!(std::ptr::eq(bounded, records.as_slice()));
}

#[test]
fn small_dataset_passes_through_even_when_enabled() {
    let records = dataset(CARDINALITY_LIMIT);
    let bounded = truncation::apply(&records, true);

    assert!(std::ptr::eq(bounded, records.as_slice()));
}

#[test]
fn large_dataset_is_cut_to_the_limit_in_order() {
    let records = dataset(CARDINALITY_LIMIT + 1);
    let bounded = truncation::apply(&records, true);

    assert_eq!(bounded.len(), CARDINALITY_LIMIT);
    assert_eq!(bounded, &records[..CARDINALITY_LIMIT]);
    assert_eq!(
        bounded[CARDINALITY_LIMIT - 1]
            .get("city")
            .map(ToString::to_string),
        Some(format!("city-{}", CARDINALITY_LIMIT - 1))
    );
}

#[test]
fn apply_does_not_mutate_the_input() {
    let records = dataset(300);
    let before = records.clone();

    let _ = truncation::apply(&records, true);

    assert_eq!(records, before);
}

#[test]
fn is_bounded_reports_when_the_cap_engages() {
    assert!(!truncation::is_bounded(50, true));
    assert!(!truncation::is_bounded(CARDINALITY_LIMIT, true));
    assert!(truncation::is_bounded(CARDINALITY_LIMIT + 1, true));
    assert!(!truncation::is_bounded(10_000, false));
}

#[test]
fn empty_dataset_stays_empty() {
    let records = dataset(0);
    assert!(truncation::apply(&records, true).is_empty());
    assert!(truncation::apply(&records, false).is_empty());
}
