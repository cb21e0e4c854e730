use vizor_chart::core::{FieldSelector, Record};
use vizor_chart::engine::{ContainerId, NullEngine};
use vizor_chart::view::{ChartStatus, ChartView};

fn dataset(len: usize) -> Vec<Record> {
    (0..len)
        .map(|i| {
            Record::new()
                .with("city", format!("city-{i}"))
                .with("population", i as f64)
        })
        .collect()
}

fn selector() -> FieldSelector {
    FieldSelector::new("city", "population")
}

#[test]
fn missing_field_degrades_to_unavailable_instead_of_crashing() {
    let engine = NullEngine::default();
    let probe = engine.probe();
    let mut view = ChartView::new(engine, ContainerId::new("bar-chart"));

    view.mount(dataset(5), FieldSelector::new("city", "no-such-field"));

    match view.status() {
        ChartStatus::Unavailable { reason } => {
            assert!(reason.contains("no-such-field"));
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
    assert_eq!(probe.created(), 0);

    // Self-heals on the next input change.
    view.set_value_field("population").expect("update");
    assert_eq!(view.status(), &ChartStatus::Rendered { records_shown: 5 });
}

#[test]
fn partial_mount_failure_releases_everything_it_acquired() {
    let mut engine = NullEngine::default();
    let probe = engine.probe();
    engine.fail_next_create_after(2);
    let mut view = ChartView::new(engine, ContainerId::new("bar-chart"));

    view.mount(dataset(5), selector());

    assert!(matches!(view.status(), ChartStatus::Unavailable { .. }));
    assert!(view.chart().is_none());
    assert_eq!(probe.created(), 0);
    assert_eq!(probe.affordances_attached(), probe.affordances_released());
}

#[test]
fn failed_mount_recovers_on_the_next_update() {
    let mut engine = NullEngine::default();
    let probe = engine.probe();
    engine.fail_next_create_after(0);
    let mut view = ChartView::new(engine, ContainerId::new("bar-chart"));

    view.mount(dataset(5), selector());
    assert!(matches!(view.status(), ChartStatus::Unavailable { .. }));

    view.set_dataset(dataset(6)).expect("update while mounted");

    assert_eq!(view.status(), &ChartStatus::Rendered { records_shown: 6 });
    assert_eq!(probe.live(), 1);
}

#[test]
fn disposal_failure_does_not_block_the_next_mount() {
    let mut engine = NullEngine::default();
    let probe = engine.probe();
    engine.fail_next_dispose();
    let mut view = ChartView::new(engine, ContainerId::new("bar-chart"));

    view.mount(dataset(5), selector());
    // The rebuild disposes the failing chart, logs, and proceeds.
    view.set_dataset(dataset(7)).expect("update while mounted");

    assert_eq!(view.status(), &ChartStatus::Rendered { records_shown: 7 });
    assert_eq!(probe.created(), 2);
    assert_eq!(probe.disposed(), 1);
    assert_eq!(probe.live(), 1);
}

#[test]
fn dataset_shrinking_to_empty_degrades_to_no_data() {
    let engine = NullEngine::default();
    let probe = engine.probe();
    let mut view = ChartView::new(engine, ContainerId::new("bar-chart"));

    view.mount(dataset(5), selector());
    view.set_dataset(Vec::new()).expect("update while mounted");

    assert_eq!(view.status(), &ChartStatus::NoData);
    assert_eq!(probe.live(), 0);
}

#[test]
fn injected_failure_is_one_shot() {
    let mut engine = NullEngine::default();
    engine.fail_next_create_after(1);
    let probe = engine.probe();
    let mut view = ChartView::new(engine, ContainerId::new("bar-chart"));

    view.mount(dataset(5), selector());
    assert!(matches!(view.status(), ChartStatus::Unavailable { .. }));

    view.set_dataset(dataset(5)).expect("update");
    assert_eq!(view.status(), &ChartStatus::Rendered { records_shown: 5 });
    assert_eq!(probe.live(), 1);
}
