use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use vizor_chart::core::{FieldSelector, Record, Viewport, derive_axes, truncation};
use vizor_chart::engine::{ChartEngine, ChartSpec, ContainerId, FrameEngine};

fn dataset(len: usize) -> Vec<Record> {
    (0..len)
        .map(|i| {
            Record::new()
                .with("city", format!("city-{i}"))
                .with("population", 1_000.0 + (i % 977) as f64)
        })
        .collect()
}

fn bench_truncation_10k(c: &mut Criterion) {
    let records = dataset(10_000);

    c.bench_function("truncation_apply_10k", |b| {
        b.iter(|| {
            let bounded = truncation::apply(black_box(&records), black_box(true));
            black_box(bounded.len())
        })
    });
}

fn bench_axis_derivation_10k(c: &mut Criterion) {
    let records = dataset(10_000);
    let selector = FieldSelector::new("city", "population");

    c.bench_function("derive_axes_10k", |b| {
        b.iter(|| {
            derive_axes(black_box(&records), black_box(&selector)).expect("axis derivation")
        })
    });
}

fn bench_frame_creation_1k(c: &mut Criterion) {
    let records = dataset(1_000);
    let selector = FieldSelector::new("city", "population");
    let axes = derive_axes(&records, &selector).expect("axis derivation");
    let spec = ChartSpec::new(
        ContainerId::new("bar-chart"),
        Viewport::new(1920, 1080),
        records,
        selector,
        axes,
    );
    let mut engine = FrameEngine::default();

    c.bench_function("frame_engine_create_1k", |b| {
        b.iter(|| engine.create(black_box(&spec)).expect("create"))
    });
}

criterion_group!(
    benches,
    bench_truncation_10k,
    bench_axis_derivation_10k,
    bench_frame_creation_1k
);
criterion_main!(benches);
