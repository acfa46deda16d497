use criterion::{criterion_group, criterion_main, Criterion};
use pvalue_dots::config::SimulationParams;
use pvalue_dots::histogram::Histogram;
use pvalue_dots::layout::ViewScale;
use std::hint::black_box;

fn bench_histogram(c: &mut Criterion) {
    let reference = SimulationParams::default();
    c.bench_function("histogram_reference", |b| {
        b.iter(|| Histogram::generate(black_box(&reference)).unwrap())
    });

    let large = SimulationParams {
        guessers: 5_000,
        ..Default::default()
    };
    let hist = Histogram::generate(&large).unwrap();
    c.bench_function("layout_5000_full", |b| {
        b.iter(|| black_box(&hist).view(ViewScale::Full))
    });
}

criterion_group!(benches, bench_histogram);
criterion_main!(benches);
