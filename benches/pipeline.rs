//! Benchmarks for the iconset pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use iconset::export::resample;
use iconset::{compose, IconConfig};

// -- Composition benchmarks --

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    let full = IconConfig::default();
    group.bench_function("compose_1024", |b| b.iter(|| compose(black_box(&full))));

    let small = IconConfig {
        size: 256,
        margin: 20,
        corner_radius: 50,
        circle_radius: 20,
        branch_length: 45,
        branch_width: 10,
        ..Default::default()
    };
    group.bench_function("compose_256", |b| b.iter(|| compose(black_box(&small))));

    group.finish();
}

// -- Resampling benchmarks --

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    let canvas = compose(&IconConfig::default());

    for size in [16u32, 128, 512] {
        group.bench_function(format!("downscale_to_{}", size), |b| {
            b.iter(|| resample(black_box(&canvas), size))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose, bench_resample);
criterion_main!(benches);
