#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tiltgrid::animation::EffectSmoother;
use tiltgrid::effects::EffectMapper;
use tiltgrid::grid::{RowApplier, RowSurface, RowTransform};
use tiltgrid::options::{GridOptions, SmoothingOptions};
use web_time::Instant;

struct NullRow;

impl RowSurface for NullRow {
    fn apply(&mut self, transform: &RowTransform) {
        let _ = black_box(transform);
    }
}

fn mapper_benchmark(c: &mut Criterion) {
    let mapper = EffectMapper::default();
    let _ = c.bench_function("map_pointer_to_effects", |b| {
        b.iter(|| black_box(mapper.map(black_box(731.0), black_box(1920.0))))
    });
}

fn smoother_benchmark(c: &mut Criterion) {
    let mapper = EffectMapper::default();
    let mut smoother = EffectSmoother::new(&SmoothingOptions::default());
    let now = Instant::now();
    smoother.set_target(mapper.map(1900.0, 1920.0), now);

    let _ = c.bench_function("smoother_tick", |b| {
        b.iter(|| black_box(smoother.tick(now)))
    });
}

fn applier_benchmark(c: &mut Criterion) {
    let mapper = EffectMapper::default();
    let values = mapper.map(1900.0, 1920.0);
    let mut group = c.benchmark_group("row_fanout");

    for count in [3usize, 7, 15, 31] {
        let mut applier = RowApplier::new(&GridOptions::default());
        let mut rows: Vec<NullRow> = (0..count).map(|_| NullRow).collect();

        let _ = group.bench_function(format!("{count}_rows"), |b| {
            b.iter(|| {
                // Reset so the change-threshold skip never short-circuits
                applier.reset();
                black_box(applier.apply(&values, &mut rows))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    mapper_benchmark,
    smoother_benchmark,
    applier_benchmark
);
criterion_main!(benches);
