//! Trial counter benchmarks.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use emergence::domains::counting::TrialCounter;
use emergence::engine::rng::SimRng;

fn bench_trial_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial_counter");
    group.sample_size(100);

    for trials in [100usize, 1000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("count", trials),
            &trials,
            |b, &trials| {
                let counter = TrialCounter::new(3.0e-3, trials).unwrap();
                let mut rng = SimRng::new(42);
                b.iter(|| black_box(counter.count(&mut rng)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_trial_counter);
criterion_main!(benches);
