//! Compare sequential vs parallel problem-set runs.
//!
//! Run with: `cargo bench --bench batch_parallel`
//! Or quick comparison: `cargo run --release --bin benchmark_parallel_speedup`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prize_path::data::{generate_problem_set, GenerateOptions};
use prize_path::harness::{run_problem_set, RunOptions};

fn bench_batch_sequential_vs_parallel(c: &mut Criterion) {
    let set = generate_problem_set(&GenerateOptions {
        count: 200,
        min_side: 32,
        max_side: 96,
        max_prize: 1000,
        seed: 42,
    });

    let mut group = c.benchmark_group("batch");
    group.sample_size(20);
    group.measurement_time(std::time::Duration::from_secs(10));

    let sequential = RunOptions {
        sequential: true,
        ..RunOptions::default()
    };
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(run_problem_set(&set, &sequential)))
    });

    let parallel = RunOptions::default();
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(run_problem_set(&set, &parallel)))
    });

    group.finish();
}

criterion_group!(benches, bench_batch_sequential_vs_parallel);
criterion_main!(benches);
