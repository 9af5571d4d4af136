use block_spans::{generate_random_heights, MonotoneStackScan, PerStartScan, SpanSolver};
use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

fn bench(c: &mut Criterion) {
    let small = generate_random_heights(3000, 4, 213456);
    let large: Vec<u32> = (0..1000000).map(|_| rand::random::<u32>() % 4).collect();

    let mut g = c.benchmark_group("g");
    g.bench_function("per_start_3k", |b| {
        b.iter(|| PerStartScan.max_span(&small));
    });
    g.bench_function("stack_3k", |b| {
        b.iter(|| MonotoneStackScan.max_span(&small));
    });
    g.bench_function("stack_1m", |b| {
        b.iter(|| MonotoneStackScan.max_span(&large));
    });
}

criterion_group!(
    name = group;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_millis(2000))
        .sample_size(10);
    targets = bench
);

criterion_main!(group);
