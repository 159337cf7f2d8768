//! Estimator and intent classification benchmarks.
//!
//! Run with: `cargo bench --package railbook-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use railbook_bench::{SAMPLE_MESSAGES, evaluation_date, sample_requests};
use railbook_lib::{WaitlistEstimator, classify};
use std::hint::black_box;

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = WaitlistEstimator::default();
    let today = evaluation_date();

    let mut group = c.benchmark_group("estimate");
    for size in [100usize, 10_000] {
        let requests = sample_requests(size);
        group.throughput(Throughput::Elements(requests.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &requests, |b, requests| {
            b.iter(|| {
                for request in requests {
                    black_box(estimator.estimate(black_box(request), today));
                }
            });
        });
    }
    group.finish();
}

fn classify_benchmark(c: &mut Criterion) {
    let today = evaluation_date();

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(SAMPLE_MESSAGES.len() as u64));
    group.bench_function("messages", |b| {
        b.iter(|| {
            for message in SAMPLE_MESSAGES {
                black_box(classify(black_box(message), today));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, estimate_benchmark, classify_benchmark);
criterion_main!(benches);
