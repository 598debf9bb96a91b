//! Benchmarks for HealthBot evaluation and dataset statistics
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use healthbot::bmi::classify;
use healthbot::dataset::{Dataset, DatasetConfig, HealthMetric};
use healthbot::stats;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let inputs: Vec<(f64, f64)> = (0..1000)
        .map(|i| (1.0 + (i % 150) as f64 * 0.01, 30.0 + (i % 170) as f64))
        .collect();

    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("classify_1000", |b| {
        b.iter(|| {
            for (h, w) in &inputs {
                black_box(classify(black_box(*h), black_box(*w)));
            }
        })
    });

    group.finish();
}

fn bench_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset");

    for size in [50, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("generate_{}", size), |b| {
            b.iter(|| Dataset::generate(black_box(DatasetConfig::new(42, size))))
        });

        let dataset = Dataset::generate(DatasetConfig::new(42, size));

        group.bench_function(format!("correlation_matrix_{}", size), |b| {
            b.iter(|| stats::correlation_matrix(black_box(&dataset)))
        });

        let bmi = dataset.column(HealthMetric::Bmi);
        group.bench_function(format!("box_plot_{}", size), |b| {
            b.iter(|| stats::box_plot(black_box(&bmi)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_dataset);
criterion_main!(benches);
