//! Benchmarks for Hampel detection and correction across window sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hampel_ecg::{FilterParameters, HampelFilter, OutlierCorrector, OutlierDetector};

#[cfg(feature = "parallel")]
use hampel_ecg::ParallelEngine;

/// ECG-like test signal with a spike every 250 samples
fn generate_test_signal(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| {
            let base = (i as f64 * 0.05).sin() + 0.1 * (i as f64 * 1.7).cos();
            if i % 250 == 125 {
                base + 8.0
            } else {
                base
            }
        })
        .collect()
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("hampel_detect");

    let sizes = vec![1_000, 10_000, 100_000];
    let windows = vec![5, 21, 101];

    for &size in &sizes {
        let signal = generate_test_signal(size);

        for &window in &windows {
            let params = FilterParameters::new(window, 3.0).unwrap();
            let filter = HampelFilter::new(params).unwrap();
            group.bench_with_input(
                BenchmarkId::new("sequential", format!("{size}_samples_w{window}")),
                &signal,
                |b, signal| b.iter(|| black_box(filter.detect(signal).unwrap())),
            );

            #[cfg(feature = "parallel")]
            {
                let filter = HampelFilter::new(params)
                    .unwrap()
                    .with_engine(ParallelEngine::new());
                group.bench_with_input(
                    BenchmarkId::new("parallel", format!("{size}_samples_w{window}")),
                    &signal,
                    |b, signal| b.iter(|| black_box(filter.detect(signal).unwrap())),
                );
            }
        }
    }

    group.finish();
}

fn bench_correct(c: &mut Criterion) {
    let mut group = c.benchmark_group("hampel_correct");

    for &size in &[10_000, 100_000] {
        let signal = generate_test_signal(size);
        let filter = HampelFilter::new(FilterParameters::default()).unwrap();
        let outliers = filter.detect(&signal).unwrap();

        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{size}_samples")),
            &(&signal, &outliers),
            |b, (signal, outliers)| b.iter(|| black_box(filter.correct(signal, outliers).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_detect, bench_correct);
criterion_main!(benches);
