use bench_plot::parsers::{parse_file, Parser, ProgressLogParser};
use bench_plot::test_helpers::dir_with_log;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn progress_log(num_samples: usize) -> String {
    (0..num_samples)
        .map(|i| {
            format!(
                "  ... #{} @ {:.3} ms: miss_ratio = 0.25000, load_admit = 0.900, cache_tp = 1024.000, core_tp = 512.000\n",
                i * 10,
                500.0 * i as f64
            )
        })
        .collect()
}

fn parse_progress_log(c: &mut Criterion) {
    let parser = ProgressLogParser::new().expect("valid pattern");

    let mut group = c.benchmark_group("parse_progress_log");
    for num_samples in [1, 100, 10_000].into_iter() {
        let input = progress_log(num_samples);
        group.bench_with_input(
            BenchmarkId::new("parse", num_samples),
            &input,
            |b, input| {
                b.iter(|| parser.parse(black_box(input)).expect("parses"));
            },
        );
    }

    group.finish();
}

fn parse_progress_file(c: &mut Criterion) {
    let (_temp_dir, log) = dir_with_log("bench-int100-read50-hit80-LRU.txt", &progress_log(1_000));

    c.bench_function("parse_file", |b| {
        b.iter(|| parse_file(black_box(&log)).expect("parses"));
    });
}

criterion_group!(benches, parse_progress_log, parse_progress_file);
criterion_main!(benches);
