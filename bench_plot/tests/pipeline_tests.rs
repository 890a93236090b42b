use bench_plot::batch::{discover_logs, process_directory, process_log};
use bench_plot::config::ChartSettings;
use bench_plot::parsers::{parse_file, ParseError};
use bench_plot::reporting::{CsvReporter, PngReporter};
use bench_plot::run_name::RunParameters;
use std::fs;
use tempfile::TempDir;

const EXAMPLE_NAME: &str = "bench-int100-read50-hit80-LRU.txt";
const EXAMPLE_LINE: &str =
    "...#42 @ 123.5 ms ... miss_ratio = 0.25, load_admit = 0.9, cache_tp = 1024, core_tp = 512\n";

fn png_reporter() -> PngReporter {
    PngReporter::new(ChartSettings {
        width: 800,
        height: 600,
        ..ChartSettings::default()
    })
}

#[test]
fn test_example_run_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join(EXAMPLE_NAME);
    fs::write(&log, EXAMPLE_LINE).unwrap();

    let series = parse_file(&log).unwrap();
    assert_eq!(series.num_reqs(), &[42]);
    assert_eq!(series.times(), &[123.5]);
    assert_eq!(series.miss_ratios(), &[0.25]);
    assert_eq!(series.load_admits(), &[0.9]);
    assert_eq!(series.cache_tps(), &[1.0]);
    assert_eq!(series.core_tps(), &[0.5]);

    let params = RunParameters::from_path(&log).unwrap();
    assert_eq!(params.intensity, "100");
    assert_eq!(params.read_percentage, "50");
    assert_eq!(params.hit_ratio, "80");
    assert_eq!(params.mode, "LRU");

    let output = process_log(&log, &png_reporter()).unwrap();
    assert_eq!(output, temp_dir.path().join("bench-int100-read50-hit80-LRU.png"));
    assert!(fs::metadata(&output).unwrap().len() > 0);
}

#[test]
fn test_equal_length_sequences_for_long_log() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("bench-int500-read100-hit50-mfwa.txt");

    let mut content = String::from("Start the experiment... (30 - 60 secs)\n\n");
    for i in 0..120u32 {
        content.push_str(&format!(
            "  ... #{} @ {:.3} ms: miss_ratio = {:.5}, load_admit = {:.3}, cache_tp = {:.3}, core_tp = {:.3}\n",
            i * 50,
            500.0 * f64::from(i),
            0.5,
            0.75,
            1024.0 * f64::from(i % 7),
            512.0
        ));
        if i % 10 == 0 {
            content.push_str("some unrelated diagnostic line\n");
        }
    }
    fs::write(&log, &content).unwrap();

    let series = parse_file(&log).unwrap();
    let lengths = [
        series.times().len(),
        series.num_reqs().len(),
        series.miss_ratios().len(),
        series.load_admits().len(),
        series.cache_tps().len(),
        series.core_tps().len(),
    ];
    assert!(lengths.iter().all(|l| *l == 120));
    assert!(series.times().windows(2).all(|w| w[0] < w[1]));

    assert_eq!(parse_file(&log).unwrap(), series);

    process_log(&log, &png_reporter()).unwrap();
    assert!(temp_dir
        .path()
        .join("bench-int500-read100-hit50-mfwa.png")
        .is_file());
}

#[test]
fn test_log_without_samples_still_renders() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("bench-int1-read1-hit1-none.txt");
    fs::write(&log, "Experiment parameters:\n\n  Intensity: 1 4KiB-Reqs/s\n").unwrap();

    assert!(parse_file(&log).unwrap().is_empty());
    let output = process_log(&log, &png_reporter()).unwrap();
    assert!(output.is_file());
}

#[test]
fn test_parse_error_is_reachable_from_anyhow_chain() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("bench-int1-read1-hit1-bad.txt");
    fs::write(
        &log,
        "... #x @ 1.0 ms: miss_ratio = 0.1, load_admit = 0.2, cache_tp = 3, core_tp = 4\n",
    )
    .unwrap();

    let err = parse_file(&log).unwrap_err();
    let parse_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ParseError>())
        .cloned();
    assert_eq!(
        parse_error,
        Some(ParseError::InvalidNumber {
            line: 1,
            field: "num_reqs",
            value: "x".to_string()
        })
    );
}

#[test]
fn test_directory_with_mixed_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(EXAMPLE_NAME), EXAMPLE_LINE).unwrap();
    fs::write(temp_dir.path().join("bench-int100-read50-hit80-LRU.png"), b"old").unwrap();
    fs::write(temp_dir.path().join("summary.txt"), EXAMPLE_LINE).unwrap();

    assert_eq!(discover_logs(temp_dir.path()).unwrap().len(), 1);

    let outputs = process_directory(temp_dir.path(), &CsvReporter).unwrap();
    assert_eq!(
        outputs,
        vec![temp_dir.path().join("bench-int100-read50-hit80-LRU.csv")]
    );
}
