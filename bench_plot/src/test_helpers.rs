//! Shared test helpers for bench-plot
//!
//! Writes benchmark logs in the layout produced by the throughput benchmark.

use std::fs;
use std::path::{Path, PathBuf};

/// Three measured-stage samples surrounded by the benchmark's other output.
pub const PROGRESS_LINES: &str = "\
Experiment parameters:

  Intensity: 100 4KiB-Reqs/s

Begin stabilizing stage... (0 - 15 secs)

  *** #10 @ 501.000 ms: miss_ratio = 0.90000, load_admit = 1.000, cache_tp = 100.000, core_tp = 200.000

Start the experiment... (30 - 60 secs)

  ... #42 @ 123.500 ms: miss_ratio = 0.25000, load_admit = 0.900, cache_tp = 1024.000, core_tp = 512.000
  ... #84 @ 624.000 ms: miss_ratio = 0.20000, load_admit = 0.800, cache_tp = 2048.000, core_tp = 1024.000
  ... #126 @ 1125.000 ms: miss_ratio = 0.15000, load_admit = 0.700, cache_tp = 3072.000, core_tp = 1024.000
";

/// Writes `content` to `dir/name` and returns the full path.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_log(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// Creates a scratch directory holding a single log.
///
/// # Panics
/// Panics if the directory or file cannot be created.
pub fn dir_with_log(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("Failed to create temp dir: {}", e));
    let path = write_log(dir.path(), name, content);
    (dir, path)
}
