//! Centralized default values for bench-plot configuration.
//!
//! These are the fallback values used when neither the CLI nor a
//! configuration file provides a setting.

// ============================================================================
// Input Defaults
// ============================================================================

/// Directory scanned for benchmark logs when none is configured.
pub const DEFAULT_INPUT_DIRECTORY: &str = "result";

/// File name prefix of benchmark logs.
pub const LOG_FILE_PREFIX: &str = "bench-";

/// File name suffix of benchmark logs.
pub const LOG_FILE_SUFFIX: &str = ".txt";

// ============================================================================
// Chart Defaults
// ============================================================================

/// Default image width in pixels.
pub const DEFAULT_CHART_WIDTH: u32 = 1280;

/// Default image height in pixels.
///
/// The figure is split into five equal rows: one each for the request count,
/// miss ratio and load admission panels, two for the throughput panel.
pub const DEFAULT_CHART_HEIGHT: u32 = 960;

/// Smallest configurable image width in pixels.
pub const MIN_CHART_WIDTH: u32 = 640;

/// Smallest configurable image height in pixels.
///
/// Below this the title and the panel captions leave no room for the plots.
pub const MIN_CHART_HEIGHT: u32 = 480;

// ============================================================================
// Units
// ============================================================================

/// Divisor converting the logged KiB/s throughput into MiB/s.
pub const KIB_PER_MIB: f64 = 1024.0;
