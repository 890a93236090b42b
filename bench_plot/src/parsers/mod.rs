//! Parsers for benchmark progress logs
//!
//! This module turns the text written by the cache throughput benchmark into
//! the column-oriented `RunSeries` consumed by the reporters.

pub mod progress_log;
pub mod types;

// Re-export commonly used types
pub use progress_log::{parse_file, ProgressLogParser};
pub use types::{ParseError, Parser, RunSeries, Sample};
