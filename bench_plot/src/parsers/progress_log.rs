use crate::parsers::types::{ParseError, Parser, RunSeries, Sample};
use crate::units::kib_to_mib;
use anyhow::{Context, Result};
use log::{debug, trace};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Prefix of the progress lines written during the measured stage.
///
/// Stabilizing and cool-down stages use other prefixes and are ignored.
pub const PROGRESS_MARKER: &str = "...";

/// Sub-markers every progress line must contain, in layout order.
const FIELD_MARKERS: [&str; 7] = [
    "#",
    " @ ",
    " ms",
    "miss_ratio = ",
    "load_admit = ",
    "cache_tp = ",
    "core_tp = ",
];

const LINE_PATTERN: &str = concat!(
    r"#(?P<num_reqs>.*?) @ (?P<time_ms>.*?) ms",
    r".*?miss_ratio = (?P<miss_ratio>.*?)",
    r", load_admit = (?P<load_admit>.*?)",
    r", cache_tp = (?P<cache_tp>.*?)",
    r", core_tp = (?P<core_tp>.*)",
);

/// Parser for the throughput benchmark's progress log
///
/// A progress line looks like
/// `... #42 @ 123.500 ms: miss_ratio = 0.25000, load_admit = 0.900, cache_tp = 1024.000, core_tp = 512.000`
/// with throughputs in KiB/s.
pub struct ProgressLogParser {
    line_pattern: Regex,
}

impl ProgressLogParser {
    pub fn new() -> Result<ProgressLogParser, regex::Error> {
        Ok(ProgressLogParser {
            line_pattern: Regex::new(LINE_PATTERN)?,
        })
    }

    /// Returns whether `line` carries a sample and must therefore parse.
    pub fn is_progress_line(line: &str) -> bool {
        line.trim().starts_with(PROGRESS_MARKER)
    }

    fn parse_line(&self, line: &str, line_num: usize) -> Result<Sample, ParseError> {
        let caps = match self.line_pattern.captures(line) {
            Some(caps) => caps,
            None => return Err(diagnose_mismatch(line, line_num)),
        };

        Ok(Sample {
            time_ms: field(&caps, "time_ms", line_num)?,
            num_reqs: field(&caps, "num_reqs", line_num)?,
            miss_ratio: field(&caps, "miss_ratio", line_num)?,
            load_admit: field(&caps, "load_admit", line_num)?,
            cache_tp: kib_to_mib(field(&caps, "cache_tp", line_num)?),
            core_tp: kib_to_mib(field(&caps, "core_tp", line_num)?),
        })
    }
}

impl Parser for ProgressLogParser {
    fn parse(&self, input: &str) -> Result<RunSeries, ParseError> {
        let mut series = RunSeries::new();

        for (line_num, line) in input.lines().enumerate() {
            if !Self::is_progress_line(line) {
                continue;
            }

            let sample = self.parse_line(line.trim(), line_num + 1)?;
            trace!("line {}: {:?}", line_num + 1, sample);
            series.push(sample);
        }

        Ok(series)
    }
}

fn field<T: FromStr>(caps: &Captures, name: &'static str, line: usize) -> Result<T, ParseError> {
    let raw = caps.name(name).map(|m| m.as_str()).unwrap_or_default();
    raw.trim().parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field: name,
        value: raw.to_string(),
    })
}

fn diagnose_mismatch(line: &str, line_num: usize) -> ParseError {
    match FIELD_MARKERS
        .iter()
        .copied()
        .find(|marker| !line.contains(marker))
    {
        Some(marker) => ParseError::MissingMarker {
            line: line_num,
            marker,
        },
        None => ParseError::MalformedLine { line: line_num },
    }
}

/// Read a progress log from disk and parse all of its samples.
pub fn parse_file(path: &Path) -> Result<RunSeries> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file {}", path.display()))?;

    let parser = ProgressLogParser::new().context("Invalid progress line pattern")?;
    let series = parser
        .parse(&input)
        .with_context(|| format!("Failed to parse log file {}", path.display()))?;

    debug!("Parsed {} samples from {}", series.len(), path.display());
    Ok(series)
}
