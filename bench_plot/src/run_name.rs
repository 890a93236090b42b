//! Run parameters encoded in benchmark log file names
//!
//! A log named `bench-int100-read50-hit80-LRU.txt` describes a run with
//! intensity 100, 50% reads, an 80% hit ratio and the `LRU` mode. The values
//! are kept as the exact text found in the name so that the artifact name
//! (`bench-int100-read50-hit80-LRU.png`) reproduces it byte for byte.
//!
//! Decoding searches for the first occurrence of each marker and slices
//! between them. Names that do not follow the layout produce odd substrings
//! instead of errors: a log called `bench-int100-read50-LRU.txt` decodes to a
//! hit ratio of `ch-int100-read50`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::defaults::{LOG_FILE_PREFIX, LOG_FILE_SUFFIX};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    /// Submitted 4 KiB requests per second
    pub intensity: String,
    pub read_percentage: String,
    pub hit_ratio: String,
    /// Admission mode of the cache
    pub mode: String,
}

impl RunParameters {
    /// Decode the parameters from a log file name (without directory).
    pub fn from_file_name(name: &str) -> RunParameters {
        let int_pos = find(name, "-int");
        let read_pos = find(name, "-read");
        let hit_pos = find(name, "-hit");
        let last_dash = rfind(name, "-");
        let txt_pos = find(name, LOG_FILE_SUFFIX);

        RunParameters {
            intensity: slice(name, int_pos + 4, read_pos),
            read_percentage: slice(name, read_pos + 5, hit_pos),
            hit_ratio: slice(name, hit_pos + 4, last_dash),
            mode: slice(name, last_dash + 1, txt_pos),
        }
    }

    /// Decode the parameters from the file name component of `path`.
    ///
    /// Returns `None` when the path has no file name or the name is not valid
    /// UTF-8, as no artifact name could reproduce it.
    pub fn from_path(path: &Path) -> Option<RunParameters> {
        let name = path.file_name()?.to_str()?;
        Some(RunParameters::from_file_name(name))
    }

    /// Common stem of every file belonging to this run.
    pub fn stem(&self) -> String {
        format!(
            "{}int{}-read{}-hit{}-{}",
            LOG_FILE_PREFIX, self.intensity, self.read_percentage, self.hit_ratio, self.mode
        )
    }

    /// Artifact file name with the given extension, e.g. `png`.
    pub fn output_file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.stem(), extension)
    }

    /// Artifact path next to the log it was generated from.
    pub fn output_path(&self, log_path: &Path, extension: &str) -> PathBuf {
        let file_name = self.output_file_name(extension);
        match log_path.parent() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// Figure title describing the run, broken after the intensity.
    pub fn title_lines(&self) -> Vec<String> {
        vec![
            format!("Intensity = {} #4K-Reqs/s,", self.intensity),
            format!(
                "read percentage = {}%, hit ratio = {}%, mode = {}",
                self.read_percentage, self.hit_ratio, self.mode
            ),
        ]
    }
}

impl fmt::Display for RunParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "intensity={}, read_percentage={}, hit_ratio={}, mode={}",
            self.intensity, self.read_percentage, self.hit_ratio, self.mode
        )
    }
}

/// Returns whether `name` looks like a benchmark log.
pub fn is_log_file_name(name: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX) && name.ends_with(LOG_FILE_SUFFIX)
}

// Marker positions follow the "-1 when absent" convention so that a missing
// marker shifts the slice instead of aborting the decode.
fn find(haystack: &str, needle: &str) -> isize {
    haystack.find(needle).map_or(-1, |i| i as isize)
}

fn rfind(haystack: &str, needle: &str) -> isize {
    haystack.rfind(needle).map_or(-1, |i| i as isize)
}

/// Substring between `start` and `end`, where negative positions count from
/// the end and out-of-range positions are clamped. Yields an empty string for
/// inverted ranges.
fn slice(s: &str, start: isize, end: isize) -> String {
    let len = s.len() as isize;
    let clamp = |pos: isize| -> usize {
        let pos = if pos < 0 { pos + len } else { pos };
        pos.clamp(0, len) as usize
    };

    let (start, end) = (clamp(start), clamp(end));
    if start >= end {
        return String::new();
    }
    s.get(start..end).unwrap_or_default().to_string()
}
