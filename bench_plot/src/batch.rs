//! Sequential processing of all benchmark logs in a directory

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::parsers::parse_file;
use crate::reporting::Reporter;
use crate::run_name::{is_log_file_name, RunParameters};

/// List the benchmark logs in `dir`, in directory enumeration order.
pub fn discover_logs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list log directory {}", dir.display()))?;

    let mut logs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let name = entry.file_name();
        match name.to_str() {
            Some(name) if is_log_file_name(name) => logs.push(entry.path()),
            Some(name) => debug!("Skipping {}", name),
            None => debug!("Skipping non UTF-8 file name {:?}", name),
        }
    }

    Ok(logs)
}

/// Parse one log and write its artifact next to it.
///
/// Returns the path of the written artifact.
pub fn process_log(log: &Path, reporter: &dyn Reporter) -> Result<PathBuf> {
    let params = RunParameters::from_path(log)
        .with_context(|| format!("Log file name {} is not valid UTF-8", log.display()))?;
    let series = parse_file(log)?;

    let output = params.output_path(log, reporter.extension());
    reporter
        .write(&params, &series, &output)
        .with_context(|| format!("Failed to render {}", output.display()))?;

    info!(
        "Wrote {} ({} samples, {})",
        output.display(),
        series.len(),
        params
    );
    Ok(output)
}

/// Process every log in `dir`, stopping at the first failure.
///
/// Artifacts written before a failure are kept.
pub fn process_directory(dir: &Path, reporter: &dyn Reporter) -> Result<Vec<PathBuf>> {
    let logs = discover_logs(dir)?;
    if logs.is_empty() {
        warn!("No benchmark logs found in {}", dir.display());
        return Ok(Vec::new());
    }

    logs.iter()
        .map(|log| process_log(log, reporter))
        .collect()
}
