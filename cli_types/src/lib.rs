use clap::{CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

/// Artifact written for every benchmark log
#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Four-panel time-series chart
    #[default]
    Png,
    /// Tab-separated dump of the parsed samples
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Plot every `bench-*.txt` progress log in a directory.
///
/// Each log is turned into one artifact named after the run parameters
/// encoded in the log's file name, e.g. `bench-int100-read50-hit80-LRU.txt`
/// becomes `bench-int100-read50-hit80-LRU.png` in the same directory.
/// Processing stops at the first log containing a malformed progress line.
#[derive(Parser)]
#[command(version, name = "bench-plot")]
pub struct Cli {
    /// Increase verbosity level (can be specified multiple times.) The first level sets level
    /// "info", second sets level "debug", and third sets level "trace" for the logger.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format of the generated artifacts
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Directory holding the benchmark logs. Falls back to `input.directory`
    /// from the configuration, then to `result`.
    pub directory: Option<PathBuf>,
}

impl Cli {
    /// Create a versionless command for manpage generation
    pub fn command_without_version() -> clap::Command {
        let mut cmd = Self::command();
        cmd = cmd.version(None::<&str>);
        cmd
    }
}
