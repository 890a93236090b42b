use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::Level;

use crate::batch::process_directory;
use crate::config;
use crate::reporting::reporter_for;
use bench_plot_cli_types::Cli;

pub fn handle_calls() -> Result<()> {
    let cli = Cli::parse();
    let logger_level = match cli.verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(logger_level.as_str())).init();

    let directory = cli.directory.unwrap_or_else(config::input_directory);
    let reporter = reporter_for(cli.format, config::chart_settings());

    process_directory(&directory, reporter.as_ref())?;
    Ok(())
}
