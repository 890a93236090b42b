use anyhow::Result;
use bench_plot::cli;

// Main entry point
fn main() -> Result<()> {
    cli::handle_calls()
}
