use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let man_dir = out_dir.join("man").join("man1");
    fs::create_dir_all(&man_dir)?;

    let version: &'static str = Box::leak(env::var("CARGO_PKG_VERSION")?.into_boxed_str());

    let cmd = bench_plot_cli_types::Cli::command_without_version().version(version);
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("bench-plot.1"), &buffer)?;

    let markdown = clap_markdown::help_markdown::<bench_plot_cli_types::Cli>();
    fs::write(out_dir.join("manpage.md"), markdown)?;

    println!("cargo:rerun-if-changed=../cli_types/src/lib.rs");

    Ok(())
}
