use anyhow::Result;
use bursar::cli::Cli;
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(log_level).init();

    cli.run()
}
