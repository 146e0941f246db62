//! Codetree Keeper CLI Binary
//!
//! Command-line interface for inspecting remembered outline fold state.

use anyhow::Context;
use clap::Parser;
use codetree_keeper::logging::{init_logging, LoggingConfig};
use codetree_keeper::tooling::cli::{Cli, CliContext};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(cli.config.clone()).context("Error initializing configuration")?;

    let mut logging: LoggingConfig = context.config().logging.clone();
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    init_logging(Some(&logging)).context("Error initializing logging")?;

    let output = context.execute(&cli.command)?;
    println!("{}", output);
    Ok(())
}
