//! fstree CLI Binary
//!
//! Command-line interface for inspecting directory trees and moving files.

use anyhow::Context;
use clap::Parser;
use fstree::logging::init_logging;
use fstree::tooling::cli::{Cli, CliContext};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(cli.root.clone(), cli.config.clone())
        .context("Failed to load configuration")?;

    let logging = cli.logging_config(&context.config().logging);
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let output = context.execute(&cli.command)?;
    println!("{}", output);
    Ok(())
}
