//! Argscope command-line entry point
//!
//! Loads configuration, applies command-line source overrides and runs a
//! single lookup query.

use std::{error::Error, process};

use argscope::{
    cli::{Cli, CliService, formatting::format_error},
    config::Config,
    tracing_config,
};
use clap::Parser;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

/// Loads configuration, initializes logging and executes the query.
///
/// # Errors
/// Returns error if configuration, logging setup or the query fails.
fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_imports(path)?,
        None => Config::load_or_default()?,
    };

    if let Some(commands) = cli.commands {
        config.sources.commands = Some(commands);
    }
    if let Some(models) = cli.models {
        config.sources.models = Some(models);
    }

    let general = &config.general;
    if general.log_to_file {
        tracing_config::init_with_file(&general.log_level, general.log_format)?;
    } else {
        tracing_config::init(&general.log_level, general.log_format)?;
    }
    debug!(sources = ?config.sources, "Configuration loaded");

    let service = CliService::from_sources(&config.sources)?;
    Ok(service.execute(&cli.query)?)
}
