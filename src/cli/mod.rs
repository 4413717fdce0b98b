//! Command-line front end over the metadata fetcher.
//!
//! Each subcommand maps to one fetcher or docs query. Lineages are given
//! root first, exactly as the fetcher expects them.

pub mod formatting;
mod service;
mod types;


use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use service::CliService;
pub use types::{CliError, CommandResult};

/// Completion metadata lookups for hierarchical command tables.
#[derive(Parser, Debug)]
#[command(name = "argscope", version)]
#[command(about = "Resolve completion metadata for partially typed command lines")]
pub struct Cli {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/argscope/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// TOML command table, overriding the configured one
    #[arg(long, global = true)]
    pub commands: Option<PathBuf>,

    /// Directory of JSON service descriptions, overriding the configured one
    #[arg(long, global = true)]
    pub models: Option<PathBuf>,

    /// Query to run
    #[command(subcommand)]
    pub query: Query,
}

/// Lookup queries exposed on the command line.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Query {
    /// Show the service operation a command invokes
    Operation {
        /// Command path, root first
        #[arg(required = true)]
        lineage: Vec<String>,
        /// Command being completed
        #[arg(long)]
        command: String,
        /// Operation name guess; accepted for compatibility and ignored
        #[arg(long)]
        operation: Option<String>,
    },
    /// Show the structural model of a command argument
    ArgModel {
        /// Command path, root first
        #[arg(required = true)]
        lineage: Vec<String>,
        /// Command being completed
        #[arg(long)]
        command: String,
        /// Argument name without leading dashes
        #[arg(long)]
        arg: String,
    },
    /// Show the documentation of a command argument
    ArgDoc {
        /// Command path, root first
        #[arg(required = true)]
        lineage: Vec<String>,
        /// Command being completed
        #[arg(long)]
        command: String,
        /// Argument name without leading dashes
        #[arg(long)]
        arg: String,
    },
    /// Show the documentation of a global argument
    GlobalDoc {
        /// Global argument name
        name: String,
    },
    /// List the valid values of a global argument
    GlobalChoices {
        /// Global argument name
        name: String,
    },
    /// Render documentation for typed command text
    Docs {
        /// Command text as typed after the program name
        text: Vec<String>,
    },
    /// List top-level commands and their subcommands
    Commands,
    /// Print the JSON schema of the configuration file
    ConfigSchema,
}
