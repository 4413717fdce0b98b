use thiserror::Error;

use crate::ArgscopeError;

/// Errors surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    /// A lookup failed, for example because the lineage does not exist.
    #[error("Lookup failed: {0}")]
    Lookup(#[from] ArgscopeError),

    /// The command table or service descriptions could not be loaded.
    #[error("Failed to load {source_name}: {details}")]
    Load {
        /// Which source failed ("command table", "service descriptions")
        source_name: String,
        /// Underlying error message
        details: String,
    },

    /// The query succeeded but found nothing to print.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result of a front-end command: text to print on success.
pub type CommandResult = Result<String, CliError>;
