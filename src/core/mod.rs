use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

use crate::services::ProviderError;

/// Error types for the argscope library.
///
/// Covers lineage traversal failures, global argument lookups, and the
/// loading of command tables and configuration files.
#[derive(Error, Debug)]
pub enum ArgscopeError {
    /// A lineage token has no matching subcommand at its level of the tree.
    #[error("subcommand '{token}' not found while resolving lineage {lineage:?}")]
    SubcommandNotFound {
        /// The token that could not be resolved
        token: String,
        /// The full lineage being walked
        lineage: Vec<String>,
    },

    /// The name is not a recognized global argument.
    #[error("'{name}' is not a global argument")]
    GlobalArgNotFound {
        /// The argument name that was requested
        name: String,
    },

    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Import operation error with file context
    #[error("failed to import '{path}': {details}")]
    ImportError {
        /// Path of file being imported
        path: PathBuf,
        /// Import error details
        details: String,
    },

    /// Service description could not be loaded
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// A specialized `Result` type for argscope operations.
pub type Result<T> = result::Result<T, ArgscopeError>;

impl ArgscopeError {
    /// Creates a traversal error for `token` within `lineage`.
    pub fn subcommand_not_found<S: AsRef<str>>(token: &str, lineage: &[S]) -> Self {
        ArgscopeError::SubcommandNotFound {
            token: token.to_string(),
            lineage: lineage.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ArgscopeError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an import error with file path context.
    pub fn import(error: impl fmt::Display, path: &Path) -> Self {
        let clean_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        ArgscopeError::ImportError {
            path: clean_path,
            details: error.to_string(),
        }
    }
}
