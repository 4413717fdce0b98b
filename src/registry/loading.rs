use std::{fs, path::Path};

use tracing::{info, instrument};

use super::{CommandRegistry, types::fill_table_names};
use crate::{ArgscopeError, Result};

impl CommandRegistry {
    /// Builds a registry from a TOML command table.
    ///
    /// ```toml
    /// [args.output]
    /// documentation = "The formatting style for command output."
    /// choices = ["json", "text", "table"]
    ///
    /// [commands.s3api.commands.list-objects.args.bucket]
    /// documentation = "The name of the bucket."
    /// required = true
    /// model = { type = "string" }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ArgscopeError::TomlParseError` if the content is not a valid
    /// command table.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, None)
    }

    /// Reads and parses a TOML command table from disk.
    ///
    /// # Errors
    ///
    /// Returns `ArgscopeError::Io` if the file cannot be read and
    /// `ArgscopeError::TomlParseError` if it cannot be parsed.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let registry = Self::parse(&content, Some(path))?;

        info!(
            "Loaded {} top-level commands and {} global arguments",
            registry.subcommand_table.len(),
            registry.arg_table.len()
        );
        Ok(registry)
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Self> {
        let mut registry: CommandRegistry =
            toml::from_str(content).map_err(|e| ArgscopeError::toml_parse(e, path))?;

        fill_table_names(&mut registry.subcommand_table, &mut registry.arg_table);
        Ok(registry)
    }
}
