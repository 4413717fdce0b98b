//! Configuration schema and loading.
//!
//! The configuration names where the command table and service
//! descriptions live and how logging behaves. Every field has a default, so
//! an absent or empty file is valid.

mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogFormat, LogLevel};
pub use paths::ConfigPaths;

use std::path::PathBuf;

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

/// Main configuration structure for argscope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Locations of the command table and service descriptions.
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Locations of the metadata the fetcher reads.
///
/// Relative paths are resolved against the current directory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct SourcesConfig {
    /// TOML command table file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<PathBuf>,

    /// Directory of JSON service descriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<PathBuf>,
}

impl Config {
    /// Returns the JSON schema describing the configuration file.
    pub fn schema() -> Schema {
        schema_for!(Config)
    }
}
