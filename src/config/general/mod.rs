mod log_level;

pub use log_level::{LogFormat, LogLevel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// General settings that apply to every invocation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct GeneralConfig {
    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Console log format, overridden by `ARGSCOPE_LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Also write logs to a daily rolling file.
    #[serde(default)]
    pub log_to_file: bool,
}
