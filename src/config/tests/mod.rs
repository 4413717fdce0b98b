//! Unit tests for config module
//!
//! Tests configuration defaults, serialization and import merging.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{fs, path::PathBuf};

use tempfile::TempDir;

use crate::{
    ArgscopeError,
    config::{Config, ConfigPaths, LogFormat, LogLevel},
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Warn);
    assert_eq!(config.general.log_format, LogFormat::Pretty);
    assert!(!config.general.log_to_file);
    assert_eq!(config.sources.commands, None);
    assert_eq!(config.sources.models, None);
}

#[test]
fn config_empty_toml() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"
        log_format = "json"

        [sources]
        commands = "commands.toml"
        models = "models"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.general.log_format, LogFormat::Json);
    assert_eq!(config.sources.commands, Some(PathBuf::from("commands.toml")));
    assert_eq!(config.sources.models, Some(PathBuf::from("models")));
}

#[test]
fn config_serialize_roundtrip() {
    let mut original = Config::default();
    original.general.log_level = LogLevel::Trace;
    original.sources.models = Some(PathBuf::from("/srv/models"));

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_invalid_log_level() {
    let result: Result<Config, toml::de::Error> = toml::from_str(
        r#"
        [general]
        log_level = "loud"
    "#,
    );

    assert!(result.is_err());
}

#[test]
fn log_level_display_matches_filter_directives() {
    assert_eq!(LogLevel::Error.to_string(), "error");
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}

#[test]
fn log_format_parses_case_insensitively() {
    assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
    assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
fn config_schema_lists_sections() {
    let schema = serde_json::to_value(Config::schema()).unwrap();
    let properties = &schema["properties"];

    assert!(properties.get("general").is_some());
    assert!(properties.get("sources").is_some());
}

#[test]
fn config_paths_end_with_argscope() {
    if std::env::var("HOME").is_ok() || std::env::var("XDG_CONFIG_HOME").is_ok() {
        let main_config = ConfigPaths::main_config().unwrap();

        assert!(main_config.ends_with("argscope/config.toml"));
    }
}

#[test]
fn imports_merge_under_main_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("sources.toml"),
        r#"
[general]
log_level = "info"

[sources]
commands = "from-import.toml"
models = "models"
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
imports = ["@sources"]

[sources]
commands = "from-main.toml"
"#,
    )
    .unwrap();

    let config = Config::load_with_imports(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.sources.commands, Some(PathBuf::from("from-main.toml")));
    assert_eq!(config.sources.models, Some(PathBuf::from("models")));
}

#[test]
fn circular_imports_are_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.toml"), "imports = [\"@b\"]\n").unwrap();
    fs::write(dir.path().join("b.toml"), "imports = [\"@a\"]\n").unwrap();

    let err = Config::load_with_imports(&dir.path().join("a.toml")).unwrap_err();

    match err {
        ArgscopeError::ConfigValidation { details, .. } => {
            assert!(details.contains("Circular import detected"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_import_is_an_import_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "imports = [\"@missing\"]\n").unwrap();

    let err = Config::load_with_imports(&dir.path().join("config.toml")).unwrap_err();

    assert!(matches!(err, ArgscopeError::ImportError { .. }));
}
