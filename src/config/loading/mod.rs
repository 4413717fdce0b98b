mod circular_detection;
mod merging;

use std::{
    fs,
    path::{Path, PathBuf},
};

use circular_detection::ImportChain;
use merging::merge_with_imports;
use toml::Value;
use tracing::{debug, info, instrument};

use super::{Config, ConfigPaths};
use crate::{ArgscopeError, Result};

impl Config {
    /// Loads the main configuration file, or defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    #[instrument]
    pub fn load_or_default() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        Self::load_with_imports(&path)
    }

    /// Loads a configuration file, merging any files it imports.
    ///
    /// Imports are listed in a top-level `imports` array as `@name` entries,
    /// resolved next to the importing file with `.toml` appended when no
    /// extension is given. Imported values are merged first and the
    /// importing file wins on conflicts.
    ///
    /// ```toml
    /// imports = ["@sources"]
    ///
    /// [general]
    /// log_level = "debug"
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be read or parsed, an import
    /// cycle exists, or the merged result is not a valid configuration.
    #[instrument]
    pub fn load_with_imports(path: &Path) -> Result<Config> {
        let canonical_path = path.canonicalize()?;
        let mut chain = ImportChain::new();

        let merged = Self::load_value(&canonical_path, &mut chain)?;
        let config: Config = merged
            .try_into()
            .map_err(|e| ArgscopeError::ConfigValidation {
                component: "config".to_string(),
                details: e.to_string(),
            })?;

        info!("Loaded configuration from {}", canonical_path.display());
        Ok(config)
    }

    fn load_value(path: &Path, chain: &mut ImportChain) -> Result<Value> {
        chain.check(path)?;
        chain.push(path);

        let result = Self::read_and_merge(path, chain);
        chain.pop();
        result
    }

    fn read_and_merge(path: &Path, chain: &mut ImportChain) -> Result<Value> {
        let content = fs::read_to_string(path).map_err(|e| ArgscopeError::import(e, path))?;
        let mut value: Value =
            toml::from_str(&content).map_err(|e| ArgscopeError::toml_parse(e, Some(path)))?;

        let imports = Self::take_imports(&mut value);
        let imported = imports
            .iter()
            .map(|import| {
                let resolved = Self::resolve_import_path(path, import)?;
                let canonical = resolved
                    .canonicalize()
                    .map_err(|e| ArgscopeError::import(e, &resolved))?;

                debug!("Importing {}", canonical.display());
                Self::load_value(&canonical, chain)
            })
            .collect::<Result<Vec<Value>>>()?;

        Ok(merge_with_imports(imported, value))
    }

    fn take_imports(value: &mut Value) -> Vec<String> {
        let Value::Table(table) = value else {
            return Vec::new();
        };

        match table.remove("imports") {
            Some(Value::Array(imports)) => imports
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|entry| entry.strip_prefix('@'))
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn resolve_import_path(base_path: &Path, import: &str) -> Result<PathBuf> {
        let parent = base_path.parent().ok_or_else(|| ArgscopeError::ImportError {
            path: base_path.to_path_buf(),
            details: "base path has no parent directory".to_string(),
        })?;

        let mut import_path = PathBuf::from(import);
        if import_path.extension().is_none() {
            import_path.set_extension("toml");
        }

        Ok(parent.join(import_path))
    }
}
