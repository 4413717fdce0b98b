use std::path::{Path, PathBuf};

use crate::{ArgscopeError, Result};

/// Chain of files currently being imported, used to reject cycles.
#[derive(Default)]
pub struct ImportChain {
    files: Vec<PathBuf>,
}

impl ImportChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails if `path` is already part of the chain.
    pub fn check(&self, path: &Path) -> Result<()> {
        if !self.files.iter().any(|file| file == path) {
            return Ok(());
        }

        let display_name = |p: &Path| {
            p.file_name()
                .unwrap_or(p.as_os_str())
                .to_string_lossy()
                .to_string()
        };
        let chain: Vec<String> = self.files.iter().map(|p| display_name(p.as_path())).collect();

        Err(ArgscopeError::ConfigValidation {
            component: "imports".to_string(),
            details: format!(
                "Circular import detected: {} -> {}",
                chain.join(" -> "),
                display_name(path)
            ),
        })
    }

    pub fn push(&mut self, path: &Path) {
        self.files.push(path.to_path_buf());
    }

    pub fn pop(&mut self) {
        self.files.pop();
    }
}
