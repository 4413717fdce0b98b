use std::{collections::HashMap, fs, path::Path, sync::Arc};

use tracing::{debug, info, instrument};

use super::{ProviderError, ServiceModel, ServiceModelProvider};

/// In-memory collection of service descriptions.
///
/// Descriptions are loaded up front and never change afterwards, so lookups
/// need no locking.
#[derive(Debug, Default, Clone)]
pub struct ServiceCatalog {
    services: HashMap<String, Arc<ServiceModel>>,
}

impl ServiceCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a description under its `service_name`, replacing any
    /// previous one.
    pub fn insert(&mut self, model: ServiceModel) {
        self.services
            .insert(model.service_name.clone(), Arc::new(model));
    }

    /// Loads every `*.json` file in `dir`, using the file stem as the
    /// service name.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Load` if the directory or a file cannot be
    /// read, and `ProviderError::Parse` if a file is not a valid description.
    #[instrument]
    pub fn load_dir(dir: &Path) -> Result<Self, ProviderError> {
        let load_error = |e: std::io::Error, path: &Path| ProviderError::Load {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        let mut catalog = Self::new();
        let entries = fs::read_dir(dir).map_err(|e| load_error(e, dir))?;

        for entry in entries {
            let path = entry.map_err(|e| load_error(e, dir))?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            let Some(service_name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            debug!("Loading service description {}", path.display());
            let content = fs::read_to_string(&path).map_err(|e| load_error(e, &path))?;
            let model = ServiceModel::from_json_str(service_name, &content).map_err(|e| {
                match e {
                    ProviderError::Parse { details, .. } => ProviderError::Parse {
                        location: path.to_string_lossy().to_string(),
                        details,
                    },
                    other => other,
                }
            })?;

            catalog.insert(model);
        }

        info!("Loaded {} service descriptions", catalog.services.len());
        Ok(catalog)
    }

    /// Returns all registered service names, sorted.
    pub fn service_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.services.keys().cloned().collect();
        names.sort();
        names
    }
}

impl ServiceModelProvider for ServiceCatalog {
    fn get_service_model(&self, service_name: &str) -> Result<Arc<ServiceModel>, ProviderError> {
        self.services
            .get(service_name)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownService {
                service_name: service_name.to_string(),
            })
    }
}
