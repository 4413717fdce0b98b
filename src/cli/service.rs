use std::{path::Path, sync::Arc};

use tracing::{info, instrument};

use crate::{
    config::{Config, SourcesConfig},
    docs::DocsGetter,
    fetcher::MetadataFetcher,
    registry::CommandRegistry,
    services::{ServiceCatalog, ServiceModelProvider},
};

use super::{
    CliError, CommandResult, Query,
    formatting::{format_command, format_description, format_service, format_shape},
};

/// Runs front-end queries against one registry and provider.
pub struct CliService {
    registry: Arc<CommandRegistry>,
    fetcher: MetadataFetcher,
    docs: DocsGetter,
}

impl CliService {
    /// Creates a service over an already built registry and provider.
    pub fn new(registry: Arc<CommandRegistry>, provider: Arc<dyn ServiceModelProvider>) -> Self {
        let fetcher = MetadataFetcher::new(Arc::clone(&registry), provider);
        let docs = DocsGetter::new(Arc::clone(&registry));

        Self {
            registry,
            fetcher,
            docs,
        }
    }

    /// Loads the command table and service descriptions named in `sources`.
    ///
    /// A missing command table yields an empty registry and a missing models
    /// directory an empty catalog, so global queries still work.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Load` if a configured source cannot be read.
    #[instrument]
    pub fn from_sources(sources: &SourcesConfig) -> Result<Self, CliError> {
        let registry = match &sources.commands {
            Some(path) => load_registry(path)?,
            None => CommandRegistry::new(),
        };

        let catalog = match &sources.models {
            Some(dir) => ServiceCatalog::load_dir(dir).map_err(|e| CliError::Load {
                source_name: "service descriptions".to_string(),
                details: e.to_string(),
            })?,
            None => ServiceCatalog::new(),
        };

        info!(
            "Serving {} commands and {} services",
            registry.subcommand_table().len(),
            catalog.service_names().len()
        );
        Ok(Self::new(Arc::new(registry), Arc::new(catalog)))
    }

    /// Executes `query` and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Lookup` when the lineage or global argument does
    /// not exist and `CliError::NotFound` when a lookup finds nothing.
    pub fn execute(&self, query: &Query) -> CommandResult {
        match query {
            Query::Operation {
                lineage,
                command,
                operation,
            } => {
                let model = self
                    .fetcher
                    .get_operation_model(lineage, Some(command.as_str()), operation.as_deref())
                    .ok_or_else(|| {
                        CliError::NotFound(format!("no operation model for '{command}'"))
                    })?;

                Ok(serde_json::to_string_pretty(&model)?)
            }
            Query::ArgModel {
                lineage,
                command,
                arg,
            } => {
                let model = self
                    .fetcher
                    .get_argument_model(lineage, Some(command.as_str()), arg)?
                    .ok_or_else(|| CliError::NotFound(format!("no model for '--{arg}'")))?;

                Ok(format_shape(model))
            }
            Query::ArgDoc {
                lineage,
                command,
                arg,
            } => Ok(self
                .fetcher
                .get_argument_documentation(lineage, Some(command.as_str()), arg)?),
            Query::GlobalDoc { name } => Ok(self.fetcher.get_global_arg_documentation(name)?),
            Query::GlobalChoices { name } => {
                let choices = self.fetcher.get_global_arg_choices(name).ok_or_else(|| {
                    CliError::NotFound(format!("'--{name}' has no fixed choices"))
                })?;

                Ok(choices.join("\n"))
            }
            Query::Docs { text } => Ok(self.docs.get_docs(&text.join(" "))),
            Query::Commands => Ok(self.render_command_list()),
            Query::ConfigSchema => Ok(serde_json::to_string_pretty(&Config::schema())?),
        }
    }

    fn render_command_list(&self) -> String {
        self.registry
            .list_commands()
            .iter()
            .map(|(service, commands)| {
                let mut block = format_service(service);
                if commands.is_empty() {
                    block.push_str(&format!("\n  {}", format_description("(no subcommands)")));
                }
                for command in commands {
                    block.push_str(&format!("\n  {}", format_command(command)));
                }
                block
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn load_registry(path: &Path) -> Result<CommandRegistry, CliError> {
    CommandRegistry::load(path).map_err(|e| CliError::Load {
        source_name: "command table".to_string(),
        details: e.to_string(),
    })
}
