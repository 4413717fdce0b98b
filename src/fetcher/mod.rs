//! Completion metadata lookups driven by a command lineage.
//!
//! [`MetadataFetcher`] answers the questions an interactive prompt asks
//! while the user types: which operation does this command invoke, what
//! shape does this argument accept, and what documentation belongs to it.
//! Tree traversal lives in [`LineageResolver`] and name mapping in
//! [`naming`].

mod lineage;
pub mod naming;


pub use lineage::LineageResolver;

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    ArgscopeError, Result,
    registry::{ArgumentDescriptor, CommandRegistry},
    services::{OperationModel, ProviderError, Shape, ServiceModelProvider},
};

/// Read-only façade over the command registry and service descriptions.
///
/// Every query walks the registry again from the root; nothing is cached.
pub struct MetadataFetcher {
    registry: Arc<CommandRegistry>,
    provider: Arc<dyn ServiceModelProvider>,
}

impl MetadataFetcher {
    /// Creates a fetcher over a fully built registry and provider.
    pub fn new(registry: Arc<CommandRegistry>, provider: Arc<dyn ServiceModelProvider>) -> Self {
        Self { registry, provider }
    }

    /// Returns the service operation invoked by `current_command`.
    ///
    /// Only attempted when a command is given and the lineage contains a
    /// service-level token after the root. The operation name is always
    /// derived from `current_command`; `_operation` is accepted for callers
    /// that already hold a guess and is ignored.
    ///
    /// Any provider failure yields `None`.
    #[instrument(skip(self, lineage, _operation))]
    pub fn get_operation_model<S: AsRef<str>>(
        &self,
        lineage: &[S],
        current_command: Option<&str>,
        _operation: Option<&str>,
    ) -> Option<OperationModel> {
        let current_command = current_command.filter(|command| !command.is_empty())?;
        if lineage.len() <= 1 {
            return None;
        }

        match self.lookup_operation(lineage[1].as_ref(), current_command) {
            Ok(operation) => Some(operation),
            Err(e) => {
                debug!("No operation model available: {e}");
                None
            }
        }
    }

    fn lookup_operation(
        &self,
        service_token: &str,
        current_command: &str,
    ) -> std::result::Result<OperationModel, ProviderError> {
        let service_name = naming::service_name_for(service_token);
        let service_model = self.provider.get_service_model(service_name)?;
        let operation_name = naming::operation_name_for(current_command);

        service_model.operation_model(&operation_name).cloned()
    }

    /// Returns the structural model of `arg_name` on `current_command`.
    ///
    /// # Errors
    ///
    /// Returns `ArgscopeError::SubcommandNotFound` if the lineage does not
    /// exist in the registry.
    pub fn get_argument_model<S: AsRef<str>>(
        &self,
        lineage: &[S],
        current_command: Option<&str>,
        arg_name: &str,
    ) -> Result<Option<&Shape>> {
        let argument = self.get_argument(lineage, current_command, arg_name)?;

        Ok(argument.and_then(ArgumentDescriptor::argument_model))
    }

    /// Returns the documentation of `arg_name`, or an empty string when the
    /// argument or its documentation is missing.
    ///
    /// # Errors
    ///
    /// Returns `ArgscopeError::SubcommandNotFound` if the lineage does not
    /// exist in the registry.
    pub fn get_argument_documentation<S: AsRef<str>>(
        &self,
        lineage: &[S],
        current_command: Option<&str>,
        arg_name: &str,
    ) -> Result<String> {
        let argument = self.get_argument(lineage, current_command, arg_name)?;

        Ok(argument
            .and_then(ArgumentDescriptor::documentation)
            .unwrap_or_default()
            .to_string())
    }

    /// Returns the documentation of a global argument.
    ///
    /// # Errors
    ///
    /// Returns `ArgscopeError::GlobalArgNotFound` if `arg_name` is not a
    /// global argument.
    pub fn get_global_arg_documentation(&self, arg_name: &str) -> Result<String> {
        let argument = self.registry.arg_table().get(arg_name).ok_or_else(|| {
            ArgscopeError::GlobalArgNotFound {
                name: arg_name.to_string(),
            }
        })?;

        Ok(argument.documentation().unwrap_or_default().to_string())
    }

    /// Returns the valid values of a global argument.
    ///
    /// `None` both for unknown names and for arguments that are not
    /// enumerated.
    pub fn get_global_arg_choices(&self, arg_name: &str) -> Option<&[String]> {
        self.registry
            .arg_table()
            .get(arg_name)
            .and_then(ArgumentDescriptor::choices)
    }

    fn get_argument<S: AsRef<str>>(
        &self,
        lineage: &[S],
        current_command: Option<&str>,
        arg_name: &str,
    ) -> Result<Option<&ArgumentDescriptor>> {
        LineageResolver::new(&self.registry).resolve_argument(lineage, current_command, arg_name)
    }
}
