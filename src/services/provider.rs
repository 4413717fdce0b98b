use std::sync::Arc;

use super::{ProviderError, ServiceModel};

/// Read-only source of service descriptions keyed by service name.
///
/// Implementations own the descriptions for the lifetime of the process and
/// hand out shared references. Any failure, including an unknown service,
/// is reported through `ProviderError`.
pub trait ServiceModelProvider: Send + Sync {
    /// Returns the description registered under `service_name`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::UnknownService` if no description is known,
    /// or any other provider-specific error.
    fn get_service_model(&self, service_name: &str) -> Result<Arc<ServiceModel>, ProviderError>;
}
