use std::path::PathBuf;

/// Errors raised by a service metadata provider.
///
/// Every variant is treated as "metadata unavailable" by the completion
/// fetcher, so callers outside of loading rarely need to match on them.
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    /// No description is known for the service
    #[error("Unknown service: {service_name}")]
    UnknownService {
        /// Name the provider was asked for
        service_name: String,
    },

    /// The service exists but does not define the operation
    #[error("Service {service_name} has no operation {operation}")]
    UnknownOperation {
        /// Service that was searched
        service_name: String,
        /// Operation name that was requested
        operation: String,
    },

    /// A service description file could not be read
    #[error("Failed to load service description '{path}': {details}")]
    Load {
        /// File or directory being read
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// A service description could not be decoded
    #[error("Failed to parse service description at '{location}': {details}")]
    Parse {
        /// File path or "string"
        location: String,
        /// Decoder error details
        details: String,
    },
}
