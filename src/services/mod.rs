//! Service descriptions consumed by the completion fetcher.
//!
//! A service description names the operations a service exposes and the
//! request/response shapes of each one. Descriptions are read-only once
//! loaded; the [`ServiceModelProvider`] trait is the only view the fetcher
//! has of them.

mod catalog;
mod error;
mod model;
mod provider;

#[cfg(test)]
mod tests;

pub use catalog::ServiceCatalog;
pub use error::ProviderError;
pub use model::{OperationModel, ServiceMetadata, ServiceModel, Shape, ShapeType};
pub use provider::ServiceModelProvider;
