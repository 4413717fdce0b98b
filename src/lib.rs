//! Argscope - Completion metadata for hierarchical command-line tools.
//!
//! Given the command path a user has typed so far (the lineage), argscope
//! resolves what the tool knows about the command being completed:
//!
//! - The service operation it invokes and that operation's model
//! - The structural model and documentation of each of its arguments
//! - Documentation and fixed choices of the tool's global arguments
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use argscope::{
//!     fetcher::MetadataFetcher,
//!     registry::CommandRegistry,
//!     services::{OperationModel, ServiceCatalog, ServiceModel},
//! };
//!
//! let registry = CommandRegistry::from_toml_str(
//!     r#"
//!     [commands.s3api.commands.list-objects.args.bucket]
//!     documentation = "The bucket name."
//!     "#,
//! )?;
//!
//! let mut catalog = ServiceCatalog::new();
//! catalog.insert(ServiceModel::new("s3").with_operation(OperationModel {
//!     name: "ListObjects".to_string(),
//!     ..OperationModel::default()
//! }));
//!
//! let fetcher = MetadataFetcher::new(Arc::new(registry), Arc::new(catalog));
//! let lineage = ["aws", "s3api"];
//!
//! let operation = fetcher.get_operation_model(&lineage, Some("list-objects"), None);
//! assert_eq!(operation.map(|op| op.name), Some("ListObjects".to_string()));
//!
//! let doc = fetcher.get_argument_documentation(&lineage, Some("list-objects"), "bucket")?;
//! assert_eq!(doc, "The bucket name.");
//! # Ok::<(), argscope::ArgscopeError>(())
//! ```

/// Command-line front end over the fetcher.
pub mod cli;

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Documentation pages for typed command text.
pub mod docs;

/// Lineage resolution and metadata lookups.
pub mod fetcher;

/// The command table: top-level commands and global arguments.
pub mod registry;

/// Service descriptions and the provider seam.
pub mod services;

/// Logging setup for command-line and prompt sessions.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{ArgscopeError, Result};
