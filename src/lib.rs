//! OAI-PMH repository library for Rust.
//!
//! Implements the repository side of the Open Archives Initiative Protocol
//! for Metadata Harvesting: given a verb and its arguments, it produces a
//! structured, protocol-compliant response or one of the protocol errors.
//! Transport and XML rendering stay with the host application.
//!
//! # Core Components
//!
//! - [`OaiVerbHandler`] - Verb dispatcher and per-verb response builders
//! - [`RepositoryProvider`] - Trait for supplying items and sets
//! - [`IdentifierCodec`] - OAI identifier minting and parsing
//! - [`RepositoryConfig`] - Typed per-deployment settings
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use oai_pmh_server::{OaiRequest, OaiVerbHandler, RepositoryConfig};
//! use oai_pmh_server::providers::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RepositoryConfig::from_json_file("repository.json")?;
//! let handler = OaiVerbHandler::new(InMemoryRepository::new(), config)?;
//!
//! let response = handler.handle(OaiRequest::from_query("verb=Identify")).await;
//! let status = response.http_status(handler.config().http_status_policy);
//! # let _ = status;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod datestamp;
pub mod error;
pub mod identifier;
pub mod metadata_format;
pub mod provider;
pub mod providers;
pub mod verb_handler;

// Re-export commonly used types for convenience
pub use config::{
    AdminContact, DeletedRecordPolicy, HttpStatusPolicy, RepositoryConfig, SetHierarchyPolicy,
};
pub use datestamp::Granularity;
pub use error::{BuildError, IdentifierError, OaiError, OaiErrorCode, OaiResult};
pub use identifier::{IdentifierCodec, OaiIdentifier};
pub use metadata_format::{MetadataFormat, MetadataFormatRegistry};
pub use provider::{RepositoryProvider, SetDescriptor};
pub use verb_handler::{ErrorResponse, OaiRequest, OaiResponse, OaiVerbHandler, ResponseBody, Verb};
