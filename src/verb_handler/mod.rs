//! Framework-agnostic OAI-PMH verb handling.
//!
//! This module maps the six protocol verbs onto response builders and the
//! protocol error set. It knows nothing about HTTP or XML: a host parses the
//! query string into an [`OaiRequest`], calls [`OaiVerbHandler::handle`], and
//! serializes the returned [`OaiResponse`].
//!
//! # Key Types
//!
//! - [`OaiVerbHandler`] - Dispatcher holding the configuration and provider
//! - [`OaiRequest`] - Verb token plus raw arguments
//! - [`OaiResponse`] - Response envelope with a verb-specific [`ResponseBody`]
//!
//! # Examples
//!
//! ```rust
//! use oai_pmh_server::config::RepositoryConfig;
//! use oai_pmh_server::providers::{InMemoryRepository, Page};
//! use oai_pmh_server::verb_handler::{OaiRequest, OaiVerbHandler, ResponseBody};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = InMemoryRepository::new();
//! repository.insert(Page::new(2, "About")).await;
//!
//! let config = RepositoryConfig::builder()
//!     .base_url("http://example.org")
//!     .repository_identifier("example.org")
//!     .build()?;
//! let handler = OaiVerbHandler::new(repository, config)?;
//!
//! let response = handler
//!     .handle(OaiRequest::from_query("verb=GetRecord&identifier=oai:example.org:page/2"))
//!     .await;
//! assert!(matches!(response.body, ResponseBody::GetRecord(_)));
//! # Ok(())
//! # }
//! ```

mod builders;
mod core;
mod errors;
mod handlers;
mod payload;

pub use self::core::{OaiRequest, OaiResponse, OaiVerbHandler, RequestContext, ResponseBody, Verb};
pub use errors::{ErrorResponse, create_error_response, report};
pub use payload::{
    GetRecordPayload, IdentifyPayload, ListIdentifiersPayload, ListMetadataFormatsPayload,
    ListRecordsPayload, ListSetsPayload, PROTOCOL_VERSION, Record, RecordHeader,
};

/// Fixed protocol messages, exposed for hosts and tests that match on them.
pub mod messages {
    pub use super::errors::{
        BAD_ARGUMENT, BAD_RESUMPTION_TOKEN, ID_DOES_NOT_EXIST, NO_METADATA_FORMATS,
        NO_RECORDS_MATCH, NO_SET_HIERARCHY, NO_VERB, RECORDS_UNAVAILABLE, REPEATED_VERB,
        SETS_UNAVAILABLE, cannot_disseminate, illegal_verb,
    };
}
