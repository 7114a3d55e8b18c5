//! Verb dispatcher and request/response types.
//!
//! [`OaiVerbHandler::handle`] is the protocol state machine: it validates the
//! verb, routes to exactly one verb handler, and turns every failure into an
//! [`ErrorResponse`]. It keeps no state between requests.

use crate::config::{HttpStatusPolicy, RepositoryConfig};
use crate::error::{BuildResult, OaiError, OaiResult};
use crate::identifier::IdentifierCodec;
use crate::metadata_format::MetadataFormatRegistry;
use crate::provider::RepositoryProvider;
use crate::verb_handler::errors::{self, ErrorResponse, create_error_response};
use crate::verb_handler::handlers;
use crate::verb_handler::payload::{
    GetRecordPayload, IdentifyPayload, ListIdentifiersPayload, ListMetadataFormatsPayload,
    ListRecordsPayload, ListSetsPayload, RecordHeader,
};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The six OAI-PMH verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    Identify,
    ListIdentifiers,
    ListRecords,
    ListMetadataFormats,
    ListSets,
    GetRecord,
}

impl Verb {
    pub const ALL: [Verb; 6] = [
        Verb::Identify,
        Verb::ListIdentifiers,
        Verb::ListRecords,
        Verb::ListMetadataFormats,
        Verb::ListSets,
        Verb::GetRecord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Identify => "Identify",
            Verb::ListIdentifiers => "ListIdentifiers",
            Verb::ListRecords => "ListRecords",
            Verb::ListMetadataFormats => "ListMetadataFormats",
            Verb::ListSets => "ListSets",
            Verb::GetRecord => "GetRecord",
        }
    }

    /// Arguments this verb accepts besides `verb` itself.
    pub fn legal_arguments(&self) -> &'static [&'static str] {
        match self {
            Verb::Identify => &[],
            Verb::ListSets => &["resumptionToken"],
            Verb::ListMetadataFormats => &["identifier"],
            Verb::ListIdentifiers | Verb::ListRecords => {
                &["metadataPrefix", "from", "until", "set", "resumptionToken"]
            }
            Verb::GetRecord => &["identifier", "metadataPrefix"],
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = OaiError;

    /// Verbs are matched exactly; `identify` is not `Identify`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| OaiError::bad_verb(errors::illegal_verb(s)))
    }
}

/// An incoming protocol request.
///
/// Only `verb` is validated up front; everything else is checked by the
/// handler for the resolved verb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OaiRequest {
    pub verb: Option<String>,
    /// Arguments other than `verb`.
    pub params: BTreeMap<String, String>,
    /// Names of arguments (including `verb`) that appeared more than once.
    pub repeated_arguments: Vec<String>,
    /// Absolute URL the request was made to. Defaults to the configured endpoint.
    pub request_url: Option<String>,
    /// Request ID for tracing (will be generated if not provided)
    pub request_id: Option<String>,
}

/// Per-request values fixed once at the top of dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: String,
    pub request_url: String,
}

/// Verb-specific response content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseBody<I> {
    Identify(IdentifyPayload),
    ListSets(ListSetsPayload),
    ListMetadataFormats(ListMetadataFormatsPayload),
    ListIdentifiers(ListIdentifiersPayload),
    ListRecords(ListRecordsPayload<I>),
    GetRecord(GetRecordPayload<I>),
    Error(ErrorResponse),
}

/// A complete protocol response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OaiResponse<I> {
    pub response_date: DateTime<Utc>,
    pub request_url: String,
    /// The verb echoed back; absent for `badVerb` and `badArgument`.
    pub verb: Option<Verb>,
    /// Request arguments echoed back on success; empty for every error.
    pub arguments: BTreeMap<String, String>,
    pub body: ResponseBody<I>,
}

impl<I> OaiResponse<I> {
    pub fn is_error(&self) -> bool {
        matches!(self.body, ResponseBody::Error(_))
    }

    pub fn error(&self) -> Option<&ErrorResponse> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            _ => None,
        }
    }

    /// HTTP status code for this response under the given policy.
    pub fn http_status(&self, policy: HttpStatusPolicy) -> u16 {
        match (policy, self.is_error()) {
            (HttpStatusPolicy::BadRequestOnError, true) => 400,
            _ => 200,
        }
    }
}

/// Framework-agnostic OAI-PMH verb handler.
///
/// Holds the read-only configuration and the provider; safe to share across
/// concurrent requests whenever the provider is.
pub struct OaiVerbHandler<P: RepositoryProvider> {
    provider: P,
    config: RepositoryConfig,
    codec: IdentifierCodec,
    formats: MetadataFormatRegistry,
}

impl<P: RepositoryProvider> fmt::Debug for OaiVerbHandler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OaiVerbHandler")
            .field("config", &self.config)
            .field("formats", &self.formats)
            .finish_non_exhaustive()
    }
}

impl<P: RepositoryProvider + Sync> OaiVerbHandler<P> {
    /// Create a handler supporting the default metadata formats.
    pub fn new(provider: P, config: RepositoryConfig) -> BuildResult<Self> {
        config.validate()?;
        Ok(Self {
            provider,
            codec: IdentifierCodec::from_config(&config),
            config,
            formats: MetadataFormatRegistry::default(),
        })
    }

    /// Replace the metadata format registry.
    pub fn with_formats(mut self, formats: MetadataFormatRegistry) -> Self {
        self.formats = formats;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn codec(&self) -> &IdentifierCodec {
        &self.codec
    }

    pub fn formats(&self) -> &MetadataFormatRegistry {
        &self.formats
    }

    /// Handle one protocol request.
    ///
    /// Always returns a well-formed response; failures are embedded as an
    /// error body.
    pub async fn handle(&self, request: OaiRequest) -> OaiResponse<P::Item> {
        let context = RequestContext {
            request_id: request
                .request_id
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            request_url: request
                .request_url
                .clone()
                .unwrap_or_else(|| self.config.endpoint_url()),
        };

        info!(
            "OAI-PMH handler processing verb {:?} (request: '{}')",
            request.verb, context.request_id
        );

        let verb = match resolve_verb(&request) {
            Ok(verb) => verb,
            Err(e) => {
                warn!(
                    "OAI-PMH request rejected: {} (request: '{}')",
                    e, context.request_id
                );
                return self.error_response(e, None, &context);
            }
        };

        let result = match handlers::check_arguments(verb, &request) {
            Ok(()) => self.dispatch(verb, &request, &context).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(body) => {
                debug!(
                    "OAI-PMH {} completed successfully (request: '{}')",
                    verb, context.request_id
                );
                OaiResponse {
                    response_date: Utc::now(),
                    request_url: context.request_url,
                    verb: Some(verb),
                    arguments: request.params,
                    body,
                }
            }
            Err(e) => {
                warn!(
                    "OAI-PMH {} failed: {} (request: '{}')",
                    verb, e, context.request_id
                );
                self.error_response(e, Some(verb), &context)
            }
        }
    }

    async fn dispatch(
        &self,
        verb: Verb,
        request: &OaiRequest,
        context: &RequestContext,
    ) -> OaiResult<ResponseBody<P::Item>> {
        match verb {
            Verb::Identify => Ok(ResponseBody::Identify(handlers::identify::handle_identify(
                self,
            ))),
            Verb::ListSets => handlers::list_sets::handle_list_sets(self, context)
                .await
                .map(ResponseBody::ListSets),
            Verb::ListMetadataFormats => {
                handlers::list_metadata_formats::handle_list_metadata_formats(
                    self, request, context,
                )
                .await
                .map(ResponseBody::ListMetadataFormats)
            }
            Verb::ListIdentifiers => {
                handlers::list_identifiers::handle_list_identifiers(self, request, context)
                    .await
                    .map(ResponseBody::ListIdentifiers)
            }
            Verb::ListRecords => {
                handlers::list_records::handle_list_records(self, request, context)
                    .await
                    .map(ResponseBody::ListRecords)
            }
            Verb::GetRecord => handlers::get_record::handle_get_record(self, request, context)
                .await
                .map(ResponseBody::GetRecord),
        }
    }

    fn error_response(
        &self,
        error: OaiError,
        verb: Option<Verb>,
        context: &RequestContext,
    ) -> OaiResponse<P::Item> {
        // The protocol forbids echoing arguments alongside badVerb/badArgument.
        let echo = !matches!(
            error,
            OaiError::BadVerb { .. } | OaiError::BadArgument { .. }
        );
        OaiResponse {
            response_date: Utc::now(),
            request_url: context.request_url.clone(),
            verb: if echo { verb } else { None },
            arguments: BTreeMap::new(),
            body: ResponseBody::Error(create_error_response(error, verb, &context.request_id)),
        }
    }

    /// Header for one provider item.
    pub(crate) fn record_header(&self, item: &P::Item) -> RecordHeader {
        let local_path = self.provider.local_path(item);
        RecordHeader {
            identifier: self.codec.encode(&local_path),
            datestamp: self
                .config
                .granularity
                .format(&self.provider.last_modified(item)),
            set_specs: self.provider.sets(item),
        }
    }
}

fn resolve_verb(request: &OaiRequest) -> OaiResult<Verb> {
    if request.repeated_arguments.iter().any(|a| a == "verb") {
        return Err(OaiError::bad_verb(errors::REPEATED_VERB));
    }
    match &request.verb {
        None => Err(OaiError::bad_verb(errors::NO_VERB)),
        Some(verb) => verb.parse(),
    }
}
