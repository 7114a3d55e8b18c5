//! Request builder utilities for OaiRequest
//!
//! This module provides convenient builder methods for constructing
//! OaiRequest instances for each verb, and parsing them from query strings.

use crate::verb_handler::core::{OaiRequest, Verb};
use std::collections::BTreeMap;

impl OaiRequest {
    /// Create a request for an arbitrary verb token.
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: Some(verb.into()),
            ..Self::default()
        }
    }

    /// Create a request that carries no verb at all.
    pub fn without_verb() -> Self {
        Self::default()
    }

    /// Parse a raw query string such as `verb=GetRecord&identifier=oai%3Aa%3Ab`.
    ///
    /// A leading `?` is ignored. Repeated arguments are recorded rather than
    /// rejected here so that the dispatcher can report them with the right
    /// protocol error.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut verb = None;
        let mut params = BTreeMap::new();
        let mut repeated_arguments = Vec::new();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let duplicate = if key == "verb" {
                verb.replace(value.into_owned()).is_some()
            } else {
                params
                    .insert(key.clone().into_owned(), value.into_owned())
                    .is_some()
            };
            if duplicate && !repeated_arguments.iter().any(|a| a == key.as_ref()) {
                repeated_arguments.push(key.into_owned());
            }
        }

        Self {
            verb,
            params,
            repeated_arguments,
            request_url: None,
            request_id: None,
        }
    }

    pub fn identify() -> Self {
        Self::new(Verb::Identify.as_str())
    }

    pub fn list_sets() -> Self {
        Self::new(Verb::ListSets.as_str())
    }

    pub fn list_metadata_formats() -> Self {
        Self::new(Verb::ListMetadataFormats.as_str())
    }

    pub fn list_identifiers() -> Self {
        Self::new(Verb::ListIdentifiers.as_str())
    }

    pub fn list_records() -> Self {
        Self::new(Verb::ListRecords.as_str())
    }

    pub fn get_record(identifier: impl Into<String>) -> Self {
        Self::new(Verb::GetRecord.as_str()).with_param("identifier", identifier)
    }

    /// Add or replace an argument.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_request_url(mut self, url: impl Into<String>) -> Self {
        self.request_url = Some(url.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
