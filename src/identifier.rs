//! OAI identifier minting and parsing.
//!
//! A repository exposes each item under two names:
//!
//! - an opaque OAI identifier, `<scheme><d><repository-identifier><d><local-path>`,
//!   used as the protocol identifier (e.g. `oai:example.org:page/2`);
//! - a dereferenceable record URL, `<base-url>/<local-path>`.
//!
//! The local path is supplied by the repository provider. Scheme, delimiter
//! and repository identifier come from configuration so repositories can
//! match their own minting conventions.

use crate::config::RepositoryConfig;
use crate::error::IdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A minted OAI identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OaiIdentifier(String);

impl OaiIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OaiIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OaiIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds and parses the repository's identifier forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierCodec {
    scheme: String,
    delimiter: String,
    repository_identifier: String,
    base_url: String,
}

impl IdentifierCodec {
    pub fn new(
        scheme: impl Into<String>,
        delimiter: impl Into<String>,
        repository_identifier: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            delimiter: delimiter.into(),
            repository_identifier: repository_identifier.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &RepositoryConfig) -> Self {
        Self::new(
            &config.identifier_scheme,
            &config.identifier_delimiter,
            &config.repository_identifier,
            &config.base_url,
        )
    }

    /// Mint the OAI identifier for an item's local path.
    ///
    /// The path is embedded verbatim so that [`decode`](Self::decode) hands
    /// the provider back exactly what it produced, slashes included.
    pub fn encode(&self, local_path: &str) -> OaiIdentifier {
        OaiIdentifier(format!(
            "{}{d}{}{d}{}",
            self.scheme,
            self.repository_identifier,
            local_path,
            d = self.delimiter
        ))
    }

    /// Dereferenceable URL for an item's local path.
    ///
    /// Exactly one `/` separates the base URL from the path; a trailing
    /// slash on the path is kept.
    pub fn record_url(&self, local_path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            local_path.trim_start_matches('/')
        )
    }

    /// Recover the local path from an OAI identifier.
    ///
    /// The local part may itself contain the delimiter; only the scheme and
    /// repository identifier prefixes are split off.
    pub fn decode(&self, identifier: &str) -> Result<String, IdentifierError> {
        if identifier.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let rest = identifier
            .strip_prefix(self.scheme.as_str())
            .and_then(|r| r.strip_prefix(self.delimiter.as_str()))
            .ok_or_else(|| IdentifierError::WrongScheme {
                identifier: identifier.to_string(),
                scheme: self.scheme.clone(),
            })?;

        let local = rest
            .strip_prefix(self.repository_identifier.as_str())
            .and_then(|r| r.strip_prefix(self.delimiter.as_str()))
            .ok_or_else(|| IdentifierError::WrongRepository {
                identifier: identifier.to_string(),
                repository_identifier: self.repository_identifier.clone(),
            })?;

        if local.is_empty() {
            return Err(IdentifierError::MissingLocalPart {
                identifier: identifier.to_string(),
            });
        }

        Ok(local.to_string())
    }
}
