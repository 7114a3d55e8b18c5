//! Repository configuration.
//!
//! A [`RepositoryConfig`] is loaded once at startup and shared read-only by
//! every request. It supplies everything `Identify` echoes back, the
//! identifier minting convention, and the few response policies the
//! protocol leaves to the repository.
//!
//! # Example
//!
//! ```rust
//! use oai_pmh_server::config::{RepositoryConfig, DeletedRecordPolicy};
//!
//! # fn main() -> Result<(), oai_pmh_server::error::BuildError> {
//! let config = RepositoryConfig::builder()
//!     .repository_name("Example Repository")
//!     .base_url("http://example.org")
//!     .repository_identifier("example.org")
//!     .admin("Repository Admin", "admin@example.org")
//!     .deleted_record(DeletedRecordPolicy::Persistent)
//!     .build()?;
//!
//! assert_eq!(config.identifier_delimiter, ":");
//! # Ok(())
//! # }
//! ```

use crate::datestamp::Granularity;
use crate::error::{BuildError, BuildResult};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the repository reports deleted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletedRecordPolicy {
    /// No information about deletions is kept
    #[default]
    No,
    /// Deletions may be reported but not guaranteed to persist
    Transient,
    /// Deletions are kept with no time limit
    Persistent,
}

impl DeletedRecordPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletedRecordPolicy::No => "no",
            DeletedRecordPolicy::Transient => "transient",
            DeletedRecordPolicy::Persistent => "persistent",
        }
    }
}

/// What `ListSets` returns when the provider's set catalog is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetHierarchyPolicy {
    /// Return a normal response with no sets.
    #[default]
    EmptyList,
    /// Report `noSetHierarchy`.
    NoSetHierarchy,
}

/// HTTP status used for responses carrying a protocol error.
///
/// OAI-PMH embeds errors in the response body and does not fix the status
/// code; the reference behavior answers 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HttpStatusPolicy {
    #[default]
    AlwaysOk,
    BadRequestOnError,
}

/// A repository administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminContact {
    pub name: String,
    pub email: String,
}

/// Immutable per-deployment repository settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Human-readable repository name.
    pub repository_name: String,

    /// Scheme and authority of the repository, e.g. `http://example.org`.
    /// Used for the request URL and dereferenceable record identifiers.
    pub base_url: String,

    /// Path of the OAI-PMH endpoint below `base_url`.
    pub endpoint_path: String,

    pub earliest_datestamp: DateTime<Utc>,
    pub granularity: Granularity,
    pub compression: Vec<String>,

    pub identifier_scheme: String,
    pub repository_identifier: String,
    pub identifier_delimiter: String,
    /// Shown in `Identify` for documentation only; never parsed.
    pub sample_identifier: String,

    pub deleted_record: DeletedRecordPolicy,
    pub admins: Vec<AdminContact>,

    pub empty_set_policy: SetHierarchyPolicy,
    pub http_status_policy: HttpStatusPolicy,

    /// Prefix assumed when a request omits `metadataPrefix`.
    pub default_metadata_prefix: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            repository_name: "oai repo name".to_string(),
            base_url: "http://localhost".to_string(),
            endpoint_path: "/oai/".to_string(),
            earliest_datestamp: Utc
                .with_ymd_and_hms(1990, 2, 1, 12, 0, 0)
                .single()
                .unwrap_or_default(),
            granularity: Granularity::Seconds,
            compression: vec!["deflate".to_string()],
            identifier_scheme: "oai".to_string(),
            repository_identifier: "lcoa1.loc.gov".to_string(),
            identifier_delimiter: ":".to_string(),
            sample_identifier: "oai:lcoa1.loc.gov:loc.music/musdi.002".to_string(),
            deleted_record: DeletedRecordPolicy::No,
            admins: Vec::new(),
            empty_set_policy: SetHierarchyPolicy::EmptyList,
            http_status_policy: HttpStatusPolicy::AlwaysOk,
            default_metadata_prefix: "oai_dc".to_string(),
        }
    }
}

impl RepositoryConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> RepositoryConfigBuilder {
        RepositoryConfigBuilder::default()
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields take their default values; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> BuildResult<Self> {
        let config: RepositoryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> BuildResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check the invariants the rest of the crate relies on.
    pub fn validate(&self) -> BuildResult<()> {
        let required = [
            ("repository_name", &self.repository_name),
            ("base_url", &self.base_url),
            ("identifier_scheme", &self.identifier_scheme),
            ("repository_identifier", &self.repository_identifier),
            ("identifier_delimiter", &self.identifier_delimiter),
            ("default_metadata_prefix", &self.default_metadata_prefix),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BuildError::EmptyField { field });
            }
        }

        if self.identifier_scheme.contains(&self.identifier_delimiter) {
            return Err(BuildError::invalid(format!(
                "identifier scheme '{}' must not contain the delimiter '{}'",
                self.identifier_scheme, self.identifier_delimiter
            )));
        }
        if self
            .repository_identifier
            .contains(&self.identifier_delimiter)
        {
            return Err(BuildError::invalid(format!(
                "repository identifier '{}' must not contain the delimiter '{}'",
                self.repository_identifier, self.identifier_delimiter
            )));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(BuildError::invalid(format!(
                "base URL '{}' must be an absolute http(s) URL",
                self.base_url
            )));
        }

        for admin in &self.admins {
            let valid = admin
                .email
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
            if !valid {
                return Err(BuildError::invalid(format!(
                    "admin email '{}' is not a valid address",
                    admin.email
                )));
            }
        }

        Ok(())
    }

    /// Administrator email addresses, in configuration order.
    pub fn admin_emails(&self) -> Vec<String> {
        self.admins.iter().map(|a| a.email.clone()).collect()
    }

    /// Absolute URL of the OAI-PMH endpoint.
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.endpoint_path.starts_with('/') {
            format!("{}{}", base, self.endpoint_path)
        } else {
            format!("{}/{}", base, self.endpoint_path)
        }
    }
}

/// Builder for [`RepositoryConfig`].
#[derive(Debug, Clone, Default)]
pub struct RepositoryConfigBuilder {
    config: RepositoryConfig,
}

impl RepositoryConfigBuilder {
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.config.repository_name = name.into();
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.config.endpoint_path = path.into();
        self
    }

    pub fn earliest_datestamp(mut self, datestamp: DateTime<Utc>) -> Self {
        self.config.earliest_datestamp = datestamp;
        self
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.config.granularity = granularity;
        self
    }

    pub fn compression(mut self, encodings: Vec<String>) -> Self {
        self.config.compression = encodings;
        self
    }

    pub fn identifier_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config.identifier_scheme = scheme.into();
        self
    }

    pub fn repository_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.config.repository_identifier = identifier.into();
        self
    }

    pub fn identifier_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.identifier_delimiter = delimiter.into();
        self
    }

    pub fn sample_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.config.sample_identifier = identifier.into();
        self
    }

    pub fn deleted_record(mut self, policy: DeletedRecordPolicy) -> Self {
        self.config.deleted_record = policy;
        self
    }

    pub fn admin(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.config.admins.push(AdminContact {
            name: name.into(),
            email: email.into(),
        });
        self
    }

    pub fn empty_set_policy(mut self, policy: SetHierarchyPolicy) -> Self {
        self.config.empty_set_policy = policy;
        self
    }

    pub fn http_status_policy(mut self, policy: HttpStatusPolicy) -> Self {
        self.config.http_status_policy = policy;
        self
    }

    pub fn default_metadata_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.default_metadata_prefix = prefix.into();
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> BuildResult<RepositoryConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
