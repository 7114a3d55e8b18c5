//! Error types for OAI-PMH verb handling.
//!
//! The protocol defines a closed set of error codes which every failure must
//! be reported as. [`OaiError`] carries one of those codes together with a
//! human-readable message; [`IdentifierError`] and provider errors carry the
//! richer internal detail that is logged before being collapsed into a
//! protocol code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The OAI-PMH 2.0 error codes.
///
/// Serialized as the exact protocol token (e.g. `badVerb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OaiErrorCode {
    BadArgument,
    BadResumptionToken,
    BadVerb,
    CannotDisseminateFormat,
    IdDoesNotExist,
    NoRecordsMatch,
    NoMetadataFormats,
    NoSetHierarchy,
}

impl OaiErrorCode {
    /// All protocol error codes, in the order the protocol lists them.
    pub const ALL: [OaiErrorCode; 8] = [
        OaiErrorCode::BadArgument,
        OaiErrorCode::BadResumptionToken,
        OaiErrorCode::BadVerb,
        OaiErrorCode::CannotDisseminateFormat,
        OaiErrorCode::IdDoesNotExist,
        OaiErrorCode::NoRecordsMatch,
        OaiErrorCode::NoMetadataFormats,
        OaiErrorCode::NoSetHierarchy,
    ];

    /// The protocol token for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            OaiErrorCode::BadArgument => "badArgument",
            OaiErrorCode::BadResumptionToken => "badResumptionToken",
            OaiErrorCode::BadVerb => "badVerb",
            OaiErrorCode::CannotDisseminateFormat => "cannotDisseminateFormat",
            OaiErrorCode::IdDoesNotExist => "idDoesNotExist",
            OaiErrorCode::NoRecordsMatch => "noRecordsMatch",
            OaiErrorCode::NoMetadataFormats => "noMetadataFormats",
            OaiErrorCode::NoSetHierarchy => "noSetHierarchy",
        }
    }
}

impl fmt::Display for OaiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for OAI-PMH request handling.
///
/// Every variant except [`OaiError::Provider`] maps one-to-one onto an
/// [`OaiErrorCode`]. Provider errors are internal diagnostics; the handler
/// decides which protocol code they surface as depending on the verb.
#[derive(Debug, thiserror::Error)]
pub enum OaiError {
    #[error("{message}")]
    BadArgument { message: String },

    #[error("{message}")]
    BadResumptionToken { message: String },

    #[error("{message}")]
    BadVerb { message: String },

    #[error("{message}")]
    CannotDisseminateFormat { message: String },

    #[error("{message}")]
    IdDoesNotExist { message: String },

    #[error("{message}")]
    NoRecordsMatch { message: String },

    #[error("{message}")]
    NoMetadataFormats { message: String },

    #[error("{message}")]
    NoSetHierarchy { message: String },

    /// Errors from the user-provided repository provider
    #[error("Repository provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Malformed OAI identifier diagnostics.
///
/// These never reach a harvester directly; they are reported as
/// `idDoesNotExist` after being logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier '{identifier}' does not start with scheme '{scheme}'")]
    WrongScheme { identifier: String, scheme: String },

    #[error(
        "identifier '{identifier}' does not belong to repository '{repository_identifier}'"
    )]
    WrongRepository {
        identifier: String,
        repository_identifier: String,
    },

    #[error("identifier '{identifier}' has no local part")]
    MissingLocalPart { identifier: String },
}

/// Errors that can occur while building or loading a repository configuration.
///
/// These are deployment errors and should surface at startup rather than
/// per request.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A required configuration value was empty
    #[error("Configuration field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Invalid configuration provided
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Reading the configuration file failed
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization failed
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

// Convenience methods for creating common errors
impl OaiError {
    pub fn bad_argument(message: impl Into<String>) -> Self {
        Self::BadArgument {
            message: message.into(),
        }
    }

    pub fn bad_resumption_token(message: impl Into<String>) -> Self {
        Self::BadResumptionToken {
            message: message.into(),
        }
    }

    pub fn bad_verb(message: impl Into<String>) -> Self {
        Self::BadVerb {
            message: message.into(),
        }
    }

    pub fn cannot_disseminate_format(message: impl Into<String>) -> Self {
        Self::CannotDisseminateFormat {
            message: message.into(),
        }
    }

    pub fn id_does_not_exist(message: impl Into<String>) -> Self {
        Self::IdDoesNotExist {
            message: message.into(),
        }
    }

    pub fn no_records_match(message: impl Into<String>) -> Self {
        Self::NoRecordsMatch {
            message: message.into(),
        }
    }

    pub fn no_metadata_formats(message: impl Into<String>) -> Self {
        Self::NoMetadataFormats {
            message: message.into(),
        }
    }

    pub fn no_set_hierarchy(message: impl Into<String>) -> Self {
        Self::NoSetHierarchy {
            message: message.into(),
        }
    }

    /// Wrap a provider error
    pub fn provider_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Provider(Box::new(error))
    }

    /// Protocol code for this error.
    ///
    /// Provider errors have no code of their own and return `None`; callers
    /// must map them explicitly.
    pub fn code(&self) -> Option<OaiErrorCode> {
        match self {
            OaiError::BadArgument { .. } => Some(OaiErrorCode::BadArgument),
            OaiError::BadResumptionToken { .. } => Some(OaiErrorCode::BadResumptionToken),
            OaiError::BadVerb { .. } => Some(OaiErrorCode::BadVerb),
            OaiError::CannotDisseminateFormat { .. } => {
                Some(OaiErrorCode::CannotDisseminateFormat)
            }
            OaiError::IdDoesNotExist { .. } => Some(OaiErrorCode::IdDoesNotExist),
            OaiError::NoRecordsMatch { .. } => Some(OaiErrorCode::NoRecordsMatch),
            OaiError::NoMetadataFormats { .. } => Some(OaiErrorCode::NoMetadataFormats),
            OaiError::NoSetHierarchy { .. } => Some(OaiErrorCode::NoSetHierarchy),
            OaiError::Provider(_) => None,
        }
    }
}

impl BuildError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type OaiResult<T> = Result<T, OaiError>;
pub type BuildResult<T> = Result<T, BuildError>;
