//! Error reporting for verb handlers.
//!
//! Every failure path in the dispatcher ends here. Protocol errors keep their
//! code and message; provider errors, which carry no protocol code, are
//! logged and normalized according to the verb that triggered them.

use crate::error::{OaiError, OaiErrorCode};
use crate::verb_handler::core::Verb;
use log::warn;
use serde::Serialize;

pub const NO_VERB: &str = "The request did not provide any verb.";
pub const REPEATED_VERB: &str = "The verb argument is repeated.";
pub const BAD_ARGUMENT: &str =
    "The request includes illegal arguments or is missing required arguments.";
pub const ID_DOES_NOT_EXIST: &str =
    "The value of the identifier argument is unknown or illegal in this repository.";
pub const BAD_RESUMPTION_TOKEN: &str =
    "The value of the resumptionToken argument is invalid or expired.";
pub const NO_SET_HIERARCHY: &str = "This repository does not support sets.";
pub const NO_RECORDS_MATCH: &str =
    "The combination of the values of the from, until and set arguments results in an empty list.";
pub const NO_METADATA_FORMATS: &str =
    "There are no metadata formats available for the specified item.";
pub const RECORDS_UNAVAILABLE: &str = "The repository could not enumerate its records.";
pub const SETS_UNAVAILABLE: &str = "The repository could not enumerate its sets.";

pub fn illegal_verb(verb: &str) -> String {
    format!("The verb \"{}\" is illegal", verb)
}

pub fn cannot_disseminate(prefix: &str) -> String {
    format!(
        "The metadata format \"{}\" is not supported by the item or by the repository.",
        prefix
    )
}

/// A protocol error ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: OaiErrorCode,
    pub message: String,
}

/// Build an error response. Never fails.
pub fn report(code: OaiErrorCode, message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        code,
        message: message.into(),
    }
}

/// Create an error response from an [`OaiError`].
///
/// Provider errors surface as `idDoesNotExist` for single-item verbs,
/// `noSetHierarchy` for `ListSets` and `noRecordsMatch` for list verbs.
pub fn create_error_response(
    error: OaiError,
    verb: Option<Verb>,
    request_id: &str,
) -> ErrorResponse {
    if let Some(code) = error.code() {
        return report(code, error.to_string());
    }

    warn!(
        "Repository provider failed during {} (request: '{}'): {}",
        verb.map(|v| v.as_str()).unwrap_or("dispatch"),
        request_id,
        error
    );

    match verb {
        Some(Verb::GetRecord) | Some(Verb::ListMetadataFormats) => {
            report(OaiErrorCode::IdDoesNotExist, ID_DOES_NOT_EXIST)
        }
        Some(Verb::ListSets) => report(OaiErrorCode::NoSetHierarchy, SETS_UNAVAILABLE),
        _ => report(OaiErrorCode::NoRecordsMatch, RECORDS_UNAVAILABLE),
    }
}
