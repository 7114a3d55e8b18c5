//! Argument validation shared by the verb handlers.

use crate::datestamp::{Bound, Granularity, HarvestDate, parse_harvest_date};
use crate::error::{OaiError, OaiResult};
use crate::metadata_format::MetadataFormatRegistry;
use crate::verb_handler::core::{OaiRequest, Verb};
use crate::verb_handler::errors;
use chrono::{DateTime, Utc};

/// Reject repeated, unknown and resumption-token arguments.
pub(crate) fn check_arguments(verb: Verb, request: &OaiRequest) -> OaiResult<()> {
    if let Some(repeated) = request.repeated_arguments.iter().find(|a| *a != "verb") {
        return Err(OaiError::bad_argument(format!(
            "The argument \"{}\" is repeated.",
            repeated
        )));
    }

    let legal = verb.legal_arguments();
    if let Some(illegal) = request.params.keys().find(|k| !legal.contains(&k.as_str())) {
        return Err(OaiError::bad_argument(format!(
            "The argument \"{}\" is illegal for the verb {}.",
            illegal, verb
        )));
    }

    // No tokens are ever issued, so none can be valid.
    if request.params.contains_key("resumptionToken") {
        return Err(OaiError::bad_resumption_token(errors::BAD_RESUMPTION_TOKEN));
    }

    Ok(())
}

/// The requested metadata prefix, or the configured default when absent.
pub(crate) fn metadata_prefix(
    request: &OaiRequest,
    default_prefix: &str,
    formats: &MetadataFormatRegistry,
) -> OaiResult<String> {
    let prefix = request
        .params
        .get("metadataPrefix")
        .map(String::as_str)
        .unwrap_or(default_prefix);

    if !formats.contains(prefix) {
        return Err(OaiError::cannot_disseminate_format(
            errors::cannot_disseminate(prefix),
        ));
    }
    Ok(prefix.to_string())
}

/// Selective-harvesting constraints from `from`, `until` and `set`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct HarvestFilter {
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    pub set: Option<String>,
}

impl HarvestFilter {
    pub fn from_request(request: &OaiRequest, granularity: Granularity) -> OaiResult<Self> {
        let from = parse_bound(request, "from", Bound::From, granularity)?;
        let until = parse_bound(request, "until", Bound::Until, granularity)?;

        if let (Some(from), Some(until)) = (&from, &until) {
            if from.granularity != until.granularity {
                return Err(OaiError::bad_argument(
                    "The from and until arguments must have the same granularity.",
                ));
            }
            if from.instant > until.instant {
                return Err(OaiError::bad_argument(
                    "The from argument must be less than or equal to the until argument.",
                ));
            }
        }

        Ok(Self {
            from: from.map(|d| d.instant),
            until: until.map(|d| d.instant),
            set: request.params.get("set").cloned(),
        })
    }

    pub fn is_selective(&self) -> bool {
        self.from.is_some() || self.until.is_some() || self.set.is_some()
    }

    pub fn matches(&self, last_modified: &DateTime<Utc>, sets: &[String]) -> bool {
        self.from.is_none_or(|from| *last_modified >= from)
            && self.until.is_none_or(|until| *last_modified <= until)
            && self
                .set
                .as_ref()
                .is_none_or(|spec| sets.iter().any(|s| s == spec))
    }
}

fn parse_bound(
    request: &OaiRequest,
    name: &str,
    bound: Bound,
    granularity: Granularity,
) -> OaiResult<Option<HarvestDate>> {
    let Some(value) = request.params.get(name) else {
        return Ok(None);
    };

    let parsed = parse_harvest_date(value, bound).ok_or_else(|| {
        OaiError::bad_argument(format!(
            "The value \"{}\" of the {} argument is not a valid datestamp.",
            value, name
        ))
    })?;

    if parsed.granularity > granularity {
        return Err(OaiError::bad_argument(format!(
            "The {} argument is finer than the repository granularity {}.",
            name, granularity
        )));
    }
    Ok(Some(parsed))
}
