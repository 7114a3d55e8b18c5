//! Datestamp granularity and selective-harvesting date handling.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The finest datestamp granularity a repository commits to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Granularity {
    /// `YYYY-MM-DD`
    #[serde(rename = "YYYY-MM-DD")]
    Day,
    /// `YYYY-MM-DDThh:mm:ssZ`
    #[serde(rename = "YYYY-MM-DDThh:mm:ssZ")]
    #[default]
    Seconds,
}

impl Granularity {
    /// The pattern advertised in `Identify`.
    pub fn pattern(&self) -> &'static str {
        match self {
            Granularity::Day => "YYYY-MM-DD",
            Granularity::Seconds => "YYYY-MM-DDThh:mm:ssZ",
        }
    }

    /// Format a timestamp at this granularity.
    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        match self {
            Granularity::Day => timestamp.format("%Y-%m-%d").to_string(),
            Granularity::Seconds => timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Which end of a harvesting window a parsed date bounds.
///
/// A day-granularity `until` covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    From,
    Until,
}

/// A `from`/`until` argument after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestDate {
    pub instant: DateTime<Utc>,
    pub granularity: Granularity,
}

/// Parse a `from`/`until` argument.
///
/// Returns `None` when the value matches neither protocol granularity.
pub fn parse_harvest_date(value: &str, bound: Bound) -> Option<HarvestDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let time = match bound {
            Bound::From => NaiveTime::from_hms_opt(0, 0, 0)?,
            Bound::Until => NaiveTime::from_hms_opt(23, 59, 59)?,
        };
        return Some(HarvestDate {
            instant: NaiveDateTime::new(date, time).and_utc(),
            granularity: Granularity::Day,
        });
    }

    // Only the literal `Z` designator is legal; offsets are rejected.
    let naive = value.strip_suffix('Z')?;
    NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| HarvestDate {
            instant: dt.and_utc(),
            granularity: Granularity::Seconds,
        })
}
