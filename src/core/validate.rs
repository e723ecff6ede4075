//! Pure parameter validators shared by every resource builder.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::core::{Endpoint, Feature, MsError, Sort};

const DATE_FMT: &str = "%Y-%m-%d";
const DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";

/// A date accepted by the API, either already structured or as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// A calendar date.
    Date(NaiveDate),
    /// A date and time without zone.
    DateTime(NaiveDateTime),
    /// Unparsed text, checked against the accepted formats.
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt.naive_utc())
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for DateInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

/// Parses an endpoint name.
///
/// # Errors
///
/// Returns [`MsError::InvalidEndpoint`] for anything but the eight known names.
pub fn validate_endpoint(name: &str) -> Result<Endpoint, MsError> {
    name.parse()
}

/// Normalizes a date into the form the API accepts.
///
/// `YYYY-MM-DD` text is returned as given. Date-times at exactly midnight collapse to
/// the date only; any other time is rendered as `YYYY-MM-DDTHH:MM:SS`.
///
/// # Errors
///
/// Returns [`MsError::InvalidDateFormat`] when text matches neither accepted format.
pub fn validate_date(value: impl Into<DateInput>) -> Result<String, MsError> {
    match value.into() {
        DateInput::Date(d) => Ok(d.format(DATE_FMT).to_string()),
        DateInput::DateTime(dt) => Ok(strip_midnight(dt)),
        DateInput::Text(s) => {
            if NaiveDate::parse_from_str(&s, DATE_FMT).is_ok() {
                return Ok(s);
            }
            NaiveDateTime::parse_from_str(&s, DATETIME_FMT)
                .map(strip_midnight)
                .map_err(|_| MsError::InvalidDateFormat(s))
        }
    }
}

fn strip_midnight(dt: NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format(DATE_FMT).to_string()
    } else {
        dt.format(DATETIME_FMT).to_string()
    }
}

/// Parses a sort direction.
///
/// # Errors
///
/// Returns [`MsError::InvalidSort`] unless the value is exactly `asc` or `desc`.
pub fn validate_sort(value: &str) -> Result<Sort, MsError> {
    value.parse()
}

/// Checks that `limit` is within `1..=1000`.
///
/// # Errors
///
/// Returns [`MsError::InvalidLimit`] otherwise.
pub fn validate_limit(limit: i64) -> Result<i64, MsError> {
    if (1..=1000).contains(&limit) {
        Ok(limit)
    } else {
        Err(MsError::InvalidLimit(limit))
    }
}

/// Checks that `offset` is within `0..=1000`.
///
/// # Errors
///
/// Returns [`MsError::InvalidOffset`] otherwise.
pub fn validate_offset(offset: i64) -> Result<i64, MsError> {
    if (0..=1000).contains(&offset) {
        Ok(offset)
    } else {
        Err(MsError::InvalidOffset(offset))
    }
}

/// Checks that `endpoint` accepts a free-text search.
///
/// # Errors
///
/// Returns [`MsError::UnsupportedFeature`] for endpoints other than tickers and exchanges.
pub fn validate_search(value: &str, endpoint: Endpoint) -> Result<String, MsError> {
    endpoint.require(Feature::Search)?;
    Ok(value.to_string())
}
