//! Error types.
//!
//! Only input parsing can fail. The estimation stages themselves
//! (despatch, transit, formatting) are total over parsed input.

use chrono::Datelike;
use thiserror::Error;

/// Earliest year accepted from input.
pub const MIN_YEAR: i32 = 1900;
/// Latest year accepted from input.
pub const MAX_YEAR: i32 = 9999;

/// Result alias used throughout the crate.
pub type DespatchResult<T> = Result<T, DespatchError>;

/// Errors raised while turning raw string input into typed values.
#[derive(Debug, Error)]
pub enum DespatchError {
    /// A date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A date parses but lies outside the supported year range.
    #[error("date '{value}' is outside years {}..={}", MIN_YEAR, MAX_YEAR)]
    DateOutOfRange { value: String },
    /// A field value could not be parsed into its expected type.
    #[error("invalid value '{value}' for field '{key}': {reason}")]
    InvalidField {
        key: String,
        value: String,
        reason: String,
    },
    /// A required field is absent from a metaobject record.
    #[error("missing required field '{key}'")]
    MissingField { key: String },
}

impl DespatchError {
    pub(crate) fn invalid_field(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidField {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Parses a `YYYY-MM-DD` calendar date within [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn parse_date(value: &str) -> DespatchResult<chrono::NaiveDate> {
    let date = chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| {
        DespatchError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(DespatchError::DateOutOfRange {
            value: value.to_string(),
        });
    }
    Ok(date)
}
