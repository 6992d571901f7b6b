//! Parsing of raw wire values into domain values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::{ValidationError, ValidationMode};

/// Parses a decimal from its textual wire form.
///
/// Accepts plain (`"1500.00"`) and scientific (`"1.5e3"`) notation.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::InvalidDecimal {
            field,
            value: raw.to_string(),
        })
}

/// Parses a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are converted to UTC before the date is taken. A timestamp
/// without an offset is read as UTC.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc).date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts.date());
        }
    }

    Err(ValidationError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

/// Resolves an absent monetary field according to `mode`.
///
/// Lenient mode reads it as zero; strict mode rejects it.
pub fn require_amount(
    mode: ValidationMode,
    record: impl FnOnce() -> String,
    field: &'static str,
    value: Option<Decimal>,
) -> Result<Decimal, ValidationError> {
    match (value, mode) {
        (Some(v), _) => Ok(v),
        (None, ValidationMode::Lenient) => Ok(Decimal::ZERO),
        (None, ValidationMode::Strict) => Err(ValidationError::MissingField {
            record: record(),
            field,
        }),
    }
}
