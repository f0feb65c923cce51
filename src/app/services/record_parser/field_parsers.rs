//! Field parsing utilities for daily rainfall records
//!
//! Each function validates one field in isolation and returns the
//! matching [`RecordError`] variant on failure, so the record parser can
//! chain them with `?` and stop at the first failure.

use crate::constants::{FIELD_DELIMITER, INPUT_FIELD_COUNT, MAX_MONTH, MIN_MONTH};
use crate::error::RecordError;
use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// Split a raw line into exactly [`INPUT_FIELD_COUNT`] trimmed fields
pub fn split_fields(line: &str) -> Result<[&str; INPUT_FIELD_COUNT], RecordError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();

    fields
        .try_into()
        .map_err(|fields: Vec<&str>| RecordError::MalformedLine {
            expected: INPUT_FIELD_COUNT,
            found: fields.len(),
        })
}

/// Parse a year within `range`
pub fn parse_year(value: &str, range: &RangeInclusive<i32>) -> Result<i32, RecordError> {
    value
        .parse::<i32>()
        .ok()
        .filter(|year| range.contains(year))
        .ok_or_else(|| RecordError::InvalidYear {
            value: value.to_string(),
        })
}

/// Parse a month number, 1 to 12
pub fn parse_month(value: &str) -> Result<u32, RecordError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|month| (MIN_MONTH..=MAX_MONTH).contains(month))
        .ok_or_else(|| RecordError::InvalidMonth {
            value: value.to_string(),
        })
}

/// Parse a day of month that exists in the given year and month
///
/// Uses the proleptic Gregorian calendar, so 29 February is only accepted
/// in leap years.
pub fn parse_day(value: &str, year: i32, month: u32) -> Result<u32, RecordError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .ok_or_else(|| RecordError::InvalidDay {
            value: value.to_string(),
            year,
            month,
        })
}

/// Parse a finite, non-negative rainfall amount
pub fn parse_amount(value: &str) -> Result<f64, RecordError> {
    let amount = value
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or_else(|| RecordError::InvalidAmount {
            value: value.to_string(),
        })?;

    // "-0" parses as negative zero
    Ok(if amount == 0.0 { 0.0 } else { amount })
}
