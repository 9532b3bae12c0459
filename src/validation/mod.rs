//! Field validation rules for roster entities
//!
//! Architecture: Pure Functions - every rule maps a raw string to a validated value or an error
//! - No rule keeps state between calls
//! - Date checks take the reference date explicitly so results are reproducible

use crate::domain::errors::{RosterError, RosterResult};
use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"\A[A-Z][a-z]*\z").unwrap();
    static ref STUDENT_ID_PATTERN: Regex = Regex::new(r"\A[0-9]{6}\z").unwrap();
    static ref GROUP_NAME_PATTERN: Regex = Regex::new(r"\A[0-9]+\z").unwrap();
}

/// Earliest accepted date of birth
pub const EARLIEST_BIRTH_DATE: (i32, u32, u32) = (1900, 1, 1);

/// Calendar layouts tried in order; year-first layouts win over day-first ones
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%d.%m.%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
];

/// Validate a personal name: one capital letter followed by lowercase letters
///
/// `field` names the value in the error message, e.g. "First name".
pub fn validate_name(value: &str, field: &str) -> RosterResult<String> {
    if !NAME_PATTERN.is_match(value) {
        return Err(RosterError::invalid_format(format!("{field} is invalid")));
    }
    Ok(value.to_string())
}

/// Parse a date of birth and check it lies within `[1900-01-01, today]`
pub fn validate_date(value: &str, today: NaiveDate) -> RosterResult<NaiveDate> {
    let parsed = parse_date(value)?;

    if !(earliest_birth_date()..=today).contains(&parsed) {
        return Err(RosterError::out_of_range("Date of birth is out of valid range"));
    }

    Ok(parsed)
}

/// Same as [`validate_date`] with today's local calendar date as the upper bound
pub fn validate_date_today(value: &str) -> RosterResult<NaiveDate> {
    validate_date(value, local_today())
}

/// Validate a student identifier: exactly six decimal digits
pub fn validate_student_id(value: &str) -> RosterResult<String> {
    if !STUDENT_ID_PATTERN.is_match(value) {
        return Err(RosterError::invalid_format("Student ID is invalid"));
    }
    Ok(value.to_string())
}

/// Validate a group name: one or more decimal digits
pub fn validate_group_name(value: &str) -> RosterResult<String> {
    if !GROUP_NAME_PATTERN.is_match(value) {
        return Err(RosterError::invalid_format("Group name is invalid"));
    }
    Ok(value.to_string())
}

/// Parse a calendar date from the start of `value`
///
/// Text after the date (a time of day, an offset, trailing words) is ignored as long as
/// it does not continue the last number, so "2000-05-15 10:00" and RFC 3339 timestamps
/// yield their date component.
pub fn parse_date(value: &str) -> RosterResult<NaiveDate> {
    let trimmed = value.trim();

    for format in DATE_FORMATS {
        if let Ok((date, rest)) = NaiveDate::parse_and_remainder(trimmed, format) {
            if !rest.starts_with(|c: char| c.is_ascii_digit()) {
                return Ok(date);
            }
        }
    }

    Err(RosterError::invalid_format("invalid date"))
}

/// Current local calendar date
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn earliest_birth_date() -> NaiveDate {
    let (year, month, day) = EARLIEST_BIRTH_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
