//! Due Dates
//!
//! Conversions between the `datetime-local` input format (wall-clock time in
//! the browser's zone), the backend's ISO-8601 strings, and display text.

use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Value format of `<input type="datetime-local">`
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
/// Wire format sent to the backend, e.g. `2025-04-01T18:30:00+09:00`
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DueDateError {
    #[error("invalid due date: {0}")]
    Invalid(String),
    #[error("due date is in the past")]
    InPast,
}

/// Parse a `datetime-local` value as wall-clock time in `tz`.
pub fn parse_input<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>, DueDateError> {
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, INPUT_FORMAT_SECONDS))
        .map_err(|_| DueDateError::Invalid(input.to_string()))?;

    // Wall-clock times skipped by a DST jump have no instant.
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DueDateError::Invalid(input.to_string()))
}

/// Reject instants strictly before `now`.
pub fn ensure_not_past<Tz: TimeZone>(due: &DateTime<Tz>, now: DateTime<Utc>) -> Result<(), DueDateError> {
    if due.with_timezone(&Utc) < now {
        return Err(DueDateError::InPast);
    }
    Ok(())
}

/// Format an instant in the fixed wire timezone.
pub fn to_wire<Tz, Target>(due: &DateTime<Tz>, target: &Target) -> String
where
    Tz: TimeZone,
    Target: TimeZone,
    Target::Offset: Display,
{
    due.with_timezone(target).format(WIRE_FORMAT).to_string()
}

/// Turn the optional form input into the `due_date` field of a request.
///
/// Empty input means no due date. When `now` is given, past instants are rejected.
pub fn prepare<L, Target>(
    input: &str,
    local: &L,
    target: &Target,
    now: Option<DateTime<Utc>>,
) -> Result<Option<String>, DueDateError>
where
    L: TimeZone,
    Target: TimeZone,
    Target::Offset: Display,
{
    if input.trim().is_empty() {
        return Ok(None);
    }
    let due = parse_input(input, local)?;
    if let Some(now) = now {
        ensure_not_past(&due, now)?;
    }
    Ok(Some(to_wire(&due, target)))
}

/// Parse a backend timestamp. Values without an offset are taken as UTC.
fn parse_wire(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, INPUT_FORMAT_SECONDS))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Backend timestamp → `datetime-local` value in `tz`, or empty when unparseable.
pub fn to_input_value<Tz>(value: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    parse_wire(value)
        .map(|due| due.with_timezone(tz).format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Backend timestamp → `YYYY-MM-DD HH:mm` in `tz`.
pub fn to_display<Tz>(value: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    parse_wire(value).map(|due| due.with_timezone(tz).format(DISPLAY_FORMAT).to_string())
}

/// Lower bound for the creation form's date picker.
pub fn min_input_value<Tz>(now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.with_timezone(tz).format(INPUT_FORMAT).to_string()
}
