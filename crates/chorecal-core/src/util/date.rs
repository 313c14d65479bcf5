//! Calendar-date parsing and key formatting.
//!
//! All scheduling math in this workspace is calendar-date math: values are
//! `chrono::NaiveDate`, never instants, so no timezone or time-of-day can
//! leak into comparisons. Dates cross crate boundaries as `YYYY-MM-DD`
//! keys produced by [`date_key`].

use chrono::NaiveDate;

use crate::constants::DATE_KEY_FORMAT;
use crate::error::{CoreError, CoreResult};

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Only the canonical zero-padded shape is accepted: `%m`/`%d` would also
/// take `2024-1-5`, but a non-canonical string stored as a completion key
/// could never match the keys [`date_key`] produces.
///
/// ## Errors
/// Returns [`CoreError::InvalidDate`] when the input is not a valid
/// ISO calendar date in canonical form.
pub fn parse_date(input: &str) -> CoreResult<NaiveDate> {
    let parsed =
        NaiveDate::parse_from_str(input, DATE_KEY_FORMAT).map_err(|_| CoreError::InvalidDate {
            input: input.to_string(),
        })?;
    if date_key(parsed) != input {
        return Err(CoreError::InvalidDate {
            input: input.to_string(),
        });
    }
    Ok(parsed)
}

/// Format a calendar date as its canonical `YYYY-MM-DD` key.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}
