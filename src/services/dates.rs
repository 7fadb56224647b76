//! Calendar date parsing for billing day strings
//!
//! Day strings are parsed without any locale: ISO dates, RFC 3339
//! timestamps and a few common ISO-like datetime layouts. Timestamps are
//! reduced to their calendar date.

use crate::types::{BillingError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a day string into a calendar date
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    let mut last_err = None;
    for fmt in DATE_FORMATS {
        match NaiveDate::parse_from_str(trimmed, fmt) {
            Ok(date) => return Ok(date),
            Err(e) => last_err = Some(e),
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt.date());
        }
    }

    Err(BillingError::InvalidDate {
        input: input.to_string(),
        reason: last_err
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unrecognized date format".into()),
    })
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parse a stored weekday label ("Monday", "mon", ...)
pub fn parse_weekday_label(label: &str) -> Option<Weekday> {
    label.trim().parse().ok()
}
