// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a calendar day from either `YYYY-MM-DD` or an RFC3339 timestamp.
///
/// Timestamps are converted to UTC before the date is taken.
pub fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Today's UTC calendar day.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
