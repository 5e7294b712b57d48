//! Normalized calendar date keys.
//!
//! # Responsibility
//! - Turn caller-provided date strings into `NaiveDate` keys.
//! - Render keys back to the canonical `YYYY-MM-DD` form.
//!
//! # Invariants
//! - Two records share a day iff their normalized keys are equal; this is
//!   the same as string equality of the `YYYY-MM-DD` rendering.
//! - Time zones are never applied; a timestamp keeps its written date.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical textual format for every date key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:[T ][0-9:.]+(?:Z|[+-]\d{2}:?\d{2})?)?$")
        .expect("valid iso date regex")
});

/// Date parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Input is not `YYYY-MM-DD` (optionally followed by an ISO time part),
    /// or names a day that does not exist.
    InvalidFormat(String),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for DateError {}

/// Parses a date or ISO timestamp into its normalized day key.
///
/// Accepts `2024-01-15` and `2024-01-15T08:30:00Z` alike; only the date part
/// is kept.
pub fn normalize_date(value: &str) -> Result<NaiveDate, DateError> {
    let trimmed = value.trim();
    let captures = ISO_DATE_PREFIX_RE
        .captures(trimmed)
        .ok_or_else(|| DateError::InvalidFormat(trimmed.to_string()))?;
    let date_part = captures
        .get(1)
        .map(|m| m.as_str())
        .ok_or_else(|| DateError::InvalidFormat(trimmed.to_string()))?;
    NaiveDate::parse_from_str(date_part, DATE_KEY_FORMAT)
        .map_err(|_| DateError::InvalidFormat(trimmed.to_string()))
}

/// Renders a date as its `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}
