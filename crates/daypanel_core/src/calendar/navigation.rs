//! Month stepping and today detection.
//!
//! # Invariants
//! - Stepping keeps the day-of-month when it exists in the target month.
//! - Otherwise the excess days roll over into the following month
//!   (2024-03-31 stepped back lands on 2024-03-02), never clamping to the
//!   target month's last day and never failing.

use crate::calendar::grid::first_of_month;
use crate::calendar::{CalendarError, CalendarResult};
use chrono::{Datelike, Days, Local, NaiveDate};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Direction of one month step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Prev,
    Next,
}

impl MonthStep {
    fn delta(self) -> i64 {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMonthStep(pub String);

impl Display for UnknownMonthStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown month step `{}`; expected prev|next", self.0)
    }
}

impl std::error::Error for UnknownMonthStep {}

impl FromStr for MonthStep {
    type Err = UnknownMonthStep;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "prev" | "previous" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            other => Err(UnknownMonthStep(other.to_string())),
        }
    }
}

/// Moves `date` one month in `step` direction with day rollover.
///
/// # Errors
/// - `DateOutOfRange` only at the edges of the date library's range.
pub fn shift_month(date: NaiveDate, step: MonthStep) -> CalendarResult<NaiveDate> {
    let month_index = i64::from(date.year()) * 12 + i64::from(date.month0()) + step.delta();
    let year = i32::try_from(month_index.div_euclid(12))
        .map_err(|_| CalendarError::DateOutOfRange)?;
    let month = month_index.rem_euclid(12) as u32;

    first_of_month(year, month)?
        .checked_add_days(Days::new(u64::from(date.day0())))
        .ok_or(CalendarError::DateOutOfRange)
}

/// Whether `date` is the same normalized day as `today`.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Same as [`is_today`] against the host's local date.
pub fn is_today_local(date: NaiveDate) -> bool {
    is_today(date, Local::now().date_naive())
}
