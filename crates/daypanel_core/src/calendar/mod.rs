//! Calendar grid generation and date-to-entry indexing.
//!
//! # Responsibility
//! - Build 7-column month grids (Sunday first) with leading blanks.
//! - Index task, expense and health lists by day without mutating them.
//! - Step the reference date one month backward or forward.
//!
//! # Invariants
//! - Months are 0-indexed at this API boundary (`0 = January`).
//! - Everything here is a pure function of its arguments, except
//!   `is_today_local`, which reads the host clock.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod grid;
pub mod index;
pub mod navigation;

pub use grid::{days_in_month, month_length, month_overview, CalendarDay};
pub use index::{entries_for_date, entries_for_key, DayEntries, Dated};
pub use navigation::{is_today, is_today_local, shift_month, MonthStep};

pub type CalendarResult<T> = Result<T, CalendarError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside `0..=11`.
    InvalidMonth(u32),
    /// The requested day cannot be represented by the date library.
    DateOutOfRange,
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => {
                write!(f, "invalid month {month}; expected 0 (January) to 11 (December)")
            }
            Self::DateOutOfRange => write!(f, "date is outside the supported calendar range"),
        }
    }
}

impl Error for CalendarError {}
