//! Month grid layout.

use crate::calendar::index::{entries_for_date, DayEntries};
use crate::calendar::navigation::is_today;
use crate::calendar::{CalendarError, CalendarResult};
use crate::model::expense::Expense;
use crate::model::health::HealthReading;
use crate::model::task::Task;
use chrono::{Datelike, NaiveDate};

/// One concrete cell of a month overview.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub entries: DayEntries<'a>,
}

/// Returns the month grid for `year` / 0-indexed `month`.
///
/// The sequence starts with one `None` per weekday before the 1st (Sunday
/// first), followed by every day of the month in order.
///
/// # Errors
/// - `InvalidMonth` when `month > 11`.
/// - `DateOutOfRange` when the year is outside the date library's range.
pub fn days_in_month(year: i32, month: u32) -> CalendarResult<Vec<Option<NaiveDate>>> {
    let first = first_of_month(year, month)?;
    let leading_blanks = first.weekday().num_days_from_sunday() as usize;
    let length = month_length(year, month)? as usize;

    let mut days = Vec::with_capacity(leading_blanks + length);
    days.resize(leading_blanks, None);
    days.extend(first.iter_days().take(length).map(Some));
    if days.len() != leading_blanks + length {
        // Only reachable at the very end of the supported range.
        return Err(CalendarError::DateOutOfRange);
    }
    Ok(days)
}

/// Number of days in a 0-indexed month, using Gregorian leap years.
pub fn month_length(year: i32, month: u32) -> CalendarResult<u32> {
    let length = match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        other => return Err(CalendarError::InvalidMonth(other)),
    };
    Ok(length)
}

/// Month grid with each concrete day paired with its entries.
pub fn month_overview<'a>(
    year: i32,
    month: u32,
    today: NaiveDate,
    tasks: &'a [Task],
    expenses: &'a [Expense],
    readings: &'a [HealthReading],
) -> CalendarResult<Vec<Option<CalendarDay<'a>>>> {
    let grid = days_in_month(year, month)?;
    Ok(grid
        .into_iter()
        .map(|cell| {
            cell.map(|date| CalendarDay {
                date,
                is_today: is_today(date, today),
                entries: entries_for_date(date, tasks, expenses, readings),
            })
        })
        .collect())
}

pub(crate) fn first_of_month(year: i32, month: u32) -> CalendarResult<NaiveDate> {
    if month > 11 {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(CalendarError::DateOutOfRange)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::{is_leap_year, month_length};
    use crate::calendar::CalendarError;

    #[test]
    fn leap_years_follow_gregorian_rules() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_length_covers_every_month() {
        let lengths = (0..12)
            .map(|month| month_length(2023, month).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
        assert_eq!(month_length(2024, 12), Err(CalendarError::InvalidMonth(12)));
    }
}
