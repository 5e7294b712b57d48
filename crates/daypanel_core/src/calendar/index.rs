//! Date-to-entry indexing over borrowed record lists.

use crate::model::date::{normalize_date, DateError};
use crate::model::expense::Expense;
use crate::model::health::HealthReading;
use crate::model::task::Task;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A record that sits on one calendar day.
pub trait Dated {
    fn calendar_date(&self) -> NaiveDate;
}

impl Dated for Task {
    fn calendar_date(&self) -> NaiveDate {
        self.due_date
    }
}

impl Dated for Expense {
    fn calendar_date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for HealthReading {
    fn calendar_date(&self) -> NaiveDate {
        self.date
    }
}

/// Entries of the three feature areas that fall on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntries<'a> {
    pub date: NaiveDate,
    pub tasks: Vec<&'a Task>,
    pub expenses: Vec<&'a Expense>,
    pub health: Vec<&'a HealthReading>,
}

impl DayEntries<'_> {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.expenses.is_empty() && self.health.is_empty()
    }

    /// Sum of the day's expense amounts.
    pub fn expense_total(&self) -> Decimal {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn has_health(&self) -> bool {
        !self.health.is_empty()
    }

    /// First `limit` tasks, as shown inside a month cell.
    pub fn task_preview(&self, limit: usize) -> &[&Task] {
        &self.tasks[..self.tasks.len().min(limit)]
    }
}

/// Returns the entries of each list dated `date`, in original order.
pub fn entries_for_date<'a>(
    date: NaiveDate,
    tasks: &'a [Task],
    expenses: &'a [Expense],
    readings: &'a [HealthReading],
) -> DayEntries<'a> {
    DayEntries {
        date,
        tasks: on_day(tasks, date),
        expenses: on_day(expenses, date),
        health: on_day(readings, date),
    }
}

/// Same as [`entries_for_date`], normalizing a textual date first.
pub fn entries_for_key<'a>(
    date: &str,
    tasks: &'a [Task],
    expenses: &'a [Expense],
    readings: &'a [HealthReading],
) -> Result<DayEntries<'a>, DateError> {
    let day = normalize_date(date)?;
    Ok(entries_for_date(day, tasks, expenses, readings))
}

fn on_day<T: Dated>(items: &[T], date: NaiveDate) -> Vec<&T> {
    items
        .iter()
        .filter(|item| item.calendar_date() == date)
        .collect()
}
