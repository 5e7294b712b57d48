//! Spending aggregates over the expense list.
//!
//! # Invariants
//! - Categories appear in `ExpenseCategory::ALL` order.
//! - Percentages are rounded to two decimal places.

use crate::model::expense::{Expense, ExpenseCategory};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

const PERCENT_SCALE: u32 = 2;

/// Spending measured against a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetUsage {
    pub spent: Decimal,
    pub budget: Decimal,
    /// `None` when the budget is zero.
    pub percent: Option<Decimal>,
    /// `percent` capped at 100, for progress bars.
    pub bar_percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub total: Decimal,
    /// Share of all spending.
    pub percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

pub fn expense_total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|expense| expense.amount).sum()
}

pub fn budget_usage(expenses: &[Expense], budget: Decimal) -> BudgetUsage {
    let spent = expense_total(expenses);
    let percent = percent_of(spent, budget);
    BudgetUsage {
        spent,
        budget,
        percent,
        bar_percent: percent.map(|value| value.min(Decimal::ONE_HUNDRED)),
    }
}

/// Per-category totals, skipping categories with nothing spent.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryShare> {
    let grand_total = expense_total(expenses);
    ExpenseCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let total: Decimal = expenses
                .iter()
                .filter(|expense| expense.category == category)
                .map(|expense| expense.amount)
                .sum();
            if total.is_zero() {
                return None;
            }
            Some(CategoryShare {
                category,
                total,
                percent: percent_of(total, grand_total).unwrap_or(Decimal::ZERO),
            })
        })
        .collect()
}

/// One total per day for the `days` days ending at `end`, oldest first.
///
/// Days without spending are reported as zero.
pub fn daily_totals(expenses: &[Expense], end: NaiveDate, days: u32) -> Vec<DailyTotal> {
    (0..days)
        .rev()
        .filter_map(|offset| end.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| DailyTotal {
            date,
            total: expenses
                .iter()
                .filter(|expense| expense.date == date)
                .map(|expense| expense.amount)
                .sum(),
        })
        .collect()
}

fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .map(|value| value.round_dp(PERCENT_SCALE))
}

#[cfg(test)]
mod tests {
    use super::percent_of;
    use rust_decimal::Decimal;

    #[test]
    fn percent_of_zero_whole_is_undefined() {
        assert_eq!(percent_of(Decimal::from(5), Decimal::ZERO), None);
    }

    #[test]
    fn percent_of_rounds_to_two_places() {
        assert_eq!(
            percent_of(Decimal::from(1), Decimal::from(3)),
            Some(Decimal::new(3333, 2))
        );
    }
}
