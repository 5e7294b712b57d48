//! Expense domain model.
//!
//! # Responsibility
//! - Define the expense record and its fixed category set.
//!
//! # Invariants
//! - `amount` is never negative.
//! - Category order is stable; summaries iterate `ExpenseCategory::ALL`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for an expense.
pub type ExpenseId = Uuid;

/// Fixed spending categories.
///
/// Serialized with their display label (`"Food"`, `"Healthcare"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Healthcare,
    Transport,
    Housing,
    Entertainment,
    Shopping,
    Bills,
    Other,
}

impl ExpenseCategory {
    /// Every category in display order.
    pub const ALL: [ExpenseCategory; 8] = [
        Self::Food,
        Self::Healthcare,
        Self::Transport,
        Self::Housing,
        Self::Entertainment,
        Self::Shopping,
        Self::Bills,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Healthcare => "Healthcare",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }
}

impl Display for ExpenseCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown expense category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    /// Case-insensitive match against category labels.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| UnknownCategory(normalized.to_string()))
    }
}

/// One spending record owned by the expense ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub description: String,
    pub recurring: bool,
}

/// Insert shape for an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub description: String,
    pub recurring: bool,
}

#[cfg(test)]
mod tests {
    use super::{ExpenseCategory, UnknownCategory};

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("food".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Food));
        assert_eq!(" Bills ".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Bills));
        assert_eq!(
            "Groceries".parse::<ExpenseCategory>(),
            Err(UnknownCategory("Groceries".to_string()))
        );
    }

    #[test]
    fn labels_round_trip_for_every_category() {
        for category in ExpenseCategory::ALL {
            assert_eq!(category.label().parse::<ExpenseCategory>(), Ok(category));
        }
    }
}
