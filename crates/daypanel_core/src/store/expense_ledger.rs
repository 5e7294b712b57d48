//! Expense list state container.
//!
//! # Invariants
//! - Stored amounts are never negative.
//! - Expenses are immutable once added; deletion is the only other write.

use crate::model::expense::{Expense, ExpenseCategory, ExpenseId, NewExpense, UnknownCategory};
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseError {
    NegativeAmount(Decimal),
    EmptyDescription,
    UnknownCategory(String),
    NotFound(ExpenseId),
}

impl Display for ExpenseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "expense amount must not be negative, got {amount}")
            }
            Self::EmptyDescription => write!(f, "expense description cannot be empty"),
            Self::UnknownCategory(label) => write!(f, "unknown expense category `{label}`"),
            Self::NotFound(id) => write!(f, "expense not found: {id}"),
        }
    }
}

impl Error for ExpenseError {}

impl From<UnknownCategory> for ExpenseError {
    fn from(value: UnknownCategory) -> Self {
        Self::UnknownCategory(value.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Validates and appends one expense.
    pub fn add(&mut self, new_expense: NewExpense) -> Result<ExpenseId, ExpenseError> {
        if new_expense.amount < Decimal::ZERO {
            warn!("event=expense_add module=expenses status=rejected reason=negative_amount");
            return Err(ExpenseError::NegativeAmount(new_expense.amount));
        }
        let description = new_expense.description.trim();
        if description.is_empty() {
            warn!("event=expense_add module=expenses status=rejected reason=empty_description");
            return Err(ExpenseError::EmptyDescription);
        }

        let id = Uuid::new_v4();
        self.expenses.push(Expense {
            id,
            date: new_expense.date,
            amount: new_expense.amount,
            category: new_expense.category,
            description: description.to_string(),
            recurring: new_expense.recurring,
        });
        debug!(
            "event=expense_add module=expenses status=ok expense_id={} category={}",
            id, new_expense.category
        );
        Ok(id)
    }

    /// Form-entry path: the category arrives as a label and the expense is
    /// never recurring.
    pub fn add_from_form(
        &mut self,
        date: NaiveDate,
        amount: Decimal,
        category_label: &str,
        description: &str,
    ) -> Result<ExpenseId, ExpenseError> {
        let category = category_label.parse::<ExpenseCategory>()?;
        self.add(NewExpense {
            date,
            amount,
            category,
            description: description.to_string(),
            recurring: false,
        })
    }

    pub fn delete(&mut self, id: ExpenseId) -> Result<Expense, ExpenseError> {
        let position = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(ExpenseError::NotFound(id))?;
        let removed = self.expenses.remove(position);
        debug!(
            "event=expense_delete module=expenses status=ok expense_id={} count={}",
            id,
            self.expenses.len()
        );
        Ok(removed)
    }

    /// Expenses in insertion order.
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Newest insertion first.
    pub fn recent(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
