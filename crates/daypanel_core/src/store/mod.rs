//! Feature-area state containers.
//!
//! # Responsibility
//! - Give each record list exactly one owner.
//! - Expose the defined mutations (add/toggle/replace/delete) and nothing
//!   else; readers borrow slices.
//!
//! # Invariants
//! - Stores never share or alias each other's lists.
//! - Derived values are computed by `crate::summary`, never cached here.

pub mod expense_ledger;
pub mod health_log;
pub mod task_board;
