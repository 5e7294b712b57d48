//! Domain records for the dashboard feature areas.
//!
//! # Responsibility
//! - Define strongly typed task, expense and health records.
//! - Own date normalization shared by every calendar lookup.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - Every record date is a normalized day key (`YYYY-MM-DD`).

pub mod date;
pub mod expense;
pub mod health;
pub mod task;
