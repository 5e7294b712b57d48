//! Health vital-sign evaluation.
//!
//! Alerting and badge classification live together so their bands can never
//! drift apart.

pub mod threshold;
