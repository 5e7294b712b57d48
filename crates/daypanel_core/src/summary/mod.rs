//! Derived dashboard values.
//!
//! Every function here recomputes from the authoritative lists on each call;
//! nothing is cached.

pub mod quick_stats;
pub mod spending;
