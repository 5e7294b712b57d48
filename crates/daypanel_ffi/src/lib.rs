//! FFI boundary crate for the DayPanel UI host.

pub mod api;
