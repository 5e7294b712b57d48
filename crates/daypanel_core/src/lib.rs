//! Core domain logic for DayPanel.
//! This crate is the single source of truth for business invariants.

pub mod calendar;
pub mod config;
pub mod health;
pub mod logging;
pub mod model;
pub mod sample;
pub mod store;
pub mod summary;

pub use calendar::{
    days_in_month, entries_for_date, entries_for_key, is_today, is_today_local, month_length,
    month_overview, shift_month, CalendarDay, CalendarError, CalendarResult, DayEntries, Dated,
    MonthStep,
};
pub use config::{ConfigError, DashboardConfig};
pub use health::threshold::{
    alert_messages, alert_summary, classify, classify_blood_pressure, evaluate, AlertMetric,
    HealthAlert, MetricType, Status,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::date::{date_key, normalize_date, DateError};
pub use model::expense::{Expense, ExpenseCategory, ExpenseId, NewExpense};
pub use model::health::{HealthError, HealthReading, NewReading, ReadingId, Vitals};
pub use model::task::{NewTask, Task, TaskId, TaskPriority};
pub use store::expense_ledger::{ExpenseError, ExpenseLedger};
pub use store::health_log::{HealthLog, RecordOutcome};
pub use store::task_board::{TaskBoard, TaskError, TaskProgress};
pub use summary::quick_stats::{quick_stats, HealthStatus, QuickStats};
pub use summary::spending::{
    budget_usage, category_breakdown, daily_totals, expense_total, BudgetUsage, CategoryShare,
    DailyTotal,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
