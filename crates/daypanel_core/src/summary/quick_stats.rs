//! Dashboard header figures for one day.

use crate::config::DashboardConfig;
use crate::health::threshold::evaluate;
use crate::model::expense::Expense;
use crate::model::health::HealthReading;
use crate::model::task::Task;
use crate::store::task_board::TaskProgress;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Latest reading is within every band.
    Good,
    /// Latest reading raised at least one alert.
    Attention,
    NoData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub date: NaiveDate,
    /// Tasks due on `date`.
    pub tasks_today: TaskProgress,
    /// Pending tasks due after `date`.
    pub upcoming_tasks: usize,
    pub spent_today: Decimal,
    pub daily_budget: Decimal,
    pub health: HealthStatus,
}

pub fn quick_stats(
    today: NaiveDate,
    tasks: &[Task],
    expenses: &[Expense],
    readings: &[HealthReading],
    config: &DashboardConfig,
) -> QuickStats {
    let due_today = tasks.iter().filter(|task| task.due_date == today);
    let tasks_today = TaskProgress {
        completed: due_today.clone().filter(|task| task.completed).count(),
        total: due_today.count(),
    };
    let upcoming_tasks = tasks
        .iter()
        .filter(|task| !task.completed && task.due_date > today)
        .count();
    let spent_today: Decimal = expenses
        .iter()
        .filter(|expense| expense.date == today)
        .map(|expense| expense.amount)
        .sum();

    QuickStats {
        date: today,
        tasks_today,
        upcoming_tasks,
        spent_today,
        daily_budget: config.daily_budget,
        health: latest_health_status(readings),
    }
}

fn latest_health_status(readings: &[HealthReading]) -> HealthStatus {
    // Reversed so ties resolve to the earliest entry of a newest-first log.
    let latest = readings
        .iter()
        .rev()
        .max_by_key(|reading| (reading.date, reading.time));
    match latest {
        None => HealthStatus::NoData,
        Some(reading) if evaluate(&reading.vitals()).is_empty() => HealthStatus::Good,
        Some(_) => HealthStatus::Attention,
    }
}
