//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `daypanel_core` linkage without a UI host.
//! - Print a deterministic digest of the sample data for one day.

use daypanel_core::sample::{sample_expenses, sample_readings, sample_tasks};
use daypanel_core::{entries_for_key, evaluate, normalize_date, quick_stats, DashboardConfig};
use std::process::ExitCode;

const DIGEST_DAY: &str = "2024-01-15";

fn main() -> ExitCode {
    println!("daypanel_core ping={}", daypanel_core::ping());
    println!("daypanel_core version={}", daypanel_core::core_version());

    match print_digest() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("daypanel_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_digest() -> Result<(), Box<dyn std::error::Error>> {
    let config = DashboardConfig::from_env()?;
    let day = normalize_date(DIGEST_DAY)?;
    let tasks = sample_tasks();
    let expenses = sample_expenses();
    let readings = sample_readings();

    let entries = entries_for_key(DIGEST_DAY, &tasks, &expenses, &readings)?;
    println!(
        "day={} tasks={} expenses={} spent={} health_entries={}",
        DIGEST_DAY,
        entries.tasks.len(),
        entries.expenses.len(),
        entries.expense_total(),
        entries.health.len()
    );

    let stats = quick_stats(day, &tasks, &expenses, &readings, &config);
    println!(
        "tasks_today={}/{} upcoming={} daily_budget={} health={:?}",
        stats.tasks_today.completed,
        stats.tasks_today.total,
        stats.upcoming_tasks,
        stats.daily_budget,
        stats.health
    );

    for reading in &readings {
        for alert in evaluate(&reading.vitals()) {
            println!("alert date={} time={} {}", reading.date, reading.time.format("%H:%M"), alert);
        }
    }
    Ok(())
}
