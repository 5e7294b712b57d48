use chrono::NaiveDate;
use daypanel_core::sample::{sample_expenses, sample_readings, sample_tasks};
use daypanel_core::{
    entries_for_date, entries_for_key, month_overview, DateError, ExpenseCategory,
};
use rust_decimal::Decimal;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn sample_day_returns_matching_entries_only() {
    let tasks = sample_tasks();
    let expenses = sample_expenses();
    let readings = sample_readings();

    let entries = entries_for_key("2024-01-15", &tasks, &expenses, &readings).unwrap();

    assert_eq!(entries.tasks.len(), 1);
    assert_eq!(entries.tasks[0].text, "Morning workout");
    assert_eq!(entries.expenses.len(), 1);
    assert_eq!(entries.expenses[0].amount, Decimal::new(4550, 2));
    assert_eq!(entries.expenses[0].category, ExpenseCategory::Food);
    assert!(entries.health.is_empty());
    assert!(!entries.has_health());
}

#[test]
fn day_without_records_is_empty() {
    let tasks = sample_tasks();
    let expenses = sample_expenses();
    let readings = sample_readings();

    let entries = entries_for_date(ymd(2024, 1, 1), &tasks, &expenses, &readings);
    assert!(entries.is_empty());
    assert_eq!(entries.expense_total(), Decimal::ZERO);
}

#[test]
fn entries_preserve_original_relative_order() {
    let tasks = sample_tasks();
    let expenses = sample_expenses();
    let readings = sample_readings();

    let entries = entries_for_date(ymd(2024, 1, 17), &tasks, &expenses, &readings);
    let texts = entries
        .tasks
        .iter()
        .map(|task| task.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["Dentist appointment", "Grocery shopping"]);
    assert_eq!(entries.task_preview(1).len(), 1);
    assert_eq!(entries.task_preview(5).len(), 2);

    let health_day = entries_for_date(ymd(2024, 1, 16), &tasks, &expenses, &readings);
    assert_eq!(health_day.health.len(), 2);
    assert_eq!(health_day.health[0].id, readings[0].id);
    assert_eq!(health_day.health[1].id, readings[1].id);
}

#[test]
fn indexing_does_not_touch_inputs() {
    let tasks = sample_tasks();
    let expenses = sample_expenses();
    let readings = sample_readings();

    let _ = entries_for_date(ymd(2024, 1, 16), &tasks, &expenses, &readings);

    assert_eq!(tasks, sample_tasks());
    assert_eq!(expenses, sample_expenses());
    assert_eq!(readings, sample_readings());
}

#[test]
fn timestamp_keys_normalize_to_their_day() {
    let tasks = sample_tasks();
    let expenses = sample_expenses();
    let readings = sample_readings();

    let entries =
        entries_for_key("2024-01-16T21:10:00Z", &tasks, &expenses, &readings).unwrap();
    assert_eq!(entries.date, ymd(2024, 1, 16));
    assert_eq!(entries.expense_total(), Decimal::new(12000, 2));

    let err = entries_for_key("16/01/2024", &tasks, &expenses, &readings).unwrap_err();
    assert_eq!(err, DateError::InvalidFormat("16/01/2024".to_string()));
}

#[test]
fn month_overview_pairs_grid_cells_with_entries() {
    let tasks = sample_tasks();
    let expenses = sample_expenses();
    let readings = sample_readings();
    let today = ymd(2024, 1, 15);

    let cells = month_overview(2024, 0, today, &tasks, &expenses, &readings).unwrap();

    // 2024-01-01 is a Monday.
    assert!(cells[0].is_none());
    let days = cells.iter().flatten().collect::<Vec<_>>();
    assert_eq!(days.len(), 31);

    let highlighted = days.iter().filter(|day| day.is_today).collect::<Vec<_>>();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].date, today);
    assert_eq!(highlighted[0].entries.expense_total(), Decimal::new(4550, 2));

    let total_tasks = days.iter().map(|day| day.entries.tasks.len()).sum::<usize>();
    assert_eq!(total_tasks, tasks.len());
}
