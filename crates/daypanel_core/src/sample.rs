//! Seed lists for demos and tests.
//!
//! Ids are fixed so callers can address seed records directly. Everything
//! falls in the week of 2024-01-11..2024-01-18; health readings are logged
//! on 2024-01-16 only.

use crate::model::expense::{Expense, ExpenseCategory};
use crate::model::health::HealthReading;
use crate::model::task::{Task, TaskPriority};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn sample_tasks() -> Vec<Task> {
    vec![
        task(1, "Morning workout", true, TaskPriority::High, 15, "Health"),
        task(2, "Review budget", false, TaskPriority::Medium, 16, "Finance"),
        task(3, "Dentist appointment", false, TaskPriority::High, 17, "Health"),
        task(4, "Grocery shopping", false, TaskPriority::Low, 17, "Personal"),
        task(5, "Prepare presentation slides", false, TaskPriority::High, 18, "Work"),
    ]
}

pub fn sample_expenses() -> Vec<Expense> {
    vec![
        expense(1, 15, 4550, ExpenseCategory::Food, "Lunch at cafe", false),
        expense(2, 16, 12000, ExpenseCategory::Healthcare, "Doctor visit", false),
        expense(3, 14, 2500, ExpenseCategory::Transport, "Gas", false),
        expense(4, 13, 8520, ExpenseCategory::Food, "Grocery shopping", false),
        expense(5, 12, 120000, ExpenseCategory::Housing, "Monthly rent", true),
        expense(6, 11, 3500, ExpenseCategory::Entertainment, "Movie tickets", false),
    ]
}

/// Newest first, matching `HealthLog` order.
pub fn sample_readings() -> Vec<HealthReading> {
    vec![
        HealthReading {
            id: Uuid::from_u128(0x3000_0002),
            date: january(16),
            time: clock(14, 45),
            heart_rate: Some(78),
            systolic: Some(125),
            diastolic: Some(82),
            blood_sugar: Some(145),
            notes: Some("After lunch".to_string()),
        },
        HealthReading {
            id: Uuid::from_u128(0x3000_0001),
            date: january(16),
            time: clock(8, 30),
            heart_rate: Some(72),
            systolic: Some(120),
            diastolic: Some(80),
            blood_sugar: Some(95),
            notes: Some("Morning reading".to_string()),
        },
    ]
}

fn task(
    seq: u128,
    text: &str,
    completed: bool,
    priority: TaskPriority,
    day: u32,
    category: &str,
) -> Task {
    Task {
        id: Uuid::from_u128(0x1000_0000 + seq),
        text: text.to_string(),
        completed,
        priority,
        due_date: january(day),
        category: category.to_string(),
    }
}

fn expense(
    seq: u128,
    day: u32,
    cents: i64,
    category: ExpenseCategory,
    description: &str,
    recurring: bool,
) -> Expense {
    Expense {
        id: Uuid::from_u128(0x2000_0000 + seq),
        date: january(day),
        amount: Decimal::new(cents, 2),
        category,
        description: description.to_string(),
        recurring,
    }
}

fn january(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid sample date")
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid sample time")
}
