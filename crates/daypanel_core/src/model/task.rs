//! Task domain model.
//!
//! # Invariants
//! - `text` is never empty after trimming.
//! - Only `completed` changes after creation; everything else is fixed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Category assigned to quick-added tasks.
pub const DEFAULT_TASK_CATEGORY: &str = "Personal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// One to-do item owned by the task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: TaskPriority,
    /// Calendar key for this task.
    pub due_date: NaiveDate,
    pub category: String,
}

/// Insert shape for a task with every field chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
    pub category: String,
}

impl NewTask {
    /// Quick-add defaults: medium priority, personal category.
    pub fn quick(text: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            text: text.into(),
            priority: TaskPriority::Medium,
            due_date,
            category: DEFAULT_TASK_CATEGORY.to_string(),
        }
    }
}

impl Task {
    pub(crate) fn from_new(id: TaskId, new_task: NewTask) -> Self {
        Self {
            id,
            text: new_task.text.trim().to_string(),
            completed: false,
            priority: new_task.priority,
            due_date: new_task.due_date,
            category: new_task.category,
        }
    }
}
