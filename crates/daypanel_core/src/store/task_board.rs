//! Task list state container.
//!
//! # Responsibility
//! - Own the task list and expose add/toggle/delete as the only mutations.
//! - Provide the pending/completed partitions the task screens render.
//!
//! # Invariants
//! - Tasks keep insertion order.
//! - `completed` is the only field that changes after insertion.

use crate::model::task::{NewTask, Task, TaskId};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task text is empty after trimming.
    EmptyText,
    NotFound(TaskId),
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for TaskError {}

/// Completed vs. total counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskProgress {
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing list, e.g. seed data.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Quick-adds a task due `today` with default priority and category.
    pub fn add(&mut self, text: &str, today: NaiveDate) -> Result<TaskId, TaskError> {
        self.add_task(NewTask::quick(text, today))
    }

    /// Appends a fully specified task.
    pub fn add_task(&mut self, new_task: NewTask) -> Result<TaskId, TaskError> {
        if new_task.text.trim().is_empty() {
            warn!("event=task_add module=tasks status=rejected reason=empty_text");
            return Err(TaskError::EmptyText);
        }
        let id = Uuid::new_v4();
        self.tasks.push(Task::from_new(id, new_task));
        debug!(
            "event=task_add module=tasks status=ok task_id={} count={}",
            id,
            self.tasks.len()
        );
        Ok(id)
    }

    /// Flips completion and returns the new value.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.completed = !task.completed;
        debug!(
            "event=task_toggle module=tasks status=ok task_id={} completed={}",
            id, task.completed
        );
        Ok(task.completed)
    }

    pub fn delete(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))?;
        let removed = self.tasks.remove(position);
        debug!(
            "event=task_delete module=tasks status=ok task_id={} count={}",
            id,
            self.tasks.len()
        );
        Ok(removed)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.completed).collect()
    }

    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    pub fn progress(&self) -> TaskProgress {
        TaskProgress {
            completed: self.tasks.iter().filter(|task| task.completed).count(),
            total: self.tasks.len(),
        }
    }

    pub fn due_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.due_date == date)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
