use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Stable identifier assigned when a task is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("no task with id {0}")]
    NotFound(TaskId),
    #[error("task index {index} out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: TaskId::new(),
            text,
            completed: false,
            created_at: Local::now(),
        }
    }
}

/// Ordered task list. Pending tasks are kept above completed ones after each toggle.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.pending_count()
    }

    /// Prepend a task. Blank text (after trimming) is ignored.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }

        let task = Task::new(text.to_string());
        let id = task.id;
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Flip completion and re-sort (stable) so pending tasks come first
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.completed = !task.completed;
        let completed = task.completed;

        self.tasks.sort_by_key(|t| t.completed);
        Ok(completed)
    }

    /// Remove a task permanently
    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self.position(id).ok_or(TaskError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Remove the task at a render position
    pub fn remove_at(&mut self, index: usize) -> Result<Task, TaskError> {
        let id = self.id_at(index)?;
        self.remove(id)
    }

    fn id_at(&self, index: usize) -> Result<TaskId, TaskError> {
        self.tasks
            .get(index)
            .map(|t| t.id)
            .ok_or(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
    }
}
