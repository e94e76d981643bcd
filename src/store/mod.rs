//! Task store
//!
//! Owns the ordered task list and rewrites the whole task file after every
//! successful mutation. Indices are 1-based everywhere in this API. A
//! mutation whose save fails is rolled back, so memory and file still agree.

pub mod error;
pub mod storage;

pub use error::{ErrorKind, Result, StoreError};
pub use storage::{Storage, DEFAULT_TASKS_FILE};

use tracing::debug;

use crate::task::{is_valid_due_date, Task, TaskStatus};

pub const EMPTY_LIST_MESSAGE: &str = "No tasks in the list.";

/// Changes to apply to one task. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.due_date.is_none() && self.status.is_none()
    }

    /// Checks every field before any is applied.
    fn validate(&self) -> Result<()> {
        if let Some(due_date) = &self.due_date {
            if !is_valid_due_date(due_date) {
                debug!(due_date = due_date.as_str(), "Rejected due date");
                return Err(StoreError::InvalidDate(due_date.clone()));
            }
        }
        Ok(())
    }

    fn apply_to(self, task: &mut Task) {
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}

pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
    default_status: TaskStatus,
}

impl TaskStore {
    /// Load the task list through `storage`. Malformed data is an error.
    pub fn open(storage: Storage) -> Result<Self> {
        let tasks = storage.load()?;
        Ok(Self {
            storage,
            tasks,
            default_status: TaskStatus::default(),
        })
    }

    /// Status given to tasks added without an explicit one
    pub fn with_default_status(mut self, status: TaskStatus) -> Self {
        self.default_status = status;
        self
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
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

    /// Task at 1-based `index`, or `None` when out of range (including 0)
    pub fn get(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    fn position(&self, index: usize) -> Result<usize> {
        if (1..=self.tasks.len()).contains(&index) {
            Ok(index - 1)
        } else {
            Err(StoreError::NotFound(index))
        }
    }

    /// Enumerated listing of every task
    pub fn view(&self) -> String {
        if self.tasks.is_empty() {
            return EMPTY_LIST_MESSAGE.to_string();
        }
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("Task {}:\n{}", i + 1, task))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Append a task and persist. Returns the new task's 1-based index.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        due_date: &str,
        status: Option<TaskStatus>,
    ) -> Result<usize> {
        if !is_valid_due_date(due_date) {
            debug!(due_date, "Rejected due date");
            return Err(StoreError::InvalidDate(due_date.to_string()));
        }

        let task = Task::new(
            description,
            due_date,
            status.unwrap_or(self.default_status),
        );
        self.tasks.push(task);
        if let Err(e) = self.save() {
            self.tasks.pop();
            return Err(e);
        }

        let index = self.tasks.len();
        debug!(index, "Added task");
        Ok(index)
    }

    /// Apply `changes` to the task at `index` and persist.
    ///
    /// If any field is invalid nothing is changed. An empty update is a
    /// no-op and does not rewrite the file.
    pub fn update(&mut self, index: usize, changes: TaskUpdate) -> Result<&Task> {
        let pos = self.position(index)?;
        changes.validate()?;

        if changes.is_empty() {
            debug!(index, "Empty update, nothing to save");
            return Ok(&self.tasks[pos]);
        }

        let previous = self.tasks[pos].clone();
        changes.apply_to(&mut self.tasks[pos]);
        if let Err(e) = self.save() {
            self.tasks[pos] = previous;
            return Err(e);
        }
        debug!(index, "Updated task");
        Ok(&self.tasks[pos])
    }

    /// Remove the task at `index` and persist. Later tasks move down by one.
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        let pos = self.position(index)?;
        let removed = self.tasks.remove(pos);
        if let Err(e) = self.save() {
            self.tasks.insert(pos, removed);
            return Err(e);
        }
        debug!(index, "Deleted task");
        Ok(removed)
    }

    /// Rewrite the task file from the in-memory list
    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.tasks)
    }
}
