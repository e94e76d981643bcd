//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::StoreError;

/// Task status
///
/// The serialized names match the strings found in existing `tasks.json`
/// files, so the set stays closed without breaking older data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started
    #[serde(rename = "TODO")]
    Todo,
    /// Waiting to be done
    #[default]
    #[serde(rename = "pending")]
    Pending,
    /// Finished
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::Pending, Self::Completed];

    /// Parse status from user text, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Some(Self::Todo),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Get the text label, as stored on disk
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Comma separated list of accepted labels, for messages
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|s| format!("'{}'", s.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StoreError::InvalidStatus(s.to_string()))
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing
    pub description: String,

    /// Due date as entered, DD-MM-YYYY
    pub due_date: String,

    /// Current status
    pub status: TaskStatus,
}

impl Task {
    /// Create a new task. The due date is taken as-is; callers validate it.
    pub fn new(
        description: impl Into<String>,
        due_date: impl Into<String>,
        status: TaskStatus,
    ) -> Self {
        Self {
            description: description.into(),
            due_date: due_date.into(),
            status,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Description: {}\nDue Date: {}\nStatus: {}",
            self.description, self.due_date, self.status
        )
    }
}
