use std::path::PathBuf;
use thiserror::Error;

use crate::task::TaskStatus;

/// Broad category of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected input; nothing was changed.
    Validation,
    /// Index outside 1..=len; nothing was changed.
    Lookup,
    /// Reading or writing the task file failed.
    Persistence,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid date format. Please use DD-MM-YYYY.")]
    InvalidDate(String),

    #[error("Invalid status '{0}'. Status should be one of {choices}.", choices = TaskStatus::choices())]
    InvalidStatus(String),

    #[error("Invalid task index.")]
    NotFound(usize),

    #[error("Failed to access task file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed task file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidDate(_) | StoreError::InvalidStatus(_) => ErrorKind::Validation,
            StoreError::NotFound(_) => ErrorKind::Lookup,
            StoreError::Io { .. } | StoreError::Malformed { .. } | StoreError::Serialize(_) => {
                ErrorKind::Persistence
            }
        }
    }

    /// Persistence failures end an interactive session; everything else is
    /// reported and the session continues.
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Persistence
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
