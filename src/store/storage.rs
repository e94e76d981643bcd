//! Task storage - JSON file persistence

use serde::Serialize;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{Result, StoreError};
use crate::task::Task;

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Whole-file JSON storage for the task list.
///
/// Every call opens, fully reads or writes, and closes the file. Nothing is
/// held between calls.
#[derive(Debug, Clone)]
pub struct Storage {
    tasks_path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            tasks_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    pub fn load(&self) -> Result<Vec<Task>> {
        let content = match fs::read_to_string(&self.tasks_path) {
            Ok(content) => content,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                debug!("No task file at {}, starting empty", self.tasks_path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.tasks_path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            warn!(
                "Task file {} is blank, treating it as an empty list",
                self.tasks_path.display()
            );
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.tasks_path.clone(),
                source,
            })?;
        debug!(
            count = tasks.len(),
            "Loaded tasks from {}",
            self.tasks_path.display()
        );
        Ok(tasks)
    }

    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = to_json(tasks)?;

        if let Some(parent) = self.tasks_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(&self.tasks_path, content).map_err(|source| StoreError::Io {
            path: self.tasks_path.clone(),
            source,
        })?;
        debug!(
            count = tasks.len(),
            "Saved tasks to {}",
            self.tasks_path.display()
        );
        Ok(())
    }
}

/// Pretty JSON with four-space indentation, the layout existing task files use.
fn to_json(tasks: &[Task]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks.serialize(&mut ser)?;
    Ok(buf)
}
