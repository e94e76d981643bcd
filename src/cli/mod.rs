//! CLI command implementations

pub mod add;
pub mod definition;
pub mod delete;
pub mod list;
pub mod menu;
pub mod update;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::store::{Storage, TaskStore};

/// Open the task store, honouring `--file` and the config file.
pub fn open_store(file: Option<&Path>) -> Result<TaskStore> {
    let config = Config::load()?;
    let path = config.resolve_storage_path(file)?;
    debug!("Using task file {}", path.display());

    let store = TaskStore::open(Storage::new(&path))
        .with_context(|| format!("Failed to load tasks from {}", path.display()))?;
    Ok(store.with_default_status(config.default_status))
}
