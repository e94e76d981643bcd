//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::DEFAULT_TASKS_FILE;
use crate::task::TaskStatus;

const APP_DIR_NAME: &str = "todo-tracker";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the default task file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,

    /// Status given to new tasks when none is specified
    #[serde(default)]
    pub default_status: TaskStatus,
}

/// Per-user directory for config and the default task file.
///
/// `$XDG_CONFIG_HOME/todo-tracker` (or the platform equivalent), falling
/// back to `~/.todo-tracker` when no config directory is known.
pub fn get_app_dir() -> Result<PathBuf> {
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join(APP_DIR_NAME));
    }
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
    Ok(home.join(format!(".{}", APP_DIR_NAME)))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }

    /// Task file to use: `override_path` first, then `storage_path`, then
    /// `tasks.json` in the app directory.
    pub fn resolve_storage_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.storage_path {
            return Ok(path.clone());
        }
        Ok(get_app_dir()?.join(DEFAULT_TASKS_FILE))
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
