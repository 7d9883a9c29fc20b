//! Configuration management for the to-do list.
//!
//! Settings are read from `todo-config.yaml` in the working directory, or
//! from `~/.todo-list/config.yaml` when the project has none.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name, relative to the base directory.
pub const CONFIG_FILE_NAME: &str = "todo-config.yaml";

/// Directory under the home directory holding user-level settings.
pub const USER_DIR_NAME: &str = ".todo-list";

/// Environment variable that overrides the configured tasks file.
pub const TASKS_FILE_ENV: &str = "TODO_LIST_FILE";

/// How the display ordering ranks priorities within a completion group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Compare priority labels as text: "High" < "Low" < "Medium".
    #[default]
    Label,
    /// Compare by urgency: High, then Medium, then Low.
    Urgency,
}

/// To-do list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Where tasks are persisted. Relative paths resolve against the base directory.
    #[serde(default = "default_tasks_file")]
    pub tasks_file: PathBuf,

    /// Priority ordering used when listing tasks.
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Whether operations are appended to the event log.
    #[serde(default)]
    pub debug_logging: bool,

    /// Event log location. Relative paths resolve against the base directory.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Directory of `.tera` files overriding the built-in messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
}

fn default_tasks_file() -> PathBuf {
    PathBuf::from("tasks.json")
}

fn default_log_file() -> PathBuf {
    PathBuf::from(USER_DIR_NAME).join("events.jsonl")
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            tasks_file: default_tasks_file(),
            sort_order: SortOrder::default(),
            debug_logging: false,
            log_file: default_log_file(),
            templates_dir: None,
        }
    }
}

impl TodoConfig {
    /// Load the effective configuration for `base_dir`.
    ///
    /// Uses the project config if present, then the user config, then
    /// defaults. The [`TASKS_FILE_ENV`] variable is applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load(base_dir: &Path) -> Result<Self> {
        Self::load_with(base_dir, user_config_path().as_deref())
    }

    /// Like [`TodoConfig::load`], with an explicit user config path.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load_with(base_dir: &Path, user_config: Option<&Path>) -> Result<Self> {
        let mut config = match Self::load_from(base_dir)? {
            Some(config) => config,
            None => match user_config {
                Some(path) => Self::load_file(path)?.unwrap_or_default(),
                None => Self::default(),
            },
        };
        config.apply_env_override();
        Ok(config)
    }

    /// Load the project config from a base directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        Self::load_file(&Self::config_path(base_dir))
    }

    fn load_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, base_dir: &Path) -> Result<()> {
        let config_path = Self::config_path(base_dir);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the project config file path for a base directory.
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_NAME)
    }

    /// Resolved path of the tasks file.
    #[must_use]
    pub fn tasks_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.tasks_file)
    }

    /// Resolved path of the event log, or None when logging is off.
    #[must_use]
    pub fn log_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.debug_logging.then(|| base_dir.join(&self.log_file))
    }

    /// Resolved templates directory, if one is configured.
    #[must_use]
    pub fn templates_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.templates_dir.as_ref().map(|dir| base_dir.join(dir))
    }

    fn apply_env_override(&mut self) {
        if let Some(file) = std::env::var_os(TASKS_FILE_ENV).filter(|v| !v.is_empty()) {
            self.tasks_file = PathBuf::from(file);
        }
    }
}

/// Location of the user-level config file, if the home directory is known.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_DIR_NAME).join("config.yaml"))
}

/// Ensure a project config file exists, writing defaults if it does not.
///
/// Returns the config now on disk.
///
/// # Errors
///
/// Returns an error if the existing config cannot be parsed or the new one
/// cannot be written.
pub fn ensure_config(base_dir: &Path) -> Result<TodoConfig> {
    if let Some(config) = TodoConfig::load_from(base_dir)? {
        return Ok(config);
    }

    let config = TodoConfig::default();
    config.save_to(base_dir)?;
    Ok(config)
}
