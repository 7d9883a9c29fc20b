//! Debug event logging.
//!
//! When `debug_logging` is enabled in the config, every load and every
//! task operation is appended as a JSONL line to the configured log file.

use crate::tasks::Task;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends operation events to a JSONL file, or does nothing when disabled.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    path: Option<PathBuf>,
}

impl EventLog {
    /// An event log writing to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: Some(path.as_ref().to_path_buf()) }
    }

    /// An event log that drops every event.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { path: None }
    }

    /// Log file path, if logging is enabled.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Record an operation on a task.
    ///
    /// Errors are silently ignored; logging never breaks an operation.
    pub fn record(&self, operation: &str, task: Option<&Task>, details: Option<&str>) {
        let Some(path) = &self.path else {
            return;
        };

        let entry = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "operation": operation,
            "task": task,
            "details": details,
        });

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }

        let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) else {
            return;
        };

        let _ = writeln!(file, "{entry}");
    }
}
