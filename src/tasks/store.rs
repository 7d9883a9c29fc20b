//! Task store trait and JSON file implementation.

use crate::error::{Error, Result};
use crate::tasks::models::Task;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Trait for persisting the task list.
///
/// The whole list is read and written at once; there is no incremental
/// persistence.
pub trait TaskStore {
    /// Load every stored task, in storage order.
    ///
    /// A store that has never been written yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be read or parsed.
    fn load(&self) -> Result<Vec<Task>>;

    /// Replace the stored tasks with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the data cannot be written.
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Stores tasks as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    path: PathBuf,
}

impl JsonFileTaskStore {
    /// Create a store backed by the file at `path`. The file need not exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Get the tasks file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for JsonFileTaskStore {
    fn load(&self) -> Result<Vec<Task>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::persistence(&self.path, e)),
        };

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| {
            Error::MalformedTasksFile { path: self.path.clone(), reason: e.to_string() }
        })?;

        if let Some(position) = tasks.iter().position(|t| t.name.trim().is_empty()) {
            return Err(Error::MalformedTasksFile {
                path: self.path.clone(),
                reason: format!("task {} has an empty name", position + 1),
            });
        }

        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(tasks).map_err(|e| Error::persistence(&self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::persistence(&self.path, e))?;
        }
        std::fs::write(&self.path, content).map_err(|e| Error::persistence(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::models::Priority;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonFileTaskStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileTaskStore::new(dir.path().join("tasks.json"));
        (dir, store)
    }

    fn task(name: &str, completed: bool, priority: Priority) -> Task {
        Task { name: name.to_string(), completed, priority }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let (_dir, store) = create_test_store();
        let tasks = vec![
            task("Buy milk", false, Priority::Medium),
            task("Pay bills", false, Priority::High),
            task("Walk dog", true, Priority::Low),
        ];

        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let (_dir, store) = create_test_store();
        store.save(&[task("a", false, Priority::Low), task("b", false, Priority::Low)]).unwrap();
        store.save(&[task("c", true, Priority::High)]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![task("c", true, Priority::High)]);
    }

    #[test]
    fn test_saved_file_is_pretty_printed_array() {
        let (_dir, store) = create_test_store();
        store.save(&[task("Walk dog", false, Priority::Low)]).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"task\": \"Walk dog\""));
        assert!(content.contains("\"priority\": \"Low\""));
    }

    #[test]
    fn test_save_empty_list() {
        let (_dir, store) = create_test_store();
        store.save(&[]).unwrap();
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileTaskStore::new(dir.path().join("nested/deeper/tasks.json"));
        store.save(&[task("x", false, Priority::High)]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let (_dir, store) = create_test_store();
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(Error::MalformedTasksFile { .. })));
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let (_dir, store) = create_test_store();
        std::fs::write(store.path(), r#"{"task": "x", "completed": false, "priority": "High"}"#)
            .unwrap();
        assert!(matches!(store.load(), Err(Error::MalformedTasksFile { .. })));
    }

    #[test]
    fn test_unknown_priority_is_an_error() {
        let (_dir, store) = create_test_store();
        std::fs::write(store.path(), r#"[{"task": "x", "completed": false, "priority": "Urgent"}]"#)
            .unwrap();
        assert!(matches!(store.load(), Err(Error::MalformedTasksFile { .. })));
    }

    #[test]
    fn test_empty_stored_name_is_an_error() {
        let (_dir, store) = create_test_store();
        std::fs::write(store.path(), r#"[{"task": "  ", "completed": false, "priority": "Low"}]"#)
            .unwrap();
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("task 1 has an empty name"), "Error was: {err}");
    }

    #[test]
    fn test_save_into_directory_path_fails_with_persistence_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileTaskStore::new(dir.path());
        let result = store.save(&[task("x", false, Priority::High)]);
        assert!(matches!(result, Err(Error::Persistence { .. })));
    }

    #[test]
    fn test_reading_directory_path_fails_with_persistence_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileTaskStore::new(dir.path());
        assert!(matches!(store.load(), Err(Error::Persistence { .. })));
    }
}
