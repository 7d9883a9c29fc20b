//! Error types for `todo_list`.

use std::path::PathBuf;

/// Errors that can occur while managing the to-do list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Input was rejected before touching the list (empty name, unknown priority).
    #[error("{0}")]
    Validation(String),

    /// A display index fell outside the current list.
    #[error("Invalid task number: {index} (must be between 1 and {count})")]
    IndexOutOfRange {
        /// The 1-based index that was requested.
        index: usize,
        /// Number of tasks in the list at the time of the request.
        count: usize,
    },

    /// An index-based operation was attempted on an empty list.
    #[error("The to-do list is empty")]
    EmptyList,

    /// The tasks file could not be read or written.
    #[error("Failed to access tasks file {}: {source}", path.display())]
    Persistence {
        /// Path of the tasks file.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The tasks file exists but does not hold a valid task list.
    #[error("Malformed tasks file {}: {reason}", path.display())]
    MalformedTasksFile {
        /// Path of the tasks file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// A template error occurred.
    #[error("Template error: {0}")]
    Template(String),
}

impl Error {
    /// Wrap a failure that happened while accessing the tasks file.
    pub fn persistence(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Persistence { path: path.into(), source: source.into() }
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::IndexOutOfRange { index: 4, count: 3 };
        assert_eq!(err.to_string(), "Invalid task number: 4 (must be between 1 and 3)");
    }

    #[test]
    fn test_persistence_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::persistence("/tmp/tasks.json", io);
        assert!(err.to_string().contains("/tmp/tasks.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
