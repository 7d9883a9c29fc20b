//! # `todo_list`
//!
//! A persistent to-do list: tasks with a name, completion flag, and priority,
//! saved to a JSON file after every change and managed from an interactive
//! menu or single-shot commands.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod menu;
pub mod tasks;
pub mod templates;
pub mod testing;

pub use error::{Error, Result};
pub use tasks::{Completion, JsonFileTaskStore, Priority, Task, TaskList, TaskStore};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
