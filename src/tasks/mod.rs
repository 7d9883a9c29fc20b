//! Task management.
//!
//! This module provides a persistent to-do list with:
//! - Tasks with a name, completion flag, and priority
//! - A display ordering (incomplete first, then by priority) used to address tasks
//! - Whole-list persistence to a JSON file after every change
//!
//! # Example
//!
//! ```no_run
//! use todo_list::config::SortOrder;
//! use todo_list::tasks::{JsonFileTaskStore, Priority, TaskList};
//!
//! let store = JsonFileTaskStore::new("tasks.json");
//! let mut list = TaskList::open(store, SortOrder::Label).unwrap();
//!
//! list.add_task("Pay bills", Priority::High).unwrap();
//! list.complete_task(1).unwrap();
//!
//! for entry in list.list_sorted() {
//!     println!("{}. {}", entry.index, entry.task.name);
//! }
//! ```

pub mod list;
pub mod models;
pub mod store;

pub use list::{Completion, DisplayEntry, TaskList};
pub use models::{InvalidPriority, Priority, Task};
pub use store::{JsonFileTaskStore, TaskStore};
