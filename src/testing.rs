//! Testing utilities and mock implementations.
//!
//! These types are provided for use in tests. They may appear unused in
//! the library itself but are consumed by unit and integration tests.

#![allow(dead_code)]

use crate::error::{Error, Result};
use crate::tasks::{Task, TaskStore};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// An in-memory task store that counts loads and saves.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    saved: RefCell<Vec<Task>>,
    loads: Cell<usize>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryTaskStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { saved: RefCell::new(tasks), ..Self::default() }
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Number of loads.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    /// The tasks as last saved.
    #[must_use]
    pub fn saved(&self) -> Vec<Task> {
        self.saved.borrow().clone()
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> Result<Vec<Task>> {
        self.loads.set(self.loads.get() + 1);
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if self.fail_saves.get() {
            let err = std::io::Error::new(std::io::ErrorKind::Other, "simulated write failure");
            return Err(Error::persistence(PathBuf::from("<memory>"), err));
        }
        self.saves.set(self.saves.get() + 1);
        *self.saved.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
