//! The in-memory task list and its operations.
//!
//! A [`TaskList`] holds tasks in storage order and writes the whole list back
//! to its [`TaskStore`] after every mutation. Tasks are addressed by their
//! 1-based position in the display ordering produced by
//! [`TaskList::list_sorted`], so indices shift as the list changes.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use crate::events::EventLog;
use crate::tasks::models::{Priority, Task};
use crate::tasks::store::TaskStore;
use std::cmp::Ordering;

/// A task together with its position in the display ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEntry<'a> {
    /// 1-based display index.
    pub index: usize,
    /// The task at that position.
    pub task: &'a Task,
}

/// Outcome of [`TaskList::complete_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The task was marked done and the list saved.
    Completed(Task),
    /// The task was already done; nothing changed and nothing was saved.
    AlreadyCompleted(Task),
}

impl Completion {
    /// The task the operation referred to.
    #[must_use]
    pub const fn task(&self) -> &Task {
        match self {
            Self::Completed(task) | Self::AlreadyCompleted(task) => task,
        }
    }
}

/// Ordered tasks backed by a store.
#[derive(Debug)]
pub struct TaskList<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
    sort_order: SortOrder,
    events: EventLog,
}

impl<S: TaskStore> TaskList<S> {
    /// Load the list from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store holds data that cannot be loaded.
    pub fn open(store: S, sort_order: SortOrder) -> Result<Self> {
        Self::open_with_log(store, sort_order, EventLog::disabled())
    }

    /// Load the list from `store`, recording operations to `events`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store holds data that cannot be loaded.
    pub fn open_with_log(store: S, sort_order: SortOrder, events: EventLog) -> Result<Self> {
        let tasks = store.load()?;
        events.record("load", None, Some(format!("{} tasks", tasks.len()).as_str()));
        Ok(Self { store, tasks, sort_order, events })
    }

    /// Tasks in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Tasks in display order: incomplete before complete, then by priority.
    ///
    /// Ties keep their storage order. An empty list yields an empty vector.
    #[must_use]
    pub fn list_sorted(&self) -> Vec<DisplayEntry<'_>> {
        self.display_order()
            .into_iter()
            .enumerate()
            .map(|(i, pos)| DisplayEntry { index: i + 1, task: &self.tasks[pos] })
            .collect()
    }

    /// Add an incomplete task and save the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `name` is blank, leaving the list
    /// untouched, or [`Error::Persistence`] if saving fails. In the latter case
    /// the task stays in memory.
    pub fn add_task(&mut self, name: &str, priority: Priority) -> Result<Task> {
        let task = Task::new(name, priority)?;
        self.tasks.push(task.clone());
        self.persist()?;
        self.events.record("add", Some(&task), None);
        Ok(task)
    }

    /// Mark the task at `display_index` as completed and save the list.
    ///
    /// Completing a task that is already done changes nothing and does not
    /// save.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyList`] or [`Error::IndexOutOfRange`] for a bad
    /// index, or [`Error::Persistence`] if saving fails.
    pub fn complete_task(&mut self, display_index: usize) -> Result<Completion> {
        let pos = self.resolve(display_index)?;
        let task = &mut self.tasks[pos];

        if task.completed {
            let task = task.clone();
            self.events.record("already_completed", Some(&task), None);
            return Ok(Completion::AlreadyCompleted(task));
        }

        task.completed = true;
        let task = task.clone();
        self.persist()?;
        self.events.record("complete", Some(&task), None);
        Ok(Completion::Completed(task))
    }

    /// Remove the task at `display_index` and save the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyList`] or [`Error::IndexOutOfRange`] for a bad
    /// index, or [`Error::Persistence`] if saving fails.
    pub fn remove_task(&mut self, display_index: usize) -> Result<Task> {
        let pos = self.resolve(display_index)?;
        let task = self.tasks.remove(pos);
        self.persist()?;
        self.events.record("remove", Some(&task), None);
        Ok(task)
    }

    /// Storage positions in display order.
    fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.tasks.len()).collect();
        // `sort_by` is stable, so ties keep storage order.
        order.sort_by(|&a, &b| self.compare(&self.tasks[a], &self.tasks[b]));
        order
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let by_priority = match self.sort_order {
            SortOrder::Label => a.priority.label().cmp(b.priority.label()),
            SortOrder::Urgency => a.priority.rank().cmp(&b.priority.rank()),
        };
        a.completed.cmp(&b.completed).then(by_priority)
    }

    /// Map a 1-based display index to a storage position.
    fn resolve(&self, display_index: usize) -> Result<usize> {
        let count = self.tasks.len();
        if count == 0 {
            return Err(Error::EmptyList);
        }
        if display_index == 0 || display_index > count {
            return Err(Error::IndexOutOfRange { index: display_index, count });
        }
        Ok(self.display_order()[display_index - 1])
    }

    fn persist(&self) -> Result<()> {
        if let Err(e) = self.store.save(&self.tasks) {
            self.events.record("save_failed", None, Some(e.to_string().as_str()));
            return Err(e);
        }
        Ok(())
    }
}
