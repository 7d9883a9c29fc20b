//! Interactive menu over a task list.
//!
//! The menu reads commands from any [`BufRead`] and writes prompts and
//! results to any [`Write`], so it runs the same against a terminal or an
//! in-memory buffer. End of input is treated like choosing Quit.

use crate::error::{Error, Result};
use crate::tasks::{Completion, DisplayEntry, Priority, TaskList, TaskStore};
use crate::templates;
use serde::Serialize;
use std::io::{BufRead, Write};
use tera::Context;

/// A top-level menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Show the sorted list.
    Display,
    /// Add a task.
    Add,
    /// Mark a task as completed.
    Complete,
    /// Remove a task.
    Remove,
    /// Leave the menu.
    Quit,
}

impl MenuChoice {
    /// Parse the user's menu selection (`1` to `5`).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Display),
            "2" => Some(Self::Add),
            "3" => Some(Self::Complete),
            "4" => Some(Self::Remove),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ListRow<'a> {
    index: usize,
    name: &'a str,
    priority: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
struct PriorityRow {
    label: &'static str,
    name: &'static str,
}

/// Render the numbered task listing.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_task_list(entries: &[DisplayEntry<'_>]) -> Result<String> {
    let rows: Vec<ListRow<'_>> = entries
        .iter()
        .map(|e| ListRow {
            index: e.index,
            name: &e.task.name,
            priority: e.task.priority.label(),
            status: e.task.status(),
        })
        .collect();
    let mut ctx = Context::new();
    ctx.insert("tasks", &rows);
    templates::render(templates::TASK_LIST, &ctx)
}

fn render_priority_prompt() -> Result<String> {
    let rows: Vec<PriorityRow> =
        Priority::ALL.iter().map(|p| PriorityRow { label: p.label(), name: p.name() }).collect();
    let mut ctx = Context::new();
    ctx.insert("priorities", &rows);
    templates::render(templates::PRIORITY_PROMPT, &ctx)
}

enum Flow {
    Continue,
    Quit,
}

/// An interactive session over a task list.
pub struct Menu<'a, S: TaskStore, R, W> {
    list: &'a mut TaskList<S>,
    input: R,
    output: W,
}

impl<'a, S: TaskStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    /// Create a session reading from `input` and writing to `output`.
    pub fn new(list: &'a mut TaskList<S>, input: R, output: W) -> Self {
        Self { list, input, output }
    }

    /// Run until the user quits or input ends.
    ///
    /// Failed operations are reported to the user and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input, writing output, or rendering
    /// a template fails.
    pub fn run(mut self) -> Result<()> {
        loop {
            let menu = templates::render(templates::MENU, &Context::new())?;
            write!(self.output, "\n{menu}")?;

            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Display) => self.display()?,
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Complete) => self.complete()?,
                Some(MenuChoice::Remove) => self.remove()?,
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Quit
                }
                None => {
                    writeln!(self.output, "Invalid choice, Please enter valid option")?;
                    Flow::Continue
                }
            };

            if matches!(flow, Flow::Quit) {
                return Ok(());
            }
        }
    }

    /// Write `text` and read one line. Returns None at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn display(&mut self) -> Result<Flow> {
        let listing = render_task_list(&self.list.list_sorted())?;
        if self.list.is_empty() {
            write!(self.output, "{listing}")?;
        } else {
            write!(self.output, "\n{listing}")?;
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter the task: ")? else {
            return Ok(Flow::Quit);
        };
        if name.is_empty() {
            writeln!(self.output, "Task name cannot be empty!")?;
            return Ok(Flow::Continue);
        }

        let Some(priority) = self.ask_priority()? else {
            return Ok(Flow::Quit);
        };

        match self.list.add_task(&name, priority) {
            Ok(task) => writeln!(
                self.output,
                "Task '{}' with priority '{}' added to your to-do list.",
                task.name, task.priority
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn ask_priority(&mut self) -> Result<Option<Priority>> {
        let prompt = render_priority_prompt()?;
        write!(self.output, "{prompt}")?;

        loop {
            let Some(choice) = self.prompt("Enter priority (High/Medium/Low): ")? else {
                return Ok(None);
            };
            match Priority::parse(&choice) {
                Ok(priority) => return Ok(Some(priority)),
                Err(_) => writeln!(
                    self.output,
                    "Invalid priority. Please choose High, Medium, or Low."
                )?,
            }
        }
    }

    fn complete(&mut self) -> Result<Flow> {
        if self.list.is_empty() {
            writeln!(self.output, "No tasks available to mark as completed.")?;
            return Ok(Flow::Continue);
        }
        self.display()?;

        let Some(index) = self.ask_index("Enter the task number to mark as completed: ")? else {
            return Ok(Flow::Continue);
        };

        match self.list.complete_task(index) {
            Ok(Completion::Completed(task)) => {
                writeln!(self.output, "Task '{}' marked as completed.", task.name)?;
            }
            Ok(Completion::AlreadyCompleted(task)) => {
                writeln!(self.output, "Task '{}' is already completed.", task.name)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        if self.list.is_empty() {
            writeln!(self.output, "No tasks available to remove.")?;
            return Ok(Flow::Continue);
        }
        self.display()?;

        let Some(index) = self.ask_index("Enter the task number to remove: ")? else {
            return Ok(Flow::Continue);
        };

        match self.list.remove_task(index) {
            Ok(task) => {
                writeln!(self.output, "Task '{}' removed from your to-do list.", task.name)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    /// Ask for a task number. Non-numeric input is reported here; numbers
    /// that are not valid positions map to 0 and are rejected by the list.
    fn ask_index(&mut self, text: &str) -> Result<Option<usize>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        match raw.parse::<i64>() {
            Ok(n) => Ok(Some(usize::try_from(n).unwrap_or(0))),
            Err(_) => {
                writeln!(self.output, "Please enter a valid number.")?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, err: &Error) -> Result<()> {
        match err {
            Error::IndexOutOfRange { .. } | Error::EmptyList => {
                writeln!(self.output, "Invalid task number.")?;
            }
            other => writeln!(self.output, "Error: {other}")?,
        }
        Ok(())
    }
}
