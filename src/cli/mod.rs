//! Command-line interface for the to-do list.
//!
//! With no subcommand the interactive menu starts. The subcommands run a
//! single operation and exit, which makes the list scriptable.

mod run;


pub use run::{run, CliOutput};

use crate::tasks::Priority;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Persistent to-do list.
///
/// Tasks are numbered by their position in the sorted listing shown by
/// `todo list`: unfinished tasks first, then by priority. Numbers shift as
/// tasks are added, completed, and removed.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Tasks file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// The command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the interactive menu.
    Menu,

    /// Show the to-do list.
    List,

    /// Add a task.
    Add {
        /// What needs doing
        name: String,

        /// Priority: High, Medium or Low (case-insensitive)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Priority,
    },

    /// Mark a task as completed.
    Complete {
        /// Task number as shown by `todo list`
        number: usize,
    },

    /// Remove a task.
    Remove {
        /// Task number as shown by `todo list`
        number: usize,
    },

    /// Ensure config file exists (create with defaults if not).
    #[command(name = "ensure-config")]
    EnsureConfig,

    /// Show version information.
    Version,
}

impl Command {
    /// Returns true if this command reads from stdin.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Menu)
    }
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    Priority::parse(s).map_err(|e| e.to_string())
}
