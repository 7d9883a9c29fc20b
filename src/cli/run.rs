//! Command execution for the CLI.
//!
//! This module handles running CLI commands and producing output.

use crate::cli::{Cli, Command};
use crate::config::{self, TodoConfig};
use crate::error::Result;
use crate::events::EventLog;
use crate::menu::{render_task_list, Menu};
use crate::tasks::{Completion, JsonFileTaskStore, Priority, TaskList};
use crate::templates;
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

impl CliOutput {
    fn success(message: String) -> Self {
        Self { exit_code: ExitCode::SUCCESS, stdout: vec![message], stderr: vec![] }
    }

    fn failure(message: String) -> Self {
        Self { exit_code: ExitCode::from(1), stdout: vec![], stderr: vec![message] }
    }
}

/// Run a CLI command against the project in `base_dir`.
///
/// The interactive menu reads `input` and writes to `output` directly; every
/// other command reports through the returned [`CliOutput`].
pub fn run<R: BufRead, W: Write>(cli: Cli, base_dir: &Path, input: R, output: W) -> CliOutput {
    let command = cli.command.unwrap_or(Command::Menu);
    let file = cli.file.as_deref();

    match command {
        Command::Version => CliOutput::success(format!("todo v{}", crate::VERSION)),
        Command::EnsureConfig => run_ensure_config(base_dir),
        Command::Menu => run_menu(base_dir, file, input, output),
        Command::List => run_list(base_dir, file),
        Command::Add { name, priority } => run_add(base_dir, file, &name, priority),
        Command::Complete { number } => run_complete(base_dir, file, number),
        Command::Remove { number } => run_remove(base_dir, file, number),
    }
}

/// Load config, set up templates and the event log, and open the task list.
fn open_list(base_dir: &Path, file: Option<&Path>) -> Result<TaskList<JsonFileTaskStore>> {
    let config = TodoConfig::load(base_dir)?;
    templates::init_templates(config.templates_path(base_dir).as_deref())?;

    let tasks_path = file.map_or_else(|| config.tasks_path(base_dir), |f| base_dir.join(f));
    let events = config.log_path(base_dir).map_or_else(EventLog::disabled, EventLog::new);

    TaskList::open_with_log(JsonFileTaskStore::new(tasks_path), config.sort_order, events)
}

fn run_ensure_config(base_dir: &Path) -> CliOutput {
    match config::ensure_config(base_dir) {
        Ok(config) => CliOutput {
            exit_code: ExitCode::SUCCESS,
            stdout: vec![],
            stderr: vec![
                format!("Config ensured at {}", config::CONFIG_FILE_NAME),
                format!("  tasks_file: {}", config.tasks_file.display()),
                format!("  debug_logging: {}", config.debug_logging),
            ],
        },
        Err(e) => CliOutput::failure(format!("Error ensuring config: {e}")),
    }
}

fn run_menu<R: BufRead, W: Write>(
    base_dir: &Path,
    file: Option<&Path>,
    input: R,
    output: W,
) -> CliOutput {
    let result = open_list(base_dir, file)
        .and_then(|mut list| Menu::new(&mut list, input, output).run());

    match result {
        Ok(()) => CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![], stderr: vec![] },
        Err(e) => CliOutput::failure(format!("Error: {e}")),
    }
}

fn run_list(base_dir: &Path, file: Option<&Path>) -> CliOutput {
    let listing = open_list(base_dir, file).and_then(|list| render_task_list(&list.list_sorted()));

    match listing {
        Ok(text) => CliOutput::success(text.trim_end().to_string()),
        Err(e) => CliOutput::failure(format!("Error: {e}")),
    }
}

fn run_add(base_dir: &Path, file: Option<&Path>, name: &str, priority: Priority) -> CliOutput {
    let added = open_list(base_dir, file).and_then(|mut list| list.add_task(name, priority));

    match added {
        Ok(task) => CliOutput::success(format!(
            "Task '{}' with priority '{}' added to your to-do list.",
            task.name, task.priority
        )),
        Err(e) => CliOutput::failure(format!("Error: {e}")),
    }
}

fn run_complete(base_dir: &Path, file: Option<&Path>, number: usize) -> CliOutput {
    let outcome = open_list(base_dir, file).and_then(|mut list| list.complete_task(number));

    match outcome {
        Ok(Completion::Completed(task)) => {
            CliOutput::success(format!("Task '{}' marked as completed.", task.name))
        }
        Ok(Completion::AlreadyCompleted(task)) => {
            CliOutput::success(format!("Task '{}' is already completed.", task.name))
        }
        Err(e) => CliOutput::failure(format!("Error: {e}")),
    }
}

fn run_remove(base_dir: &Path, file: Option<&Path>, number: usize) -> CliOutput {
    let removed = open_list(base_dir, file).and_then(|mut list| list.remove_task(number));

    match removed {
        Ok(task) => {
            CliOutput::success(format!("Task '{}' removed from your to-do list.", task.name))
        }
        Err(e) => CliOutput::failure(format!("Error: {e}")),
    }
}
