//! CLI binary for `todo_list`.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the library.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use todo_list::cli::{run, Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Only hand over the terminal for the menu (avoids holding the stdout lock)
    let interactive = cli.command.as_ref().map_or(true, Command::is_interactive);
    let output = if interactive {
        run(cli, Path::new("."), io::stdin().lock(), io::stdout().lock())
    } else {
        run(cli, Path::new("."), io::empty(), io::sink())
    };

    for msg in output.stdout {
        println!("{msg}");
    }
    for msg in output.stderr {
        eprintln!("{msg}");
    }

    output.exit_code
}
