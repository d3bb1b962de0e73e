//! Command implementations for the CLI interface.
//!
//! This module contains the command handlers for the subcommands exposed
//! by the binary, from the basic list mutations to the TUI entry point.

use std::path::Path;

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::math;
use crate::store::TaskList;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive UI interface.
    Ui,

    /// Add a new task.
    Add {
        /// Task text. Must be non-empty after trimming.
        text: String,
    },

    /// List all tasks.
    List,

    /// Toggle a task between open and done.
    Toggle {
        /// Task ID to toggle.
        id: u64,
    },

    /// Delete a task by ID.
    Delete {
        /// Task ID to delete.
        id: u64,
    },

    /// Sum two numbers.
    Sum {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui(db_path: &Path) {
    if let Err(e) = run_tui(db_path) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Add a new task to the list.
pub fn cmd_add(list: &mut TaskList, db_path: &Path, text: String) {
    let Some(id) = list.add_task(&text) else {
        eprintln!("Task text cannot be empty.");
        std::process::exit(1);
    };
    save_or_exit(list, db_path);
    println!("Added task {}", id);
}

/// Print the task table, or an empty-state line when there are no tasks.
pub fn cmd_list(list: &TaskList) {
    for line in list_lines(list) {
        println!("{line}");
    }
}

/// Lines printed by `list`: a header and one row per task in store order,
/// or the empty-state note.
fn list_lines(list: &TaskList) -> Vec<String> {
    if list.tasks.is_empty() {
        return vec!["No tasks yet. Add one with `todo add <text>`.".to_string()];
    }
    let mut lines = vec![format!("{:<5} {:<5} Text", "ID", "Done")];
    for t in &list.tasks {
        let mark = if t.completed { "[x]" } else { "[ ]" };
        lines.push(format!("{:<5} {:<5} {}", t.id, mark, t.text));
    }
    lines
}

/// Toggle a task's completion state.
pub fn cmd_toggle(list: &mut TaskList, db_path: &Path, id: u64) {
    match list.toggle(id) {
        Some(true) => {
            save_or_exit(list, db_path);
            println!("Completed task {}", id);
        }
        Some(false) => {
            save_or_exit(list, db_path);
            println!("Reopened task {}", id);
        }
        None => println!("No task with ID {}", id),
    }
}

/// Delete a task.
pub fn cmd_delete(list: &mut TaskList, db_path: &Path, id: u64) {
    if list.delete(id) {
        save_or_exit(list, db_path);
        println!("Deleted task {}", id);
    } else {
        println!("No task with ID {}", id);
    }
}

/// Sum two numeric arguments, validating parseability first.
pub fn cmd_sum(a: &str, b: &str) {
    match math::sum_inputs(a, b) {
        Some(total) => println!("Result: {}", total),
        None => println!("Please enter valid numbers."),
    }
}

/// Generate shell completions on stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

fn save_or_exit(list: &TaskList, db_path: &Path) {
    if let Err(e) = list.save(db_path) {
        eprintln!("Failed to save task file: {e}");
        std::process::exit(1);
    }
}
