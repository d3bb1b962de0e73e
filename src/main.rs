//! # todo - To-Do List CLI
//!
//! A small file-backed to-do list with a terminal user interface (TUI)
//! and a two-number calculator helper.
//!
//! ## Key Features
//!
//! - **Persistent Task List**: Tasks live in a plain JSON file and are
//!   saved after every change
//! - **Multiple Interfaces**: CLI subcommands for scripting + an
//!   interactive TUI for visual management
//! - **Simple Data**: Each task is just an id, its text, and a done flag
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interactive UI
//! todo ui
//!
//! # Add a task via CLI
//! todo add "Buy milk"
//!
//! # List tasks
//! todo list
//!
//! # Mark it done (or reopen it)
//! todo toggle 1
//!
//! # Remove it
//! todo delete 1
//! ```
//!
//! Data is stored locally in `~/.todo/tasks.json`; pass `--db <path>` to
//! use a different file.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod math;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
}

use cli::Cli;
use cmd::*;
use store::TaskList;

fn main() {
    let cli = Cli::parse();

    // Commands that never touch the task file.
    match &cli.command {
        Commands::Sum { a, b } => {
            cmd_sum(a, b);
            return;
        }
        Commands::Completions { shell } => {
            cmd_completions(*shell);
            return;
        }
        _ => {}
    }

    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let todo_dir = PathBuf::from(home).join(".todo");
        if let Err(e) = std::fs::create_dir_all(&todo_dir) {
            eprintln!("Failed to create todo directory {}: {}", todo_dir.display(), e);
            std::process::exit(1);
        }
        todo_dir.join("tasks.json")
    });

    if let Commands::Ui = cli.command {
        cmd_ui(&db_path);
        return;
    }

    let mut list = TaskList::load(&db_path);

    match cli.command {
        Commands::Ui => unreachable!("UI command handled above"),
        Commands::Sum { .. } => unreachable!("Sum command handled above"),
        Commands::Completions { .. } => unreachable!("Completions command handled above"),

        Commands::Add { text } => cmd_add(&mut list, &db_path, text),

        Commands::List => cmd_list(&list),

        Commands::Toggle { id } => cmd_toggle(&mut list, &db_path, id),

        Commands::Delete { id } => cmd_delete(&mut list, &db_path, id),
    }
}
