//! CLI functionality for the todo store.
//!
//! This module provides the command-line interface logic, allowing the
//! binary to be a thin wrapper. All functions here are testable.

use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::TaskId;
use crate::op_logging;
use crate::store::{JsonTaskStore, TaskStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Per-user todo lists persisted as a single JSON document.
#[derive(Debug, Parser)]
#[command(name = "todo-store", version)]
pub struct Cli {
    /// Path to the backing document (overrides config and the default).
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI command to execute.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a user's tasks.
    List {
        /// The user whose tasks to list.
        user: String,
    },
    /// Add a task for a user.
    Add {
        /// The user to add the task for.
        user: String,
        /// What needs doing.
        description: String,
        /// Status label for the new task.
        #[arg(default_value = "pending")]
        status: String,
    },
    /// Update an existing task. Omitted fields are left unchanged.
    Update {
        /// The user owning the task.
        user: String,
        /// The task to update.
        task_id: TaskId,
        /// New description.
        #[arg(long, default_value = "")]
        description: String,
        /// New status.
        #[arg(long, default_value = "")]
        status: String,
    },
    /// Delete a task.
    Delete {
        /// The user owning the task.
        user: String,
        /// The task to delete.
        task_id: TaskId,
    },
}

/// Run the parsed CLI against the resolved store.
///
/// Returns the lines to print on success.
///
/// # Errors
///
/// Returns an error if no data file path can be resolved or if the store
/// operation fails.
pub fn run(cli: &Cli) -> Result<Vec<String>> {
    let store = JsonTaskStore::new(resolve_data_file(cli.data_file.clone())?);
    run_with_store(&store, &cli.command)
}

/// Execute one command against a store.
///
/// # Errors
///
/// Returns an error if the store operation fails.
pub fn run_with_store(store: &JsonTaskStore, command: &Command) -> Result<Vec<String>> {
    match command {
        Command::List { user } => {
            let collection = store.read(user)?;
            if collection.is_empty() {
                return Ok(vec![format!("no tasks for '{user}'")]);
            }
            Ok(collection
                .iter()
                .map(|(id, item)| format!("{id}: {} [{}]", item.description, item.status))
                .collect())
        }
        Command::Add { user, description, status } => match store.add(user, description, status)? {
            Some(id) => {
                op_logging::log_operation("add", user, Some(id));
                Ok(vec![format!("added task {id} for '{user}'")])
            }
            None => Ok(vec!["nothing to add: description and status must be non-empty".to_string()]),
        },
        Command::Update { user, task_id, description, status } => {
            store.update(user, description, status, *task_id)?;
            op_logging::log_operation("update", user, Some(*task_id));
            Ok(vec![format!("updated task {task_id} for '{user}'")])
        }
        Command::Delete { user, task_id } => {
            store.delete_task(user, *task_id)?;
            op_logging::log_operation("delete", user, Some(*task_id));
            Ok(vec![format!("deleted task {task_id} for '{user}'")])
        }
    }
}

/// Resolve the backing document path: flag, then config, then default.
fn resolve_data_file(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    let config = StoreConfig::load()?.unwrap_or_default();
    config.effective_data_file().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "cannot determine a data file path (no --data-file, config, or home directory)",
        )
        .into()
    })
}
