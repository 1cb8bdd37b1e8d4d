//! # `todo_store`
//!
//! Per-user todo lists persisted as a single JSON document on disk.
//!
//! Each user owns an independent collection of tasks keyed by small integer
//! IDs. Every operation reads the document fresh and every mutation writes
//! it fully back; there is no cache between calls.
//!
//! # Example
//!
//! ```no_run
//! use todo_store::{JsonTaskStore, TaskStore};
//!
//! let store = JsonTaskStore::new("/tmp/list.json");
//!
//! let id = store.add("alice", "buy milk", "pending").unwrap().unwrap();
//! store.update("alice", "", "done", id).unwrap();
//!
//! let tasks = store.read("alice").unwrap();
//! assert_eq!(tasks[&id].status, "done");
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod op_logging;
pub mod paths;
pub mod store;

pub use error::{Error, Result};
pub use models::{Document, TaskId, TodoItem, UserCollection};
pub use store::{JsonTaskStore, TaskStore};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
