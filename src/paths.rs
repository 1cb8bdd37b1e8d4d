//! Path utilities for locating the backing document.
//!
//! By default the store keeps all data in `~/.todo-store/`, with the task
//! document itself at `~/.todo-store/list.json`. Hosts can point the store
//! anywhere via [`crate::store::JsonTaskStore::new`] or the config file.

use std::path::PathBuf;

/// The base directory name for todo-store data.
const DATA_DIR_NAME: &str = ".todo-store";

/// The task document filename.
pub const DATA_FILE_NAME: &str = "list.json";

/// The operation log filename.
pub const OPERATIONS_LOG_NAME: &str = "operations.jsonl";

/// Get the base data directory, `~/.todo-store/`.
///
/// Returns `None` if the home directory cannot be determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// Get the default task document path, `~/.todo-store/list.json`.
///
/// Returns `None` if the home directory cannot be determined.
#[must_use]
pub fn data_file_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(DATA_FILE_NAME))
}
