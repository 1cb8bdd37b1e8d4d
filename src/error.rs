//! Error types for `todo_store`.

use crate::models::TaskId;

/// Errors that can occur while operating on the store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred reading or writing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The config file exists but cannot be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An update or delete named a task ID absent from the user's collection.
    #[error("task {task_id} not found for user '{user_id}'")]
    TaskNotFound {
        /// The user whose collection was searched.
        user_id: String,
        /// The missing task ID.
        task_id: TaskId,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
