//! Debug operation logging.
//!
//! When `debug_logging` is enabled in the config, every mutating operation
//! performed through the CLI is appended as a JSONL line to
//! `.todo-store/operations.jsonl`. This allows reconstructing what was done
//! to the document without changing any operation's outcome.

use crate::config::StoreConfig;
use crate::models::TaskId;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Log a mutating operation if debug logging is enabled.
///
/// Checks the config under the home directory for the `debug_logging` flag.
/// If enabled, appends a JSONL line containing the operation name, the user,
/// the affected task ID, and a timestamp.
///
/// Errors are silently ignored — logging never affects the operation itself.
pub fn log_operation(operation: &str, user_id: &str, task_id: Option<TaskId>) {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    log_operation_in(operation, user_id, task_id, &home);
}

/// Log an operation under a specific base directory (for testing).
pub fn log_operation_in(operation: &str, user_id: &str, task_id: Option<TaskId>, base_dir: &Path) {
    // Load config — if it fails or is absent, skip logging
    let Ok(Some(config)) = StoreConfig::load_from(base_dir) else {
        return;
    };

    if !config.debug_logging {
        return;
    }

    write_operation(operation, user_id, task_id, base_dir);
}

/// Write the operation entry to the log file.
fn write_operation(operation: &str, user_id: &str, task_id: Option<TaskId>, base_dir: &Path) {
    let log_dir = base_dir.join(".todo-store");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let log_path = log_dir.join(crate::paths::OPERATIONS_LOG_NAME);
    let timestamp = chrono::Utc::now().to_rfc3339();

    let entry = serde_json::json!({
        "timestamp": timestamp,
        "operation": operation,
        "user": user_id,
        "task_id": task_id,
    });

    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let _ = writeln!(file, "{entry}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_config(dir: &Path, debug_logging: bool) {
        let config = StoreConfig { debug_logging, ..Default::default() };
        config.save_to(dir).unwrap();
    }

    fn read_log_lines(dir: &Path) -> Vec<serde_json::Value> {
        let log_path = dir.join(".todo-store").join(crate::paths::OPERATIONS_LOG_NAME);
        if !log_path.exists() {
            return vec![];
        }
        let content = std::fs::read_to_string(&log_path).unwrap();
        content
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_log_operation_when_enabled() {
        let dir = TempDir::new().unwrap();
        setup_config(dir.path(), true);

        log_operation_in("add", "alice", Some(1), dir.path());

        let lines = read_log_lines(dir.path());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["operation"], "add");
        assert_eq!(lines[0]["user"], "alice");
        assert_eq!(lines[0]["task_id"], 1);
        assert!(lines[0]["timestamp"].is_string());
    }

    #[test]
    fn test_log_operation_when_disabled() {
        let dir = TempDir::new().unwrap();
        setup_config(dir.path(), false);

        log_operation_in("delete", "alice", Some(2), dir.path());

        let lines = read_log_lines(dir.path());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_log_operation_without_config() {
        let dir = TempDir::new().unwrap();

        log_operation_in("add", "alice", None, dir.path());

        let lines = read_log_lines(dir.path());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_log_operation_appends() {
        let dir = TempDir::new().unwrap();
        setup_config(dir.path(), true);

        log_operation_in("add", "alice", Some(1), dir.path());
        log_operation_in("update", "alice", Some(1), dir.path());
        log_operation_in("add", "bob", None, dir.path());

        let lines = read_log_lines(dir.path());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1]["operation"], "update");
        assert_eq!(lines[2]["task_id"], serde_json::Value::Null);
    }
}
