//! Data model types for the todo store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a task within one user's collection.
///
/// IDs are positive and allocated as `max(existing IDs) + 1`; the first task
/// a user adds gets ID 1. ID 0 is reserved and never allocated.
pub type TaskId = u32;

/// One user's tasks, keyed by task ID.
///
/// Key order carries no meaning; `BTreeMap` is used so the serialized
/// document is deterministic.
pub type UserCollection = BTreeMap<TaskId, TodoItem>;

/// The full persisted state: every user mapped to their collection.
///
/// This is the entire on-disk document. In JSON the task IDs appear as
/// string keys, e.g. `{"alice":{"1":{"task":"buy milk","status":"pending"}}}`.
pub type Document = BTreeMap<String, UserCollection>;

/// A single todo item belonging to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// What needs doing. Serialized under the key `task`.
    #[serde(rename = "task")]
    pub description: String,
    /// Free-form status label (e.g. "pending", "done"). Not validated.
    pub status: String,
}

impl TodoItem {
    /// Create a new item from owned or borrowed strings.
    pub fn new(description: impl Into<String>, status: impl Into<String>) -> Self {
        Self { description: description.into(), status: status.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_description_as_task() {
        let item = TodoItem::new("buy milk", "pending");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"task":"buy milk","status":"pending"}"#);
    }

    #[test]
    fn test_item_roundtrip() {
        let item = TodoItem::new("buy milk", "pending");
        let json = serde_json::to_string(&item).unwrap();
        let parsed: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_document_uses_string_keys_for_task_ids() {
        let mut collection = UserCollection::new();
        collection.insert(1, TodoItem::new("buy milk", "pending"));
        let mut document = Document::new();
        document.insert("alice".to_string(), collection);

        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(json, r#"{"alice":{"1":{"task":"buy milk","status":"pending"}}}"#);
    }

    #[test]
    fn test_document_parses_string_keys_back_to_ids() {
        let json = r#"{"bob":{"3":{"task":"water plants","status":"done"}}}"#;
        let document: Document = serde_json::from_str(json).unwrap();
        assert_eq!(document["bob"][&3], TodoItem::new("water plants", "done"));
    }

    #[test]
    fn test_status_is_free_form() {
        // Any string is a valid status; there is no enum to reject it.
        let json = r#"{"task":"x","status":"totally-made-up"}"#;
        let item: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, "totally-made-up");
    }
}
