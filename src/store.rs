//! Task store trait and JSON-file implementation.
//!
//! The entire state is one JSON document mapping user IDs to their task
//! collections. Every operation reads the document fresh from disk and every
//! mutating operation writes the whole document back; nothing is cached
//! between calls.

use crate::error::{Error, Result};
use crate::models::{Document, TaskId, TodoItem, UserCollection};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Trait for task storage operations.
///
/// All methods return a `Result` and may fail with I/O or decode errors.
#[allow(clippy::missing_errors_doc)]
pub trait TaskStore {
    /// Get the full current collection for a user.
    ///
    /// Returns an empty collection for an unknown user; a missing user is
    /// never an error.
    fn read(&self, user_id: &str) -> Result<UserCollection>;

    /// Add a task for a user, allocating the next ID.
    ///
    /// The new ID is `max(existing IDs) + 1`, or 1 for an empty collection.
    /// An empty `description` or `status` is treated as nothing to add: the
    /// call succeeds with `None` and the persisted document is left
    /// untouched.
    fn add(&self, user_id: &str, description: &str, status: &str) -> Result<Option<TaskId>>;

    /// Update an existing task's fields.
    ///
    /// An empty `description` replaces only the status; an empty `status`
    /// replaces only the description; when both are non-empty the whole item
    /// is replaced. When both are empty the item is left as it was, though
    /// the document is still rewritten.
    ///
    /// `task_id` 0 is reserved and the call is a silent no-op. Any other
    /// absent ID fails with [`Error::TaskNotFound`].
    fn update(
        &self,
        user_id: &str,
        description: &str,
        status: &str,
        task_id: TaskId,
    ) -> Result<()>;

    /// Delete a task from a user's collection.
    ///
    /// `task_id` 0 is a silent no-op, mirroring [`TaskStore::update`]. An
    /// absent ID fails with [`Error::TaskNotFound`] and leaves the store
    /// unchanged. Deleted IDs are not reallocated while higher IDs exist.
    fn delete_task(&self, user_id: &str, task_id: TaskId) -> Result<()>;
}

/// JSON-file-backed task store.
///
/// Mutating operations are serialized behind an in-process lock held across
/// the whole load-modify-store cycle, so concurrent callers within one
/// process cannot lose each other's updates. There is no cross-process
/// coordination: two processes writing the same file still race.
#[derive(Debug)]
pub struct JsonTaskStore {
    /// Path to the backing JSON document.
    data_path: PathBuf,
    /// Guards the read-modify-write cycle of mutating operations.
    write_lock: Mutex<()>,
}

impl JsonTaskStore {
    /// Create a store backed by the given file.
    ///
    /// The file does not need to exist yet; a missing or empty file reads as
    /// an empty document.
    pub fn new(data_path: impl AsRef<Path>) -> Self {
        Self { data_path: data_path.as_ref().to_path_buf(), write_lock: Mutex::new(()) }
    }

    /// Create a store at the default location, `~/.todo-store/list.json`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn at_default_location() -> Option<Self> {
        crate::paths::data_file_path().map(Self::new)
    }

    /// Get the backing file path.
    #[must_use]
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Load the full document from disk.
    ///
    /// A missing or zero-byte file is the empty-state signal, not a fault.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read for any other reason, or
    /// if it holds malformed JSON.
    pub fn load_document(&self) -> Result<Document> {
        let bytes = match std::fs::read(&self.data_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Ok(Document::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Load one user's collection, empty if the user is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded.
    pub fn load_user_collection(&self, user_id: &str) -> Result<UserCollection> {
        let mut document = self.load_document()?;
        Ok(document.remove(user_id).unwrap_or_default())
    }

    /// Replace one user's collection and rewrite the whole document.
    ///
    /// Reloads the current document first so other users' entries are
    /// preserved. Callers performing a read-modify-write must hold
    /// `write_lock` around the full cycle; this method alone does not lock.
    fn save_user_collection(&self, user_id: &str, collection: UserCollection) -> Result<()> {
        let mut document = self.load_document()?;
        document.insert(user_id.to_string(), collection);

        if let Some(parent) = self.data_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec(&document)?;
        std::fs::write(&self.data_path, bytes)?;
        Ok(())
    }

    /// Acquire the write lock, recovering from a poisoned mutex.
    ///
    /// The guarded data is `()`, so a panic in another thread cannot have
    /// left it inconsistent.
    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TaskStore for JsonTaskStore {
    fn read(&self, user_id: &str) -> Result<UserCollection> {
        self.load_user_collection(user_id)
    }

    fn add(&self, user_id: &str, description: &str, status: &str) -> Result<Option<TaskId>> {
        if description.is_empty() || status.is_empty() {
            // Nothing to add; the store is deliberately left untouched.
            return Ok(None);
        }

        let _guard = self.lock();
        let mut collection = self.load_user_collection(user_id)?;

        // Saturate rather than wrap: a document already holding u32::MAX
        // must never hand out the reserved ID 0.
        let new_id = collection.keys().max().copied().unwrap_or(0).saturating_add(1);
        collection.insert(new_id, TodoItem::new(description, status));
        self.save_user_collection(user_id, collection)?;

        Ok(Some(new_id))
    }

    fn update(
        &self,
        user_id: &str,
        description: &str,
        status: &str,
        task_id: TaskId,
    ) -> Result<()> {
        if task_id == 0 {
            return Ok(());
        }

        let _guard = self.lock();
        let mut collection = self.load_user_collection(user_id)?;

        let Some(item) = collection.get_mut(&task_id) else {
            return Err(Error::TaskNotFound { user_id: user_id.to_string(), task_id });
        };

        // The description branch is checked first; when both fields are
        // empty the item stays as it was, but the save below still runs.
        if description.is_empty() {
            if !status.is_empty() {
                item.status = status.to_string();
            }
        } else if status.is_empty() {
            item.description = description.to_string();
        } else {
            item.description = description.to_string();
            item.status = status.to_string();
        }

        self.save_user_collection(user_id, collection)
    }

    fn delete_task(&self, user_id: &str, task_id: TaskId) -> Result<()> {
        if task_id == 0 {
            return Ok(());
        }

        let _guard = self.lock();
        let mut collection = self.load_user_collection(user_id)?;

        if collection.remove(&task_id).is_none() {
            return Err(Error::TaskNotFound { user_id: user_id.to_string(), task_id });
        }

        self.save_user_collection(user_id, collection)
    }
}
