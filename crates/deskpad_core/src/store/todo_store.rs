//! Ordered todo collection with whole-value persistence.
//!
//! # Responsibility
//! - Hold the in-memory ordered collection of todo items.
//! - Rewrite the serialized collection blob after every mutation.
//!
//! # Invariants
//! - Items are always sorted ascending by `order` after any mutation;
//!   ties keep their relative position (stable sort).
//! - No two items ever share an id.
//! - A malformed persisted blob resets the collection to empty; it is never
//!   partially loaded.

use crate::model::todo::{TodoId, TodoItem, TodoValidationError};
use crate::store::blob::{BlobError, BlobStore};
use log::{debug, error, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key of the serialized todo collection in the blob store.
pub const TODOS_BLOB_KEY: &str = "todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic error for item-store operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TodoValidationError),
    DuplicateId(TodoId),
    Blob(BlobError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "todo id already present in store: {id}"),
            Self::Blob(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize todo collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Blob(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<BlobError> for StoreError {
    fn from(value: BlobError) -> Self {
        Self::Blob(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Ordered collection of todo items backed by a [`BlobStore`].
///
/// The serialized blob is the sole durable representation: it is read once
/// via [`TodoStore::load`] and rewritten in full after every mutation.
pub struct TodoStore<B: BlobStore> {
    blob: B,
    items: Vec<TodoItem>,
}

impl<B: BlobStore> TodoStore<B> {
    /// Creates an empty store over the given blob backend.
    ///
    /// Call [`TodoStore::load`] before use to pick up persisted state.
    pub fn new(blob: B) -> Self {
        Self {
            blob,
            items: Vec::new(),
        }
    }

    /// Reads the persisted collection blob and replaces the in-memory state.
    ///
    /// A missing key yields an empty collection. A malformed blob is logged
    /// and also yields an empty collection; parse failures never surface to
    /// the caller and never partially load.
    ///
    /// # Errors
    /// Only blob transport failures propagate.
    pub fn load(&mut self) -> StoreResult<()> {
        self.items = match self.blob.read(TODOS_BLOB_KEY)? {
            None => Vec::new(),
            Some(bytes) => match serde_json::from_slice::<Vec<TodoItem>>(&bytes) {
                Ok(items) => items,
                Err(err) => {
                    error!(
                        "event=store_load module=store status=error error_code=malformed_blob error={err}"
                    );
                    Vec::new()
                }
            },
        };
        self.items.sort_by_key(|item| item.order);
        info!(
            "event=store_load module=store status=ok count={}",
            self.items.len()
        );
        Ok(())
    }

    /// Inserts a new item, re-sorts by order key and persists.
    ///
    /// # Errors
    /// - `Validation` when the item violates model invariants.
    /// - `DuplicateId` when an item with the same id already exists.
    pub fn add(&mut self, item: TodoItem) -> StoreResult<()> {
        item.validate()?;
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::DuplicateId(item.id));
        }
        self.items.push(item);
        self.items.sort_by_key(|item| item.order);
        self.persist()
    }

    /// Replaces the item sharing `item.id` and persists.
    ///
    /// Silent no-op when the id is not present; nothing is written in that
    /// case.
    pub fn update(&mut self, item: TodoItem) -> StoreResult<()> {
        item.validate()?;
        let Some(slot) = self.items.iter_mut().find(|existing| existing.id == item.id) else {
            debug!("event=store_update module=store status=skip reason=unknown_id id={}", item.id);
            return Ok(());
        };
        *slot = item;
        self.items.sort_by_key(|item| item.order);
        self.persist()
    }

    /// Deletes the item with the matching id and persists.
    ///
    /// Silent no-op when the id is absent; nothing is written in that case.
    pub fn remove(&mut self, id: TodoId) -> StoreResult<()> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!("event=store_remove module=store status=skip reason=unknown_id id={id}");
            return Ok(());
        }
        self.persist()
    }

    /// Rebuilds the collection from the full id sequence in new visual order,
    /// reassigning each item's order key to its 0-based position, then
    /// persists.
    ///
    /// The sequence is authoritative: ids not present in the store are
    /// skipped, and items not mentioned in the sequence are dropped from the
    /// store. A duplicated id keeps its first occurrence only, preserving id
    /// uniqueness.
    pub fn reorder(&mut self, id_sequence: &[TodoId]) -> StoreResult<()> {
        let mut seen: HashSet<TodoId> = HashSet::with_capacity(id_sequence.len());
        let mut reordered = Vec::with_capacity(id_sequence.len());

        for id in id_sequence {
            if !seen.insert(*id) {
                debug!("event=store_reorder module=store status=skip reason=duplicate_id id={id}");
                continue;
            }
            if let Some(item) = self.items.iter().find(|item| item.id == *id) {
                let mut item = item.clone();
                item.order = reordered.len() as i64;
                reordered.push(item);
            }
        }

        if reordered.len() != self.items.len() {
            info!(
                "event=store_reorder module=store status=ok dropped={}",
                self.items.len() - reordered.len()
            );
        }
        // Positional order keys are already ascending; no re-sort needed.
        self.items = reordered;
        self.persist()
    }

    /// Returns a defensive copy of the current ordered collection.
    pub fn get_all(&self) -> Vec<TodoItem> {
        self.items.clone()
    }

    /// Returns a copy of the matching item, or `None` when absent.
    pub fn get_by_id(&self, id: TodoId) -> Option<TodoItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn persist(&self) -> StoreResult<()> {
        let bytes = serde_json::to_vec(&self.items)?;
        self.blob.write(TODOS_BLOB_KEY, &bytes)?;
        Ok(())
    }
}
