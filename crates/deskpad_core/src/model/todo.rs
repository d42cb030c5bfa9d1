//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical record behind the list view and the persisted blob.
//! - Provide creation helpers that assign identity and an initial order key.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `title` is never empty or whitespace-only once validated.
//! - `order` values sorted ascending define the canonical display order.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a todo item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Validation failure for a todo item record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// `title` is empty or whitespace-only.
    EmptyTitle,
    /// `id` is the nil UUID.
    NilId,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "todo title must not be empty"),
            Self::NilId => write!(f, "todo id must not be the nil uuid"),
        }
    }
}

impl Error for TodoValidationError {}

/// Canonical todo record.
///
/// The serialized shape uses camelCase field names; this is the exact object
/// layout of the persisted collection blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Stable global ID, assigned at creation, immutable.
    pub id: TodoId,
    /// Human-readable title. Must not be empty.
    pub title: String,
    /// Optional calendar due date, serialized as ISO-8601 `YYYY-MM-DD`.
    pub due_date: Option<NaiveDate>,
    /// Completion flag.
    pub completed: bool,
    /// Numeric sort key. Epoch milliseconds at creation, positional index
    /// after a reorder. Ties are broken by array position (stable sort).
    pub order: i64,
}

impl TodoItem {
    /// Creates a new item with a generated id and an epoch-millisecond order
    /// key, so later creations sort after earlier ones.
    pub fn new(title: impl Into<String>, due_date: Option<NaiveDate>) -> Self {
        Self::with_id(Uuid::new_v4(), title, due_date, Utc::now().timestamp_millis())
    }

    /// Creates an item with caller-provided identity and order key.
    ///
    /// Used by load/import paths where identity already exists externally.
    pub fn with_id(
        id: TodoId,
        title: impl Into<String>,
        due_date: Option<NaiveDate>,
        order: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            completed: false,
            order,
        }
    }

    /// Checks the record against model invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title trims to nothing.
    /// - `NilId` when the id is the nil UUID.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(())
    }
}
