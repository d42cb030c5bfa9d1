//! Read-only filtered projection of the todo collection.
//!
//! # Responsibility
//! - Derive the display subsequence for the active filter mode.
//!
//! # Invariants
//! - Projection is pure: store order is preserved and the store is never
//!   mutated.

use crate::model::todo::TodoItem;

/// Display filter for the todo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every item.
    #[default]
    All,
    /// Items not yet completed.
    Active,
    /// Completed items.
    Completed,
}

impl FilterMode {
    /// Returns whether `item` belongs to this projection.
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }
}

/// Returns the subsequence of `items` matching `mode`, preserving order.
pub fn apply(items: &[TodoItem], mode: FilterMode) -> Vec<TodoItem> {
    items
        .iter()
        .filter(|item| mode.matches(item))
        .cloned()
        .collect()
}
