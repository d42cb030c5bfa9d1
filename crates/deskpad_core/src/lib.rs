//! Core domain logic for deskpad: an ordered todo collection with local
//! persistence, and a four-function calculator state machine.
//! This crate is the single source of truth for business invariants.

pub mod calc;
pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod reorder;
pub mod service;
pub mod store;

pub use calc::{CalcInput, Calculator, Operator, ERROR_DISPLAY};
pub use filter::FilterMode;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{TodoId, TodoItem, TodoValidationError};
pub use prefs::{load_theme, save_theme, toggle_theme, Theme};
pub use reorder::ReorderEngine;
pub use service::todo_service::{TodoEvent, TodoService};
pub use store::blob::{BlobError, BlobResult, BlobStore, SqliteBlobStore};
pub use store::todo_store::{StoreError, StoreResult, TodoStore, TODOS_BLOB_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
