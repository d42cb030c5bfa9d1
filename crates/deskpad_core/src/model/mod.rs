//! Domain model for the todo collection.
//!
//! # Responsibility
//! - Define the canonical item record shared by store, reorder and view code.
//!
//! # Invariants
//! - Every item is identified by a stable `TodoId`.
//! - `order` is a plain sort key; nothing outside the store assigns it.

pub mod todo;
