//! Persistence layer: the blob-store seam and the todo item store.
//!
//! # Responsibility
//! - Define the durable key-value byte-store contract.
//! - Keep the ordered in-memory collection and its serialized form in sync.
//!
//! # Invariants
//! - Every mutating store operation rewrites the whole collection blob
//!   before returning.
//! - The in-memory collection is always sorted ascending by `order`.

pub mod blob;
pub mod todo_store;
