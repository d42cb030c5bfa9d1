//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, reorder and view calls into event-level APIs.
//! - Keep the UI layer decoupled from storage details.

pub mod todo_service;
