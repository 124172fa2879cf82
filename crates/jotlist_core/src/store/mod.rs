//! Store orchestration over the note collection.
//!
//! # Responsibility
//! - Own the in-memory collection and its mutation entry points.
//! - Keep callers decoupled from snapshot/storage details.

pub mod note_store;
