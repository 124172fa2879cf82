//! Snapshot persistence layer.
//!
//! # Responsibility
//! - Define the whole-collection save/load contract over key-value storage.
//! - Isolate encoding and SQL details from store orchestration.
//!
//! # Invariants
//! - The entire collection is one blob under one fixed key; there is no
//!   incremental persistence.
//! - Read paths classify invalid persisted state instead of masking it.

pub mod note_snapshot;
