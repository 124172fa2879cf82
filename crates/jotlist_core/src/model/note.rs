//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical record stored and displayed by the note list.
//! - Provide lifecycle helpers for completion state.
//!
//! # Invariants
//! - `id` is generated at creation and never changes for the note lifetime.
//! - Field declaration order is the storage order: id, title, content,
//!   isCompleted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A single user-entered record with title, free-text content, and a
/// completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable ID used for lookups and update targeting.
    pub id: NoteId,
    /// Short display title.
    pub title: String,
    /// Free-text body.
    pub content: String,
    /// Serialized as `isCompleted` to match the snapshot wire naming.
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl Note {
    /// Creates a new note with a generated stable ID.
    ///
    /// # Invariants
    /// - `is_completed` starts as `false`.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, content)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by test fixtures and import paths where identity already exists.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            is_completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
