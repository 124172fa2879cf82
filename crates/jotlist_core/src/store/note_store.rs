//! Note store: sole mutation authority over the ordered collection.
//!
//! # Responsibility
//! - Apply add/update/toggle/delete commands to the in-memory collection.
//! - Persist the full collection synchronously after every mutation.
//! - Publish the new state to registered observers after every mutation.
//!
//! # Invariants
//! - The collection is loaded from its snapshot exactly once, at `open`.
//! - Mutations run to completion (including the persistence write) before
//!   control returns to the caller; `&mut self` enforces the single-mutator
//!   model statically.
//! - Snapshot failures after `open` never surface to callers; they degrade
//!   to log events and the prior on-disk blob.

use crate::model::note::{Note, NoteId};
use crate::snapshot::note_snapshot::{LoadOutcome, SnapshotStore};
use log::{debug, error, info, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Handle returned by `subscribe`, used to remove the observer again.
pub type SubscriptionId = u64;

/// Receiver for post-mutation state notifications.
pub trait StoreObserver {
    /// Called with the full collection after every mutation, in order.
    fn notes_changed(&self, notes: &[Note]);
}

/// Sole mutator and source of truth for the note collection.
pub struct NoteStore<S: SnapshotStore> {
    snapshots: S,
    notes: Vec<Note>,
    observers: BTreeMap<SubscriptionId, Arc<dyn StoreObserver>>,
    next_subscription: SubscriptionId,
}

impl<S: SnapshotStore> NoteStore<S> {
    /// Opens the store, recovering the collection from its snapshot.
    ///
    /// Absence is the expected first-run state; corruption and transport
    /// failures degrade to an empty collection. Each outcome is logged.
    pub fn open(snapshots: S) -> Self {
        let notes = match snapshots.load() {
            Ok(LoadOutcome::Loaded(notes)) => {
                info!(
                    "event=snapshot_load module=store status=ok outcome=loaded count={}",
                    notes.len()
                );
                notes
            }
            Ok(LoadOutcome::Missing) => {
                info!("event=snapshot_load module=store status=ok outcome=missing");
                Vec::new()
            }
            Ok(LoadOutcome::Corrupt { reason }) => {
                warn!(
                    "event=snapshot_load module=store status=error error_code=snapshot_corrupt reason={reason}"
                );
                Vec::new()
            }
            Err(err) => {
                error!(
                    "event=snapshot_load module=store status=error error_code=snapshot_read_failed error={err}"
                );
                Vec::new()
            }
        };

        Self {
            snapshots,
            notes,
            observers: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    /// Appends a new note with a fresh id and returns that id.
    ///
    /// # Contract
    /// - `is_completed` starts as `false`.
    /// - Always succeeds; persists the full collection afterward.
    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> NoteId {
        let note = Note::new(title, content);
        let id = note.id;
        self.notes.push(note);
        self.commit();
        id
    }

    /// Replaces title/content/completion of the note with the given id.
    ///
    /// # Contract
    /// - Id and position never change.
    /// - Unknown id is a benign no-op; the collection is still persisted.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        is_completed: bool,
    ) {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.title = title.into();
                note.content = content.into();
                note.is_completed = is_completed;
            }
            None => debug!("event=note_update module=store status=ok outcome=not_found id={id}"),
        }
        self.commit();
    }

    /// Flips the completion flag of the note with the given id.
    ///
    /// Unknown id is a benign no-op; the collection is still persisted.
    pub fn toggle_completion(&mut self, id: NoteId) {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => note.toggle_completion(),
            None => debug!("event=note_toggle module=store status=ok outcome=not_found id={id}"),
        }
        self.commit();
    }

    /// Removes all notes whose position is in `indices`, in one pass.
    ///
    /// # Contract
    /// - Positions are collection-relative at call time.
    /// - Relative order of surviving notes is preserved.
    /// - Out-of-range positions are ignored.
    pub fn delete(&mut self, indices: &BTreeSet<usize>) {
        let mut position = 0;
        self.notes.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
        self.commit();
    }

    /// Returns the collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the note with the given id, if present.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Registers an observer; it receives the full state after every
    /// subsequent mutation.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) -> SubscriptionId {
        let subscription = self.next_subscription;
        self.next_subscription += 1;
        self.observers.insert(subscription, observer);
        subscription
    }

    /// Removes an observer. Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.observers.remove(&subscription).is_some()
    }

    /// Persists the collection and notifies observers, in that order.
    ///
    /// A failed save keeps the prior on-disk blob and is reported as a log
    /// event only; observers still see the new in-memory state.
    fn commit(&mut self) {
        if let Err(err) = self.snapshots.save(&self.notes) {
            error!(
                "event=snapshot_save module=store status=error error_code=snapshot_write_failed error={err}"
            );
        }
        for observer in self.observers.values() {
            observer.notes_changed(&self.notes);
        }
    }
}
