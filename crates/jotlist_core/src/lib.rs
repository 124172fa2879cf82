//! Core domain logic for jotlist.
//! This crate is the single source of truth for the note collection.

pub mod db;
pub mod logging;
pub mod model;
pub mod snapshot;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use snapshot::note_snapshot::{
    LoadOutcome, SnapshotError, SnapshotResult, SnapshotStore, SqliteSnapshotStore, SNAPSHOT_KEY,
};
pub use store::note_store::{NoteStore, StoreObserver, SubscriptionId};

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
