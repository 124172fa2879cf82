//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotlist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use jotlist_core::db::open_db_in_memory;
use jotlist_core::{NoteStore, SqliteSnapshotStore};

fn main() {
    println!("jotlist_core version={}", jotlist_core::core_version());

    let probe = open_db_in_memory().map_err(|err| err.to_string()).and_then(|conn| {
        let snapshots = SqliteSnapshotStore::try_new(&conn).map_err(|err| err.to_string())?;
        let mut store = NoteStore::open(snapshots);
        let _ = store.add("smoke", "");
        Ok(store.len())
    });

    match probe {
        Ok(count) => println!("jotlist_core smoke_notes={count}"),
        Err(err) => println!("jotlist_core smoke_error={err}"),
    }
}
