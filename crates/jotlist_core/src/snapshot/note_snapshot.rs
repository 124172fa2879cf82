//! Note collection snapshot contracts and SQLite implementation.
//!
//! # Responsibility
//! - Serialize the full note collection to a JSON blob under one fixed key.
//! - Recover the collection on startup with a typed outcome.
//!
//! # Invariants
//! - `save` replaces the prior blob wholesale; a failed encode leaves it
//!   untouched.
//! - `load` never invents data: absence, corruption, and success are
//!   reported as distinct outcomes.
//! - Decoded collections with duplicate ids are classified as corrupt.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key under which the whole collection is stored.
pub const SNAPSHOT_KEY: &str = "notes_list";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot persistence and readiness errors.
#[derive(Debug)]
pub enum SnapshotError {
    Db(DbError),
    Encode(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingKvTable,
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingKvTable => write!(f, "kv_store table is missing"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingKvTable => None,
        }
    }
}

impl From<DbError> for SnapshotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SnapshotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Typed result of a snapshot load.
///
/// `Missing` is the expected first-run state; `Corrupt` means a blob exists
/// but cannot be trusted. The store decides what either degrades to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Note>),
    Missing,
    Corrupt { reason: String },
}

/// Persistence interface for whole-collection snapshots.
pub trait SnapshotStore {
    /// Encodes and writes the full collection, replacing any prior blob.
    fn save(&self, notes: &[Note]) -> SnapshotResult<()>;
    /// Reads and classifies the stored blob.
    fn load(&self) -> SnapshotResult<LoadOutcome>;
}

/// SQLite-backed snapshot store.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    /// Constructs a snapshot store from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingKvTable` when the schema version matches but the table is
    ///   absent.
    pub fn try_new(conn: &'conn Connection) -> SnapshotResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version != expected_version {
            return Err(SnapshotError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists != 1 {
            return Err(SnapshotError::MissingKvTable);
        }

        Ok(Self { conn })
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn save(&self, notes: &[Note]) -> SnapshotResult<()> {
        let blob = serde_json::to_vec(notes).map_err(SnapshotError::Encode)?;

        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![SNAPSHOT_KEY, blob],
        )?;

        Ok(())
    }

    fn load(&self) -> SnapshotResult<LoadOutcome> {
        let blob: Option<Vec<u8>> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(blob) = blob else {
            return Ok(LoadOutcome::Missing);
        };

        match serde_json::from_slice::<Vec<Note>>(&blob) {
            Ok(notes) => match first_duplicate_id(&notes) {
                Some(id) => Ok(LoadOutcome::Corrupt {
                    reason: format!("duplicate note id {id}"),
                }),
                None => Ok(LoadOutcome::Loaded(notes)),
            },
            Err(err) => Ok(LoadOutcome::Corrupt {
                reason: err.to_string(),
            }),
        }
    }
}

fn first_duplicate_id(notes: &[Note]) -> Option<NoteId> {
    let mut seen = HashSet::with_capacity(notes.len());
    notes
        .iter()
        .find_map(|note| (!seen.insert(note.id)).then_some(note.id))
}
