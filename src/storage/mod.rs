/// Storage layer for persisting the entry collection
///
/// The journal keeps its whole history as one serialized record. This module
/// defines the store contract and re-exports the JSON file backend.

pub mod json_file;

// Re-export the main storage types
pub use json_file::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Entry;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize entries: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining the persistence contract for the entry collection
///
/// A store owns exactly one record: the full entry collection. Callers always
/// exchange whole snapshots; there is no per-entry access.
///
/// There is no locking. Every mutating journal operation is a `load` followed
/// by a `save`, with an await point at each. If two logical operations
/// interleave, the second save overwrites the first from a stale base
/// collection. That race is accepted for a single-user, local-only journal;
/// implementations must not pretend otherwise.
#[async_trait]
pub trait EntryStore {
    /// Load the persisted collection
    ///
    /// An absent record yields an empty collection. So does a record that
    /// fails to parse: a corrupted payload is logged and treated as empty
    /// rather than wedging every caller. Only the underlying I/O failing is
    /// an error.
    async fn load(&self) -> Result<Vec<Entry>, StorageError>;

    /// Overwrite the persisted collection with the given snapshot
    ///
    /// The replacement is all-or-nothing from a reader's perspective: no
    /// partially written payload is ever observable.
    async fn save(&self, entries: &[Entry]) -> Result<(), StorageError>;
}
