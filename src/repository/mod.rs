/// CRUD layer over the entry store
///
/// The repository is the only writer of the collection. Every operation
/// re-fetches the whole snapshot, mutates it, and writes it back; nothing is
/// cached in between, so the persisted record is always the source of truth.

use thiserror::Error;

use crate::domain::{DomainError, Entry, EntryId};
use crate::storage::{EntryStore, StorageError};

/// Errors surfaced by repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("no entry with id {id}")]
    NotFound { id: String },

    #[error("persistence failure: {0}")]
    Storage(#[from] StorageError),
}

/// Create, update, delete and list journal entries
///
/// Stateless apart from the store it owns. Mutating operations are a load
/// followed by a save — two await points with no lock between them. Two
/// interleaved operations can therefore overwrite each other from stale
/// bases; acceptable for a single active user, and deliberately not hidden
/// behind a stronger-looking contract.
pub struct EntryRepository<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> EntryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a new entry and return it
    ///
    /// Validation happens before anything is read or written: a rejected
    /// entry leaves the collection untouched. The new entry is prepended to
    /// the collection, as the journal has always stored newest-first.
    pub async fn create(
        &self,
        emotion: &str,
        note: &str,
        display_date: &str,
    ) -> Result<Entry, RepositoryError> {
        let entry = Entry::new(emotion, note, display_date)?;

        let mut entries = self.store.load().await?;
        entries.insert(0, entry.clone());
        self.store.save(&entries).await?;

        tracing::debug!("created entry {}", entry.id);
        Ok(entry)
    }

    /// Replace the note of an existing entry and return the updated entry
    ///
    /// Only `note` changes; the emotion, timestamps and id are preserved.
    pub async fn update(&self, id: &EntryId, new_note: &str) -> Result<Entry, RepositoryError> {
        if new_note.trim().is_empty() {
            return Err(DomainError::EmptyNote.into());
        }

        let mut entries = self.store.load().await?;
        let entry = entries
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })?;

        entry.note = new_note.to_string();
        let updated = entry.clone();
        self.store.save(&entries).await?;

        tracing::debug!("updated entry {}", updated.id);
        Ok(updated)
    }

    /// Remove the entry with the given id
    ///
    /// Deleting an id that is not present succeeds without touching storage:
    /// the operation is idempotent, mirroring a filter over the collection.
    pub async fn delete(&self, id: &EntryId) -> Result<(), RepositoryError> {
        let mut entries = self.store.load().await?;
        let before = entries.len();
        entries.retain(|e| &e.id != id);

        if entries.len() == before {
            tracing::debug!("delete of {} matched nothing", id);
            return Ok(());
        }

        self.store.save(&entries).await?;
        tracing::debug!("deleted entry {}", id);
        Ok(())
    }

    /// All entries, newest first
    pub async fn list(&self) -> Result<Vec<Entry>, RepositoryError> {
        let mut entries = self.store.load().await?;
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}
