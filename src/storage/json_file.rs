/// JSON file implementation of the entry store
///
/// The collection is persisted as a single JSON array in one file, the moral
/// equivalent of the mobile app's one key-value record. Load reads and parses
/// the whole file; save rewrites it through a temp-file rename so readers
/// never observe a partial payload.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::Entry;
use crate::storage::{EntryStore, StorageError};

/// File-backed store holding the serialized entry collection
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file
    ///
    /// The file does not have to exist yet; it is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::info!("entry store backed by {}", path.display());
        Self { path }
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl EntryStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Entry>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no entry record at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::Io(e)),
        };

        // Lenient read: a payload that no longer parses must not brick the
        // journal. Report it and hand back an empty collection.
        match serde_json::from_slice::<Vec<Entry>>(&bytes) {
            Ok(entries) => {
                tracing::debug!("loaded {} entries", entries.len());
                Ok(entries)
            }
            Err(e) => {
                tracing::warn!(
                    "entry record at {} is malformed ({}); treating as empty",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, entries: &[Entry]) -> Result<(), StorageError> {
        let payload = serde_json::to_vec(entries)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        // Write the new payload beside the record, then rename it into place.
        // Readers see either the old collection or the new one, never a
        // half-written file.
        let temp = self.temp_path();
        fs::write(&temp, &payload).await?;
        fs::rename(&temp, &self.path).await?;

        tracing::debug!("saved {} entries", entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    use crate::domain::EntryId;

    fn sample_entry(note: &str) -> Entry {
        Entry::from_existing(
            EntryId::new(),
            "😊".to_string(),
            note.to_string(),
            "Monday, January 1".to_string(),
            Utc::now(),
            "Monday, January 1".to_string(),
        )
    }

    #[tokio::test]
    async fn test_load_absent_record_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("entries.json"));

        let entries = store.load().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("entries.json"));

        let entries = vec![sample_entry("first"), sample_entry("second")];
        store.save(&entries).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_payload() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("entries.json"));

        store.save(&[sample_entry("old")]).await.unwrap();
        let replacement = vec![sample_entry("new")];
        store.save(&replacement).await.unwrap();

        assert_eq!(store.load().await.unwrap(), replacement);
    }

    #[tokio::test]
    async fn test_malformed_payload_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(&path, b"{not json at all").unwrap();

        let store = JsonFileStore::new(path);
        let entries = store.load().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_payload_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(&path, br#"{"entries": 3}"#).unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/entries.json"));

        store.save(&[sample_entry("hello")]).await.unwrap();
        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
