/// Public library interface for the mood journal
///
/// The core is three small layers: the entry store (one persisted record
/// holding the whole collection), the repository (validated CRUD over that
/// record) and the stats engine (pure aggregation: emotion frequency, weekday
/// activity, streaks). The presentation layer — here, a CLI — only ever talks
/// to the repository and the stats types.

// Internal modules
mod domain;
mod repository;
mod stats;
mod storage;

// Re-export public modules and types
pub use domain::{DomainError, Emotion, Entry, EntryId};
pub use repository::{EntryRepository, RepositoryError};
pub use stats::{EmotionCount, MoodStats};
pub use storage::{EntryStore, JsonFileStore, StorageError};
