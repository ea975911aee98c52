/// Entry entity for daily mood records
///
/// This module defines the Entry struct that represents a single journal
/// record (emotion + note + timestamp), along with its identifier type and
/// creation-time validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Unique identifier for a journal entry
///
/// Wraps the string form rather than a parsed UUID so identifiers written by
/// earlier versions of the journal (epoch-millis strings) keep loading and
/// matching. Fresh identifiers are UUIDv7, which keeps them time-ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl EntryId {
    /// Generate a new time-ordered entry ID
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One journal record: how the user felt and what they wrote about it
///
/// Field names on the wire are camelCase, matching the persisted payload:
/// `id, emotion, note, date, createdAt, formattedDate`. The record keeps both
/// `date` and `formatted_date`; they are written with the same value at
/// creation and the duplication is part of the stored format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier, assigned at creation, never changed
    pub id: EntryId,
    /// Emotion glyph (see [`crate::domain::Emotion`]); unknown glyphs are kept as-is
    pub emotion: String,
    /// Free-text reflection
    pub note: String,
    /// Display date string captured when the entry was written
    pub date: String,
    /// Creation timestamp; the sole ordering and streak key
    pub created_at: DateTime<Utc>,
    /// Stored verbatim at creation, never recomputed from `created_at`
    pub formatted_date: String,
}

impl Entry {
    /// Create a new entry with validation
    ///
    /// `display_date` is the locale-formatted date the presentation layer
    /// wants to show for this entry; it is captured once, here. The note is
    /// stored exactly as given: trimming is only a validation predicate.
    pub fn new(emotion: &str, note: &str, display_date: &str) -> Result<Self, DomainError> {
        Self::validate_emotion(emotion)?;
        Self::validate_note(note)?;

        Ok(Self {
            id: EntryId::new(),
            emotion: emotion.to_string(),
            note: note.to_string(),
            date: display_date.to_string(),
            created_at: Utc::now(),
            formatted_date: display_date.to_string(),
        })
    }

    /// Create an entry from existing data (used when loading from storage)
    pub fn from_existing(
        id: EntryId,
        emotion: String,
        note: String,
        date: String,
        created_at: DateTime<Utc>,
        formatted_date: String,
    ) -> Self {
        Self {
            id,
            emotion,
            note,
            date,
            created_at,
            formatted_date,
        }
    }

    /// Validate that an emotion was actually selected
    fn validate_emotion(emotion: &str) -> Result<(), DomainError> {
        if emotion.trim().is_empty() {
            return Err(DomainError::MissingEmotion);
        }
        Ok(())
    }

    /// Validate that the note carries some text
    fn validate_note(note: &str) -> Result<(), DomainError> {
        if note.trim().is_empty() {
            return Err(DomainError::EmptyNote);
        }
        Ok(())
    }
}
