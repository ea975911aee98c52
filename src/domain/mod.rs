/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Entry, Emotion) and their
/// validation rules. These types represent the fundamental concepts in the
/// mood journal.

pub mod emotion;
pub mod entry;

// Re-export public types for easy access
pub use emotion::*;
pub use entry::*;

use thiserror::Error;

/// Errors that can occur during domain validation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("an emotion is required for every entry")]
    MissingEmotion,

    #[error("the note cannot be empty")]
    EmptyNote,
}
