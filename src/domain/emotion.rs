/// The fixed emotion palette and its display mapping
///
/// Entries store the emotion as its glyph so the persisted payload stays a
/// plain string record. This module owns the glyph <-> display name mapping
/// and the lenient resolution rule for glyphs outside the known set.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the selectable moods for a journal entry
///
/// The order of `ALL` is the order the picker presented them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Emotion {
    Happy,
    Neutral,
    Sad,
    Angry,
    Tired,
    Excited,
}

impl Emotion {
    /// Every known emotion, in picker order
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Neutral,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Tired,
        Emotion::Excited,
    ];

    /// The glyph stored in the entry record
    pub fn glyph(&self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Neutral => "😐",
            Emotion::Sad => "😔",
            Emotion::Angry => "😡",
            Emotion::Tired => "😴",
            Emotion::Excited => "🥳",
        }
    }

    /// Get the display name for this emotion
    pub fn display_name(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Neutral => "Neutral",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Tired => "Tired",
            Emotion::Excited => "Excited",
        }
    }

    /// Look up the emotion for a stored glyph
    pub fn from_glyph(glyph: &str) -> Option<Emotion> {
        Emotion::ALL.iter().copied().find(|e| e.glyph() == glyph)
    }

    /// Resolve a stored glyph to a display name
    ///
    /// Glyphs outside the known set resolve to themselves. Old payloads may
    /// carry emotions this build doesn't know about, and that must never be
    /// an error.
    pub fn resolve_name(glyph: &str) -> &str {
        match Emotion::from_glyph(glyph) {
            Some(emotion) => emotion.display_name(),
            None => glyph,
        }
    }
}
