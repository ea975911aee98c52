/// Aggregate statistics over the journal
///
/// Everything here is a pure function of the entry collection: no I/O, no
/// caching, recomputed on demand. Calendar arithmetic happens in the local
/// time zone, because a "day" in a journal is the day the user lived through,
/// not the UTC date.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::domain::{Emotion, Entry};

/// How often one emotion appears across the whole journal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionCount {
    /// Stored glyph
    pub glyph: String,
    /// Display name, or the glyph itself when it is not a known emotion
    pub name: String,
    pub count: u32,
}

/// Derived statistics for the entry collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    /// Per-emotion counts, most frequent first; ties keep the order in which
    /// the emotion was first seen scanning newest to oldest
    pub emotion_frequency: Vec<EmotionCount>,
    /// Entry counts by day of week, index 0 = Sunday .. 6 = Saturday,
    /// aggregated over all history
    pub weekly_activity: [u32; 7],
    /// Longest run of consecutive calendar days with at least one entry
    pub streak: u32,
    pub total_entries: u32,
    /// The entry with the greatest creation timestamp
    pub most_recent: Option<Entry>,
}

impl MoodStats {
    /// Compute statistics from the entry collection
    ///
    /// Input order does not matter; a copy is sorted newest-first and every
    /// aggregate falls out of a single pass over it.
    pub fn from_entries(entries: &[Entry]) -> MoodStats {
        let mut sorted = entries.to_vec();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut emotion_frequency: Vec<EmotionCount> = Vec::new();
        let mut weekly_activity = [0u32; 7];
        let mut current_streak = 0u32;
        let mut max_streak = 0u32;
        let mut last_day_seen: Option<NaiveDate> = None;

        for entry in &sorted {
            match emotion_frequency
                .iter_mut()
                .find(|c| c.glyph == entry.emotion)
            {
                Some(count) => count.count += 1,
                None => emotion_frequency.push(EmotionCount {
                    glyph: entry.emotion.clone(),
                    name: Emotion::resolve_name(&entry.emotion).to_string(),
                    count: 1,
                }),
            }

            let day = local_calendar_day(entry);
            weekly_activity[day.weekday().num_days_from_sunday() as usize] += 1;

            // Walking newest to oldest: the previous day seen is the day
            // *after* this one when the run is unbroken. Several entries on
            // one day neither extend nor break the run; any wider gap starts
            // a fresh run of 1.
            match last_day_seen {
                None => current_streak = 1,
                Some(prev) if day == prev - chrono::Duration::days(1) => current_streak += 1,
                Some(prev) if day == prev => {}
                Some(_) => current_streak = 1,
            }
            max_streak = max_streak.max(current_streak);
            last_day_seen = Some(day);
        }

        // Stable sort: equal counts stay in first-encountered order.
        emotion_frequency.sort_by(|a, b| b.count.cmp(&a.count));

        MoodStats {
            emotion_frequency,
            weekly_activity,
            streak: max_streak,
            total_entries: entries.len() as u32,
            most_recent: sorted.first().cloned(),
        }
    }
}

/// The calendar day an entry belongs to, in the local time zone
fn local_calendar_day(entry: &Entry) -> NaiveDate {
    entry.created_at.with_timezone(&Local).date_naive()
}
