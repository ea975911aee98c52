/// Basic unit tests verifying the exported API
use mood_journal::*;
use tempfile::tempdir;

#[test]
fn test_emotion_mapping_is_exported() {
    assert_eq!(Emotion::Happy.glyph(), "😊");
    assert_eq!(Emotion::resolve_name("😴"), "Tired");
    assert_eq!(Emotion::resolve_name("not-a-glyph"), "not-a-glyph");
    assert_eq!(Emotion::ALL.len(), 6);
}

#[test]
fn test_entry_validation_is_exported() {
    assert!(Entry::new(Emotion::Excited.glyph(), "shipped it", "Friday, May 9").is_ok());
    assert_eq!(Entry::new("", "note", "today"), Err(DomainError::MissingEmotion));
    assert_eq!(Entry::new("😊", "  ", "today"), Err(DomainError::EmptyNote));
}

#[test]
fn test_entry_ids_are_fresh() {
    assert_ne!(EntryId::new(), EntryId::new());
}

#[test]
fn test_stats_on_hand_built_entries() {
    let entry = Entry::new("😊", "a fine day", "Tuesday, July 1").unwrap();
    let stats = MoodStats::from_entries(std::slice::from_ref(&entry));

    assert_eq!(stats.total_entries, 1);
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.emotion_frequency.len(), 1);
    assert_eq!(stats.emotion_frequency[0].name, "Happy");
    assert_eq!(stats.most_recent, Some(entry));
}

#[tokio::test]
async fn test_store_is_usable_as_trait_object() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("entries.json"));

    let dyn_store: &dyn EntryStore = &store;
    assert!(dyn_store.load().await.unwrap().is_empty());
}
