/// End-to-end journal flow against a real data file
use mood_journal::*;
use tempfile::tempdir;

#[tokio::test]
async fn test_full_crud_and_stats_flow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("entries.json");
    let repository = EntryRepository::new(JsonFileStore::new(path));

    // Record a few days of reflections.
    let first = repository
        .create(Emotion::Happy.glyph(), "went for a long walk", "Monday, June 2")
        .await
        .expect("create should succeed");
    let second = repository
        .create(Emotion::Tired.glyph(), "slept badly", "Tuesday, June 3")
        .await
        .expect("create should succeed");

    // Edit the second entry's note; everything else must survive.
    let edited = repository
        .update(&second.id, "slept badly, napped later")
        .await
        .expect("update should succeed");
    assert_eq!(edited.emotion, second.emotion);
    assert_eq!(edited.created_at, second.created_at);

    // Stats reflect the live collection.
    let entries = repository.list().await.unwrap();
    let stats = MoodStats::from_entries(&entries);
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.streak, 1); // both written today
    assert_eq!(stats.most_recent.as_ref().map(|e| e.id.clone()), Some(second.id.clone()));

    // Delete one entry; the other is untouched.
    repository.delete(&second.id).await.unwrap();
    let remaining = repository.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, first.id);

    // Deleting again is a quiet success.
    repository.delete(&second.id).await.unwrap();
    assert_eq!(repository.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_collection_persists_across_store_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("entries.json");

    let created = {
        let repository = EntryRepository::new(JsonFileStore::new(path.clone()));
        repository
            .create(Emotion::Excited.glyph(), "started a new project", "Friday, May 9")
            .await
            .unwrap()
    };

    // A fresh store over the same file sees the same collection.
    let reopened = EntryRepository::new(JsonFileStore::new(path));
    let entries = reopened.list().await.unwrap();
    assert_eq!(entries, vec![created]);
}

#[tokio::test]
async fn test_validation_failures_leave_the_record_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("entries.json");
    let repository = EntryRepository::new(JsonFileStore::new(path));

    let entry = repository
        .create(Emotion::Neutral.glyph(), "an ordinary day", "Sunday, June 1")
        .await
        .unwrap();

    assert!(repository.create("", "note", "today").await.is_err());
    assert!(repository.create("😊", "   ", "today").await.is_err());
    assert!(repository.update(&entry.id, "").await.is_err());

    let entries = repository.list().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].note, "an ordinary day");
}
