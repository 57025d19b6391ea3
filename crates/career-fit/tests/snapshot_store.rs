use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use career_fit::assessment::{
    Answer, AnswerStore, FileSnapshotStore, QuestionCatalog, QuestionId, ScoringConfig,
    ScoringEngine, Snapshot, SnapshotError, SnapshotStore,
};
use chrono::{TimeZone, Utc};

fn sample_snapshot(scale: u8) -> Snapshot {
    let catalog = QuestionCatalog::standard();
    let mut answers = AnswerStore::new();
    answers
        .record(catalog.question(0), Answer::Scale(scale))
        .expect("scale answer");

    let report = ScoringEngine::new(ScoringConfig::default()).score(&catalog, &answers);
    Snapshot {
        report,
        answers: answers.entries().clone(),
        completed_at: Utc
            .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    }
}

#[test]
fn missing_file_loads_as_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSnapshotStore::new(dir.path().join("results.json"));

    assert!(store.load().expect("load").is_none());
}

#[test]
fn save_creates_parent_directories_and_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("state").join("results.json");
    let store = FileSnapshotStore::new(&path);
    let snapshot = sample_snapshot(6);

    store.save(&snapshot).expect("save");

    assert!(path.exists());
    assert_eq!(store.load().expect("load"), Some(snapshot));
    let leftovers: Vec<_> = fs::read_dir(path.parent().expect("parent"))
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("results.json")]);
}

#[test]
fn save_replaces_the_previous_snapshot_entirely() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSnapshotStore::new(dir.path().join("results.json"));

    let mut first = sample_snapshot(7);
    first
        .answers
        .insert(QuestionId::from("psych_2"), Answer::Scale(7));
    store.save(&first).expect("first save");

    let second = sample_snapshot(1);
    store.save(&second).expect("second save");

    let stored = store.load().expect("load").expect("stored");
    assert_eq!(stored, second);
    assert!(stored.answers.get("psych_2").is_none());
}

#[test]
fn malformed_file_is_reported_as_malformed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("results.json");
    fs::write(&path, b"{ not json").expect("write garbage");
    let store = FileSnapshotStore::new(&path);

    assert!(matches!(store.load(), Err(SnapshotError::Malformed(_))));
}

#[test]
fn clear_removes_the_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("results.json");
    let store = FileSnapshotStore::new(&path);
    store.save(&sample_snapshot(4)).expect("save");

    store.clear().expect("clear existing");
    assert!(!path.exists());
    store.clear().expect("clear again");
}

#[test]
fn stored_document_uses_readable_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("results.json");
    let store = FileSnapshotStore::new(&path);
    store.save(&sample_snapshot(7)).expect("save");

    let raw: serde_json::Value =
        serde_json::from_slice(&fs::read(&path).expect("read")).expect("json");
    assert_eq!(raw["report"]["recommendation"], "low_fit");
    assert!(raw["report"]["wiscar_scores"].get("real_world").is_some());
    assert_eq!(
        raw["answers"]["psych_1"],
        serde_json::json!({ "type": "scale", "value": 7 })
    );
    assert!(raw["completed_at"]
        .as_str()
        .is_some_and(|stamp| stamp.starts_with("2025-03-14T09:30:00")));
}

#[test]
fn concurrent_saves_all_succeed_and_leave_a_readable_snapshot() {
    const WRITERS: usize = 8;
    const ROUNDS: usize = 25;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(FileSnapshotStore::new(dir.path().join("results.json")));

    for _ in 0..ROUNDS {
        let barrier = Arc::new(Barrier::new(WRITERS));
        let handles: Vec<_> = (0..WRITERS)
            .map(|writer| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                let snapshot = sample_snapshot(1 + (writer % 7) as u8);
                thread::spawn(move || {
                    barrier.wait();
                    store.save(&snapshot)
                })
            })
            .collect();

        for handle in handles {
            handle
                .join()
                .expect("writer thread")
                .expect("concurrent save succeeds");
        }

        let stored = store.load().expect("snapshot parses").expect("stored");
        assert_eq!(stored.answers.len(), 1);
    }

    let entries = fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(entries, 1, "no staging files are left behind");
}
