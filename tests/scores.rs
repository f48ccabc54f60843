use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use poker_squares::scores::{HighScores, JsonFileStore, MemoryStore, ScoreError, ScoreStore};

static NEXT: AtomicUsize = AtomicUsize::new(0);

/// Unique path in the temp dir, removed on drop.
struct TempFile(PathBuf);

impl TempFile {
    fn new() -> Self {
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        let name = format!("poker-squares-test-{}-{n}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let _ = fs::remove_file(&path);
        Self(path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn missing_file_loads_as_empty() {
    let tmp = TempFile::new();
    let store = JsonFileStore::new(tmp.0.clone());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn json_store_round_trips() {
    let tmp = TempFile::new();
    let mut store = JsonFileStore::new(tmp.0.clone());
    for score in [120, 272, 45, 272] {
        store.record(score).unwrap();
    }
    assert_eq!(fs::read_to_string(&tmp.0).unwrap(), "[272,272,120,45]");

    let reopened = JsonFileStore::new(tmp.0.clone());
    assert_eq!(reopened.load().unwrap().as_slice(), &[272, 272, 120, 45]);
}

#[test]
fn loaded_lists_are_sorted_and_capped() {
    let tmp = TempFile::new();
    fs::write(&tmp.0, "[1, 50, 3, 40, 5, 60, 7, 80, 9, 100, 11, 12]").unwrap();
    let store = JsonFileStore::new(tmp.0.clone());
    let list = store.load().unwrap();
    assert_eq!(list.as_slice(), &[100, 80, 60, 50, 40, 12, 11, 9, 7, 5]);
}

#[test]
fn malformed_file_is_an_error() {
    let tmp = TempFile::new();
    fs::write(&tmp.0, "{\"not\": \"a list\"}").unwrap();
    let store = JsonFileStore::new(tmp.0.clone());
    assert!(matches!(store.load(), Err(ScoreError::Parse(_))));
}

#[test]
fn low_score_on_full_list_is_not_saved() {
    let mut store = MemoryStore::new();
    let full = HighScores::from((100..110).collect::<Vec<u32>>());
    store.save(&full).unwrap();
    let (list, position) = store.record(5).unwrap();
    assert_eq!(position, None);
    assert_eq!(list, full);
    let (_, position) = store.record(105).unwrap();
    assert_eq!(position, Some(6));
}
