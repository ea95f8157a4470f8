use chrono::{Duration, Utc};
use tempfile::tempdir;

use super::*;

fn store_in(dir: &Path) -> RecordStore {
    RecordStore::new(dir.join("index.json"))
}

#[test]
fn read_all_of_missing_file_is_empty_not_an_error() {
    let temp = tempdir().expect("tempdir");
    let store = store_in(temp.path());

    let records = store.read_all().expect("read");
    assert!(records.is_empty());
}

#[test]
fn read_all_of_corrupt_file_is_an_error() {
    let temp = tempdir().expect("tempdir");
    let store = store_in(temp.path());
    fs::write(store.path(), "not a record store").expect("write corrupt file");

    let result = store.read_all();
    assert!(matches!(result, Err(ReopenError::Json(_))));
}

#[test]
fn write_all_then_read_all_round_trips() {
    let temp = tempdir().expect("tempdir");
    let store = store_in(temp.path());
    let now = Utc::now();
    let records = vec![
        Record {
            path: "/a/b/x.txt".to_string(),
            score: 1.0,
            last_access: now,
        },
        Record {
            path: "/c/x.txt".to_string(),
            score: 3.5,
            last_access: now - Duration::days(2),
        },
    ];

    store.write_all(&records).expect("write");
    let loaded = store.read_all().expect("read");

    assert_eq!(loaded, records);
}

#[test]
fn write_all_single_record_round_trips() {
    let temp = tempdir().expect("tempdir");
    let store = store_in(temp.path());
    let records = vec![Record::new("/only/x.txt", Utc::now())];

    store.write_all(&records).expect("write");
    assert_eq!(store.read_all().expect("read"), records);
}

#[test]
fn write_all_leaves_no_temp_files_behind() {
    let temp = tempdir().expect("tempdir");
    let store = store_in(temp.path());

    store
        .write_all(&[Record::new("/a/x.txt", Utc::now())])
        .expect("write");

    let entries: Vec<_> = fs::read_dir(temp.path())
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("index.json")]);
}

#[test]
fn failed_write_leaves_no_temp_files_behind() {
    let temp = tempdir().expect("tempdir");
    // A directory squatting on the store path makes the final rename fail.
    let store = store_in(temp.path());
    fs::create_dir_all(store.path()).expect("create blocking dir");

    let result = store.write_all(&[Record::new("/a/x.txt", Utc::now())]);
    assert!(result.is_err(), "rename onto a directory must fail");

    let entries: Vec<_> = fs::read_dir(temp.path())
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("index.json")]);
}

#[test]
fn write_all_creates_missing_parent_directories() {
    let temp = tempdir().expect("tempdir");
    let store = RecordStore::new(temp.path().join("nested").join("dir").join("index.json"));

    store
        .write_all(&[Record::new("/a/x.txt", Utc::now())])
        .expect("write");
    assert_eq!(store.read_all().expect("read").len(), 1);
}

#[test]
fn update_on_empty_store_appends_one_record_at_score_one() {
    let temp = tempdir().expect("tempdir");
    let store = store_in(temp.path());
    let now = Utc::now();

    store
        .update(Record::new("/a/b/x.txt", now), now)
        .expect("update");

    let records = store.read_all().expect("read");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "/a/b/x.txt");
    assert_eq!(records[0].score, 1.0);
}

#[test]
fn update_on_existing_path_merges_without_growing_the_store() {
    let temp = tempdir().expect("tempdir");
    let store = store_in(temp.path());
    let first = Utc::now() - Duration::hours(1);
    let second = Utc::now();

    store
        .update(Record::new("/a/b/x.txt", first), first)
        .expect("first update");
    store
        .update(Record::new("/a/b/x.txt", second), second)
        .expect("second update");

    let records = store.read_all().expect("read");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].score, 2.0);
    assert_eq!(records[0].last_access, second);
}

#[test]
fn update_on_new_path_appends_alongside_existing_records() {
    let temp = tempdir().expect("tempdir");
    let store = store_in(temp.path());
    let now = Utc::now();

    store
        .update(Record::new("/a/b/x.txt", now), now)
        .expect("first update");
    store
        .update(Record::new("/c/x.txt", now), now)
        .expect("second update");

    let records = store.read_all().expect("read");
    assert_eq!(records.len(), 2);
}

#[test]
fn update_preserves_accumulated_score_through_round_trip() {
    let temp = tempdir().expect("tempdir");
    let store = store_in(temp.path());
    let now = Utc::now();

    for _ in 0..5 {
        store
            .update(Record::new("/a/b/x.txt", now), now)
            .expect("update");
    }

    let records = store.read_all().expect("read");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].score, 5.0);
}
