//! Tests for saving and loading address book snapshots.

mod fixtures;
use fixtures::*;

use address_book::repositories::{BookSnapshot, SNAPSHOT_VERSION};
use address_book::{
    AddressBook, BookRepository, InMemoryRepository, JsonFileRepository, StorageError,
};
use std::fs;

#[test]
fn test_empty_book_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));

    repo.save(&AddressBook::new()).unwrap();
    let loaded = repo.load().unwrap();

    assert!(loaded.is_empty());
}

#[test]
fn test_mixed_book_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));
    let book = mixed_book();

    repo.save(&book).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(loaded, book);
    for record in &book {
        let other = loaded.find(record.name().as_str()).unwrap();
        assert_eq!(other.phones(), record.phones());
        assert_eq!(other.birthday(), record.birthday());
    }
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));

    repo.save(&mixed_book()).unwrap();
    let smaller = book_of(vec![sample_record("Solo", &["1234567890"], None)]);
    repo.save(&smaller).unwrap();

    assert_eq!(repo.load().unwrap(), smaller);
}

#[test]
fn test_missing_file_is_an_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("never-written.json"));
    assert_eq!(repo.load().unwrap(), AddressBook::new());
}

#[test]
fn test_snapshot_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let repo = JsonFileRepository::new(&path);

    let book = book_of(vec![sample_record("John", &["1234567890"], Some("12.06.1990"))]);
    repo.save(&book).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["version"], SNAPSHOT_VERSION);
    assert_eq!(value["contacts"][0]["name"], "John");
    assert_eq!(value["contacts"][0]["phones"][0], "1234567890");
    assert_eq!(value["contacts"][0]["birthday"], "12.06.1990");
}

#[test]
fn test_hand_written_snapshot_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    fs::write(
        &path,
        r#"{
            "version": 1,
            "contacts": [
                { "name": "Ann", "phones": ["1111111111", "2222222222"], "birthday": null },
                { "name": "Bob", "phones": [], "birthday": "29.02.1988" }
            ]
        }"#,
    )
    .unwrap();

    let book = JsonFileRepository::new(&path).load().unwrap();
    assert_eq!(book.len(), 2);
    assert_eq!(book.find("Ann").unwrap().phones().len(), 2);
    assert_eq!(
        book.find("Bob").unwrap().birthday().unwrap().to_string(),
        "29.02.1988"
    );
}

#[test]
fn test_future_version_is_rejected() {
    let repo = InMemoryRepository::with_snapshot(r#"{"version": 99, "contacts": []}"#);
    assert!(matches!(
        repo.load(),
        Err(StorageError::UnsupportedVersion { found: 99, .. })
    ));
}

#[test]
fn test_future_version_with_new_layout_is_rejected() {
    let repo = InMemoryRepository::with_snapshot(
        r#"{"version": 3, "contacts": {"Ann": {"numbers": ["1111111111"]}}}"#,
    );
    assert!(matches!(
        repo.load(),
        Err(StorageError::UnsupportedVersion { found: 3, expected: 1 })
    ));
}

#[test]
fn test_contact_order_survives_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));
    let book = book_of(vec![
        sample_record("Zed", &[], None),
        sample_record("Amy", &[], None),
        sample_record("Max", &[], None),
    ]);

    repo.save(&book).unwrap();
    let loaded = repo.load().unwrap();

    let names: Vec<_> = loaded.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Zed", "Amy", "Max"]);
}

#[test]
fn test_invalid_phone_in_snapshot_is_rejected() {
    let repo = InMemoryRepository::with_snapshot(
        r#"{"version": 1, "contacts": [{ "name": "Ann", "phones": ["555-1234"] }]}"#,
    );
    assert!(matches!(repo.load(), Err(StorageError::Json(_))));
}

#[test]
fn test_in_memory_repository_round_trip() {
    let repo = InMemoryRepository::new();
    assert!(repo.load().unwrap().is_empty());

    let book = mixed_book();
    repo.save(&book).unwrap();

    assert_eq!(repo.save_count(), 1);
    assert_eq!(repo.load().unwrap(), book);

    let snapshot: BookSnapshot = serde_json::from_str(&repo.snapshot().unwrap()).unwrap();
    assert_eq!(snapshot.contacts.len(), book.len());
}
