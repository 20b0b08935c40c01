use std::fs;

use curio_catalog::Item;
use curio_store::{FORMAT_VERSION, FormatError, Store, StoreError};
use tempfile::TempDir;

fn sample_movie() -> Item {
    Item::Movie {
        name: "Dune".to_string(),
        year: 2021,
        genre: "Sci-Fi".to_string(),
        director: "Denis Villeneuve".to_string(),
    }
}

#[test]
fn written_file_is_versioned_and_tagged() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalogue.json");

    let mut store = Store::open(&path).unwrap();
    store.add(sample_movie()).unwrap();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["version"], u64::from(FORMAT_VERSION));
    assert_eq!(doc["next_id"], 2);

    let entry = &doc["entries"][0];
    assert_eq!(entry["id"], 1);
    assert_eq!(entry["kind"], "movie");
    assert_eq!(entry["name"], "Dune");
    assert_eq!(entry["year"], 2021);
    assert_eq!(entry["genre"], "Sci-Fi");
    assert_eq!(entry["director"], "Denis Villeneuve");
    assert!(entry["added_at"].is_string());
    assert!(entry["updated_at"].is_string());
}

#[test]
fn newer_format_version_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalogue.json");
    fs::write(&path, r#"{ "version": 99, "next_id": 1, "entries": [] }"#).unwrap();

    let result = Store::open(&path);
    assert!(matches!(
        result,
        Err(StoreError::Format(FormatError::UnsupportedVersion {
            found: 99,
            supported: FORMAT_VERSION,
        })),
    ));
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalogue.json");
    fs::write(&path, "not a catalogue").unwrap();

    let result = Store::open(&path);
    assert!(matches!(
        result,
        Err(StoreError::Format(FormatError::Parse { .. })),
    ));
}

#[test]
fn missing_version_field_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalogue.json");
    fs::write(&path, r#"{ "entries": [] }"#).unwrap();

    let result = Store::open(&path);
    assert!(matches!(
        result,
        Err(StoreError::Format(FormatError::Parse { .. })),
    ));
}

#[test]
fn hand_edited_file_without_counter_still_gets_fresh_ids() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalogue.json");
    fs::write(
        &path,
        r#"{
  "version": 1,
  "entries": [
    {
      "id": 7,
      "kind": "book",
      "name": "Dune",
      "year": 1965,
      "genre": "Sci-Fi",
      "publisher": "Chilton Books",
      "added_at": "2026-01-01 00:00:00",
      "updated_at": "2026-01-01 00:00:00"
    }
  ]
}"#,
    )
    .unwrap();

    let mut store = Store::open(&path).unwrap();
    assert_eq!(store.len(), 1);
    let fresh = store.add(sample_movie()).unwrap();
    assert_eq!(fresh, 8);
}

#[test]
fn parent_directories_are_created_on_save() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("shelves").join("den").join("catalogue.json");

    let mut store = Store::open(&path).unwrap();
    store.add(sample_movie()).unwrap();
    assert!(path.exists());
}
