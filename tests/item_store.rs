//! Item Store Tests
//!
//! - Failures are explicit: missing file, corrupt content
//! - Appends persist the whole collection in insertion order
//! - Unknown fields survive a rewrite; none may shadow `name` or `price`
//! - Concurrent appends in one process lose nothing and never reuse an id

use std::collections::HashSet;
use std::sync::Arc;

use catalogd::observability::MetricsRegistry;
use catalogd::store::{FileStore, NewItem, StoreError};
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn store_with(contents: Option<&str>) -> (TempDir, Arc<FileStore>) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("items.json");
    if let Some(contents) = contents {
        std::fs::write(&path, contents).expect("seed data file");
    }
    let store = Arc::new(FileStore::open(path, Arc::new(MetricsRegistry::new())));
    (dir, store)
}

// =============================================================================
// Reads
// =============================================================================

#[tokio::test]
async fn test_missing_file_is_unavailable() {
    let (_dir, store) = store_with(None);

    let err = store.load_all().await.unwrap_err();

    assert!(matches!(err, StoreError::StoreUnavailable { .. }));
}

#[tokio::test]
async fn test_non_array_is_corrupt() {
    for contents in ["", "{}", "[1, 2]", r#"[{"id": 1, "name": "No price"}]"#] {
        let (_dir, store) = store_with(Some(contents));

        let err = store.load_all().await.unwrap_err();

        assert!(
            matches!(err, StoreError::CorruptData { .. }),
            "expected corrupt data for {contents:?}, got {err}"
        );
    }
}

#[tokio::test]
async fn test_find_hit_and_miss() {
    let (_dir, store) = store_with(Some(r#"[{"id": 4, "name": "Desk", "price": 120}]"#));

    assert_eq!(store.find(4).await.unwrap().name, "Desk");
    assert!(store.find(5).await.unwrap_err().is_not_found());
}

// =============================================================================
// Appends
// =============================================================================

#[tokio::test]
async fn test_append_persists_in_order() {
    let (dir, store) = store_with(Some("[]"));

    let first = store.append(NewItem::new("First", 1.0)).await.unwrap();
    let second = store.append(NewItem::new("Second", 2.0)).await.unwrap();

    assert!(second.id > first.id);
    let names: Vec<String> = store
        .load_all()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["First", "Second"]);

    let raw = std::fs::read_to_string(dir.path().join("items.json")).unwrap();
    assert!(raw.contains("\n  {"), "collection should be pretty-printed");
}

#[tokio::test]
async fn test_append_preserves_unknown_fields() {
    let (dir, store) = store_with(Some(
        r#"[{"id": 1, "name": "Lamp", "price": 15, "category": "Home", "tags": ["a"]}]"#,
    ));

    store
        .append(NewItem::new("Rug", 80.0).with_field("category", json!("Home")))
        .await
        .unwrap();

    let raw: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("items.json")).unwrap())
            .unwrap();
    assert_eq!(raw[0]["tags"], json!(["a"]));
    assert_eq!(raw[0]["category"], "Home");
    assert_eq!(raw[1]["category"], "Home");
}

#[tokio::test]
async fn test_append_drops_fields_shadowing_name_and_price() {
    let (dir, store) = store_with(Some("[]"));

    let stored = store
        .append(
            NewItem::new("Desk", 1.0)
                .with_field("name", json!("Other"))
                .with_field("price", json!(5)),
        )
        .await
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join("items.json")).unwrap();
    assert_eq!(raw.matches("\"price\"").count(), 1);

    let items = store.load_all().await.unwrap();
    assert_eq!(items, vec![stored]);
    assert_eq!(items[0].name, "Desk");
    assert_eq!(items[0].price, 1.0);
}

#[tokio::test]
async fn test_append_to_corrupt_file_changes_nothing() {
    let (dir, store) = store_with(Some("not json"));

    let err = store.append(NewItem::new("X", 1.0)).await.unwrap_err();

    assert!(matches!(err, StoreError::CorruptData { .. }));
    let raw = std::fs::read_to_string(dir.path().join("items.json")).unwrap();
    assert_eq!(raw, "not json");
    assert_eq!(store.metrics().snapshot().store_appends, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_lose_nothing() {
    let (_dir, store) = store_with(Some(r#"[{"id": 1, "name": "Seed", "price": 1}]"#));

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.append(NewItem::new(format!("Item {i}"), i as f64)).await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let items = store.load_all().await.unwrap();
    assert_eq!(items.len(), 21);

    let ids: HashSet<u64> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids.len(), 21, "ids must be unique");
}
