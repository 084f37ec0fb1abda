//! Favorites persisted through the filesystem backend across simulated restarts.

use std::sync::Arc;

use bookverse_storage::{FAVORITES_KEY, FavoritesStore, FilesystemStorage, KeyValueStorage};
use bookverse_types::BookRecord;
use tempfile::TempDir;

fn dune() -> BookRecord {
    BookRecord::new("/works/OL123W", "Dune")
        .with_authors(["Frank Herbert"])
        .with_cover(11481354)
}

#[tokio::test]
async fn test_favorite_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let storage = Arc::new(FilesystemStorage::new(temp_dir.path()));
        let mut favorites = FavoritesStore::load(storage).await;
        assert!(favorites.toggle(dune()).await.unwrap());
    }

    // A fresh process sees the same list.
    let storage = Arc::new(FilesystemStorage::new(temp_dir.path()));
    let favorites = FavoritesStore::load(storage).await;
    assert!(favorites.contains("/works/OL123W"));
    assert_eq!(favorites.list(), &[dune()]);
}

#[tokio::test]
async fn test_unfavorite_is_persisted_and_membership_cleared() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FilesystemStorage::new(temp_dir.path()));

    let mut favorites = FavoritesStore::load(storage.clone()).await;
    favorites.toggle(dune()).await.unwrap();
    assert!(favorites.contains("/works/OL123W"));

    assert!(!favorites.toggle(dune()).await.unwrap());
    assert!(!favorites.contains("/works/OL123W"));
    assert!(favorites.list().is_empty());

    let reloaded = FavoritesStore::load(storage).await;
    assert!(!reloaded.contains("/works/OL123W"));
    assert!(reloaded.is_empty());
}

#[tokio::test]
async fn test_corrupt_file_on_disk_loads_empty_and_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FilesystemStorage::new(temp_dir.path()));
    storage
        .set(FAVORITES_KEY, "[{\"key\": \"/works/OL1W\", \"title\": ")
        .await
        .unwrap();

    let mut favorites = FavoritesStore::load(storage.clone()).await;
    assert!(favorites.is_empty());

    favorites.toggle(dune()).await.unwrap();

    let raw = storage.get(FAVORITES_KEY).await.unwrap().unwrap();
    let saved: Vec<BookRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved, vec![dune()]);
}

#[tokio::test]
async fn test_persisted_format_is_plain_record_array() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FilesystemStorage::new(temp_dir.path()));

    let mut favorites = FavoritesStore::load(storage.clone()).await;
    favorites.toggle(dune()).await.unwrap();

    let raw = storage.get(FAVORITES_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["key"], "/works/OL123W");
    assert_eq!(value[0]["title"], "Dune");
    assert_eq!(value[0]["author_name"][0], "Frank Herbert");
    assert_eq!(value[0]["cover_i"], 11481354);
}
