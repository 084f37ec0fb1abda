//! The persisted favorites list.

use std::collections::HashSet;
use std::sync::Arc;

use bookverse_types::BookRecord;

use crate::error::{Result, StorageError};
use crate::traits::KeyValueStorage;

/// Storage key holding the whole serialized favorites list.
pub const FAVORITES_KEY: &str = "bf:favs";

/// Saved book records, unique by key, most recently favorited first.
///
/// The list is read once when the store is loaded and written back in full
/// after every change.
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStorage>,
    books: Vec<BookRecord>,
    keys: HashSet<String>,
}

impl FavoritesStore {
    /// Load the persisted favorites.
    ///
    /// Missing, unreadable or corrupt data yields an empty list; the problem
    /// is logged and the caller carries on.
    pub async fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let books = match storage.get(FAVORITES_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<BookRecord>>(&raw) {
                Ok(books) => books,
                Err(e) => {
                    tracing::warn!("Discarding unreadable favorites data: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites, starting empty: {}", e);
                Vec::new()
            }
        };

        let mut keys = HashSet::with_capacity(books.len());
        let books: Vec<BookRecord> = books
            .into_iter()
            .filter(|book| keys.insert(book.key.clone()))
            .collect();

        tracing::debug!("Loaded {} favorites", books.len());
        Self {
            storage,
            books,
            keys,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Add `book` if its key is not saved yet, otherwise remove the saved
    /// record with that key. The result is persisted before returning.
    ///
    /// # Returns
    /// `true` if the book is a favorite after the call
    pub async fn toggle(&mut self, book: BookRecord) -> Result<bool> {
        let now_favorite = if self.keys.remove(&book.key) {
            self.books.retain(|saved| saved.key != book.key);
            tracing::info!("Removed favorite {}", book.key);
            false
        } else {
            tracing::info!("Added favorite {}", book.key);
            self.keys.insert(book.key.clone());
            self.books.insert(0, book);
            true
        };

        self.persist().await?;
        Ok(now_favorite)
    }

    /// Write the full list back to storage in one call.
    pub async fn persist(&self) -> Result<()> {
        let serialized =
            serde_json::to_string(&self.books).map_err(|source| StorageError::Serialization {
                key: FAVORITES_KEY.to_string(),
                source,
            })?;
        self.storage.set(FAVORITES_KEY, &serialized).await
    }

    pub fn get(&self, key: &str) -> Option<&BookRecord> {
        if !self.contains(key) {
            return None;
        }
        self.books.iter().find(|book| book.key == key)
    }

    pub fn list(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
