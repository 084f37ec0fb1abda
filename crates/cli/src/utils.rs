//! Utility functions for wiring the catalog client and favorites store from
//! configuration.

use std::path::PathBuf;
use std::sync::Arc;

use bookverse_catalog::{CatalogClient, OpenLibraryClient};
use bookverse_storage::{FAVORITES_KEY, FavoritesStore, FilesystemStorage};
use eyre::Result;

use crate::config::Config;

/// Create the catalog client configured in `config`
pub fn create_catalog(config: &Config) -> Result<Arc<dyn CatalogClient>> {
    let client = OpenLibraryClient::with_base_url(&config.catalog.base_url)?;
    tracing::debug!("Using catalog at {}", client.base_url());
    Ok(Arc::new(client))
}

/// Load favorites from the configured storage directory
pub async fn load_favorites(config: &Config) -> FavoritesStore {
    let storage_path = config.get_storage_path();
    tracing::debug!("Loading favorites from {}", storage_path.display());
    FavoritesStore::load(Arc::new(FilesystemStorage::new(storage_path))).await
}

/// File the favorites list is persisted to
pub fn favorites_file(config: &Config) -> PathBuf {
    FilesystemStorage::new(config.get_storage_path()).value_path(FAVORITES_KEY)
}
