//! Durable local storage for BookVerse.
//!
//! This crate provides a small key-value storage interface with filesystem
//! and in-memory backends, and the favorites store built on top of it.

pub mod backends;
pub mod error;
pub mod favorites;
pub mod traits;

// Re-export the main interface and types for easy access
pub use backends::{FilesystemStorage, MemoryStorage};
pub use error::{Result, StorageError};
pub use favorites::{FAVORITES_KEY, FavoritesStore};
pub use traits::KeyValueStorage;
