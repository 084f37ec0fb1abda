//! Trait definitions for the storage system.

use async_trait::async_trait;

use crate::error::Result;

/// String values stored under string keys, surviving process restarts.
///
/// Each `set` replaces the whole value for its key in a single step; readers
/// never observe a partially written value.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// # Returns
    /// `Some(value)` if present, `None` if the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
