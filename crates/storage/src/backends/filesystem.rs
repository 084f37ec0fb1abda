//! Filesystem-based storage backend implementation.

use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{Result, StorageError};
use crate::traits::KeyValueStorage;

/// Filesystem-based storage backend.
///
/// Every key is stored as its own JSON file in a single directory:
/// ```text
/// storage_root/
/// +-- {escaped_key}.json
/// ```
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so a crash mid-write leaves the previous value in place.
#[derive(Debug, Clone)]
pub struct FilesystemStorage {
    root_path: PathBuf,
}

impl FilesystemStorage {
    /// Create a new filesystem storage backend.
    ///
    /// # Arguments
    /// * `root_path` - Directory holding one file per key
    pub fn new<P: AsRef<Path>>(root_path: P) -> Self {
        Self {
            root_path: root_path.as_ref().to_path_buf(),
        }
    }

    /// Create the storage directory if it does not exist yet.
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root_path).await.map_err(|e| {
            StorageError::io(
                format!("create storage directory {}", self.root_path.display()),
                e,
            )
        })
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// File holding the value stored under `key`.
    pub fn value_path(&self, key: &str) -> PathBuf {
        self.root_path.join(format!("{}.json", escape_key(key)))
    }
}

/// Map a key onto a file name. ASCII letters, digits and `-` pass through,
/// every other byte becomes `_XX`, which keeps distinct keys distinct.
fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            escaped.push(char::from(byte));
        } else {
            let _ = write!(escaped, "_{:02X}", byte);
        }
    }
    escaped
}

#[async_trait]
impl KeyValueStorage for FilesystemStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(format!("read {}", path.display()), e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.initialize().await?;

        let path = self.value_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)
            .await
            .map_err(|e| StorageError::io(format!("write {}", temp_path.display()), e))?;

        if let Err(e) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::io(format!("replace {}", path.display()), e));
        }

        tracing::debug!("Stored {} bytes under {}", value.len(), key);
        Ok(())
    }
}
