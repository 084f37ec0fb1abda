use bookverse_catalog::DEFAULT_BASE_URL;
use bookverse_types::CoverSize;
use directories::ProjectDirs;
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
    #[serde(default)]
    pub cover_size: CoverSize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cover_size: CoverSize::Medium,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: get_default_data_dir().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        get_default_config_dir().join("config.json")
    }

    pub fn get_storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.path)
    }

    pub async fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()).await
    }

    /// Load the configuration at `config_path`, writing the defaults there
    /// first if the file does not exist.
    pub async fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(config_path).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(config_path).await?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub async fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).await?;
        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["catalog", "base_url"] => {
                bookverse_catalog::OpenLibraryClient::with_base_url(value)
                    .map_err(|e| eyre::eyre!("Invalid base URL {}: {}", value, e))?;
                self.catalog.base_url = value.to_string();
            }
            ["catalog", "cover_size"] => {
                self.catalog.cover_size = value.parse::<CoverSize>().map_err(|e| eyre::eyre!(e))?;
            }
            ["storage", "path"] => {
                self.storage.path = value.to_string();
            }
            _ => {
                return Err(eyre::eyre!("Unknown configuration key: {}", key));
            }
        }

        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        let value = match parts.as_slice() {
            ["catalog", "base_url"] => self.catalog.base_url.clone(),
            ["catalog", "cover_size"] => self.catalog.cover_size.to_string(),
            ["storage", "path"] => self.storage.path.clone(),
            _ => {
                return Err(eyre::eyre!("Unknown configuration key: {}", key));
            }
        };

        Ok(value)
    }

    pub fn show_all(&self) -> String {
        format!(
            "Configuration:\n\
             Catalog:\n\
             ├─ base_url: {}\n\
             └─ cover_size: {}\n\
             Storage:\n\
             └─ path: {}",
            self.catalog.base_url, self.catalog.cover_size, self.storage.path,
        )
    }

    /// Overwrite the file at `config_path` with the defaults.
    pub async fn reset_to(config_path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(config_path).await?;
        Ok(config)
    }
}

/// Get the default configuration directory
fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "bookverse", "bookverse") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        // Fallback to current directory if we can't determine project dirs
        PathBuf::from(".bookverse").join("config")
    }
}

/// Get the default data directory
pub fn get_default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "bookverse", "bookverse") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        // Fallback to current directory if we can't determine project dirs
        PathBuf::from(".bookverse").join("data")
    }
}
