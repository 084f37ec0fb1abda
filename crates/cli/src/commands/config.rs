//! `bookverse config` subcommands.
//!
//! Handlers work on an explicit config file path; only the dispatcher looks
//! up the per-user location.

use std::io::{self, Write};
use std::path::Path;

use eyre::Result;

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::{favorites_file, load_favorites};

pub async fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    let config_path = Config::get_config_path();
    match cmd {
        ConfigCommands::Set { key, value } => handle_set_config(&config_path, key, value).await,
        ConfigCommands::Get { key } => handle_get_config(&config_path, key).await,
        ConfigCommands::Show => handle_show_config(&config_path).await,
        ConfigCommands::Reset { force } => handle_reset_config(&config_path, force).await,
    }
}

async fn handle_set_config(config_path: &Path, key: String, value: String) -> Result<()> {
    match set_config(config_path, &key, &value).await {
        Ok(config) => {
            println!("✅ Configuration updated: {} = {}", key, value);
            if let Some(effect) = describe_change(&key, &config) {
                println!("{}", effect);
            }
            Ok(())
        }
        Err(e) => {
            println!("❌ Failed to set configuration: {}", e);
            Err(e)
        }
    }
}

async fn handle_get_config(config_path: &Path, key: String) -> Result<()> {
    let config = Config::load_from(config_path).await?;

    match config.get_value(&key) {
        Ok(value) => {
            println!("{}: {}", key, value);
            Ok(())
        }
        Err(e) => {
            println!("❌ Failed to get configuration: {}", e);
            Err(e)
        }
    }
}

async fn handle_show_config(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path).await?;
    let favorites = load_favorites(&config).await;

    println!("{}", config.show_all());
    println!("File: {}", config_path.display());
    println!(
        "⭐ {} favorites in {}",
        favorites.len(),
        favorites_file(&config).display()
    );
    Ok(())
}

async fn handle_reset_config(config_path: &Path, force: bool) -> Result<()> {
    if !force {
        print!("Reset catalog and storage settings to their defaults? (y/N): ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().to_lowercase().starts_with('y') {
            println!("❌ Cancelled");
            return Ok(());
        }
    }

    let config = Config::reset_to(config_path).await?;
    println!("✅ Configuration reset to defaults");
    println!(
        "💡 Favorites are now read from {}",
        favorites_file(&config).display()
    );
    Ok(())
}

/// Apply `key = value` to the file at `config_path`. The file is only
/// rewritten when the value is accepted.
async fn set_config(config_path: &Path, key: &str, value: &str) -> Result<Config> {
    let mut config = Config::load_from(config_path).await?;
    config.set_value(key, value)?;
    config.save_to(config_path).await?;
    Ok(config)
}

/// What a changed setting means for the next search or favorites access.
fn describe_change(key: &str, config: &Config) -> Option<String> {
    match key {
        "catalog.base_url" => Some(format!(
            "🔍 Searches now go to {}search.json",
            config.catalog.base_url
        )),
        "catalog.cover_size" => Some(format!(
            "🖼️  Covers now use size {}",
            config.catalog.cover_size
        )),
        "storage.path" => Some(format!(
            "⭐ Favorites are now read from {}",
            favorites_file(config).display()
        )),
        _ => None,
    }
}
