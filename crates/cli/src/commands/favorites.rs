//! Favorites list management.

use eyre::Result;

use crate::cli::FavoritesCommands;
use crate::config::Config;
use crate::render;
use crate::utils::load_favorites;

pub async fn handle_favorites_command(cmd: FavoritesCommands, config: &Config) -> Result<()> {
    match cmd {
        FavoritesCommands::List { json } => handle_list_favorites(json, config).await,
        FavoritesCommands::Remove { key } => handle_remove_favorite(key, config).await,
    }
}

async fn handle_list_favorites(json: bool, config: &Config) -> Result<()> {
    let favorites = load_favorites(config).await;

    if json {
        println!("{}", serde_json::to_string_pretty(favorites.list())?);
        return Ok(());
    }

    if favorites.is_empty() {
        println!("You haven't added any favorites yet ⭐");
        println!("💡 Add one with: bookverse search <title> --favorite <N>");
        return Ok(());
    }

    println!("⭐ Favorites ({}):", favorites.len());
    println!(
        "{}",
        render::format_books(favorites.list(), &favorites, config.catalog.cover_size)
    );
    Ok(())
}

async fn handle_remove_favorite(key: String, config: &Config) -> Result<()> {
    let mut favorites = load_favorites(config).await;

    let Some(book) = favorites.get(&key).cloned() else {
        println!("❌ Not in favorites: {}", key);
        return Ok(());
    };

    favorites.toggle(book.clone()).await?;
    println!("🗑️  Removed from favorites: {} ({})", book.title, book.key);
    Ok(())
}
