//! One-shot title search.

use bookverse_session::{RequestOutcome, SearchSession};
use bookverse_types::SearchPage;
use eyre::Result;
use tracing::info;

use crate::config::Config;
use crate::render;
use crate::utils::{create_catalog, load_favorites};

pub async fn handle_search_command(
    config: &Config,
    query: String,
    page: u32,
    favorite: Option<usize>,
    json: bool,
) -> Result<()> {
    if query.trim().is_empty() {
        println!("💡 Enter a title to search, e.g. bookverse search dune");
        return Ok(());
    }

    let mut favorites = load_favorites(config).await;
    let mut session = SearchSession::new(create_catalog(config)?);

    session.open_query(query, page);

    if !json {
        println!("🔍 Searching for: {}", session.state().query.trim());
    }

    match session.settle().await {
        Some(RequestOutcome::Resolved { count, total_found, .. }) => {
            info!("Received {} of {} results", count, total_found);
        }
        Some(RequestOutcome::Failed { message, .. }) => {
            return Err(eyre::eyre!("Search failed: {}", message));
        }
        None => {}
    }

    let state = session.state();

    if let Some(position) = favorite {
        let Some(book) = position
            .checked_sub(1)
            .and_then(|index| state.results.get(index))
        else {
            return Err(eyre::eyre!(
                "No result #{} on this page ({} results listed)",
                position,
                state.results.len()
            ));
        };

        if favorites.toggle(book.clone()).await? {
            println!("⭐ Added to favorites: {}", book.title);
        } else {
            println!("🗑️  Removed from favorites: {}", book.title);
        }
    }

    if json {
        let page = SearchPage {
            docs: state.results.clone(),
            num_found: state.total_found,
        };
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!(
        "{}",
        render::format_view(state, &favorites, config.catalog.cover_size)
    );

    if state.has_next_page() {
        println!(
            "\n💡 Next page: bookverse search {:?} --page {}",
            state.query.trim(),
            state.page + 1
        );
    }

    Ok(())
}
