//! Text rendering of search state for the terminal.

use bookverse_session::SearchState;
use bookverse_storage::FavoritesStore;
use bookverse_types::{BookRecord, CoverSize, ViewMode};

/// One listed book: numbered title line followed by detail lines.
pub fn format_book(
    index: usize,
    book: &BookRecord,
    favorited: bool,
    cover_size: CoverSize,
) -> String {
    let marker = if favorited { "★" } else { "☆" };
    let mut lines = vec![format!("  {}. {} 📖 {}", index, marker, book.title)];

    let authors = book.authors_display();
    if !authors.is_empty() {
        lines.push(format!("     👤 {}", authors));
    }
    lines.push(format!("     🎨 {}", book.cover_url_or_placeholder(cover_size)));
    lines.push(format!("     🔗 {}", book.detail_url()));
    lines.join("\n")
}

pub fn format_books(
    books: &[BookRecord],
    favorites: &FavoritesStore,
    cover_size: CoverSize,
) -> String {
    books
        .iter()
        .enumerate()
        .map(|(i, book)| format_book(i + 1, book, favorites.contains(&book.key), cover_size))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Page 2 of 4 (37 results)` for search results, a count for favorites.
pub fn format_summary(state: &SearchState, favorites: &FavoritesStore) -> Option<String> {
    match state.view_mode {
        ViewMode::Favorites if !favorites.is_empty() => {
            Some(format!("⭐ {} favorites", favorites.len()))
        }
        ViewMode::Search if state.total_found > 0 => Some(format!(
            "📊 Page {} of {} ({} results)",
            state.page,
            state.total_pages(),
            state.total_found
        )),
        _ => None,
    }
}

/// Inline status lines: loading, errors and empty states.
pub fn format_status(state: &SearchState, favorites: &FavoritesStore) -> Vec<String> {
    let mut lines = Vec::new();
    if state.is_loading {
        lines.push("Loading...".to_string());
    }
    if let Some(error) = &state.last_error {
        lines.push(format!("❌ Error: {}", error));
    }
    if state.view_mode == ViewMode::Favorites && favorites.is_empty() {
        lines.push("You haven't added any favorites yet ⭐".to_string());
    }
    if state.shows_no_results() {
        lines.push("No results found.".to_string());
    }
    lines
}

/// Everything shown for the current state.
pub fn format_view(
    state: &SearchState,
    favorites: &FavoritesStore,
    cover_size: CoverSize,
) -> String {
    let mut sections = format_status(state, favorites);

    let books = state.displayed(favorites.list());
    if !books.is_empty() {
        sections.push(format_books(books, favorites, cover_size));
    }
    if let Some(summary) = format_summary(state, favorites) {
        sections.push(summary);
    }
    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookverse_storage::MemoryStorage;
    use std::sync::Arc;

    async fn favorites_with(books: Vec<BookRecord>) -> FavoritesStore {
        let mut store = FavoritesStore::load(Arc::new(MemoryStorage::new())).await;
        for book in books.into_iter().rev() {
            store.toggle(book).await.unwrap();
        }
        store
    }

    fn dune() -> BookRecord {
        BookRecord::new("/works/OL123W", "Dune")
            .with_authors(["Frank Herbert"])
            .with_cover(42)
    }

    #[test]
    fn test_format_book() {
        let text = format_book(3, &dune(), true, CoverSize::Medium);
        assert_eq!(
            text,
            "  3. ★ 📖 Dune\n\
             \u{20}    👤 Frank Herbert\n\
             \u{20}    🎨 https://covers.openlibrary.org/b/id/42-M.jpg\n\
             \u{20}    🔗 https://openlibrary.org/works/OL123W"
        );
    }

    #[test]
    fn test_format_book_without_authors_or_cover() {
        let book = BookRecord::new("/works/OL1W", "Anon");
        let text = format_book(1, &book, false, CoverSize::Medium);
        assert!(text.starts_with("  1. ☆ 📖 Anon"));
        assert!(!text.contains('👤'));
        assert!(text.contains("https://via.placeholder.com/128x180?text=No+Cover"));
    }

    #[tokio::test]
    async fn test_status_for_loading_and_errors() {
        let favorites = favorites_with(vec![]).await;
        let state = SearchState {
            query: "dune".to_string(),
            is_loading: true,
            ..SearchState::default()
        };
        assert_eq!(format_status(&state, &favorites), vec!["Loading..."]);

        let failed = SearchState {
            query: "dune".to_string(),
            last_error: Some("Network error (HTTP 503)".to_string()),
            ..SearchState::default()
        };
        assert_eq!(
            format_status(&failed, &favorites),
            vec!["❌ Error: Network error (HTTP 503)"]
        );
    }

    #[tokio::test]
    async fn test_empty_states() {
        let favorites = favorites_with(vec![]).await;

        let searched = SearchState {
            query: "zzzz".to_string(),
            ..SearchState::default()
        };
        assert_eq!(format_status(&searched, &favorites), vec!["No results found."]);

        let favorites_view = SearchState {
            view_mode: ViewMode::Favorites,
            ..SearchState::default()
        };
        assert_eq!(
            format_status(&favorites_view, &favorites),
            vec!["You haven't added any favorites yet ⭐"]
        );

        assert!(format_status(&SearchState::default(), &favorites).is_empty());
    }

    #[tokio::test]
    async fn test_view_lists_favorites_in_favorites_mode() {
        let favorites = favorites_with(vec![dune()]).await;
        let state = SearchState {
            query: "emma".to_string(),
            view_mode: ViewMode::Favorites,
            results: vec![BookRecord::new("/works/OL9W", "Emma")],
            total_found: 1,
            ..SearchState::default()
        };

        let text = format_view(&state, &favorites, CoverSize::Medium);
        assert!(text.contains("★ 📖 Dune"));
        assert!(!text.contains("Emma"));
        assert!(text.ends_with("⭐ 1 favorites"));
    }

    #[tokio::test]
    async fn test_summary_for_search_results() {
        let favorites = favorites_with(vec![]).await;
        let state = SearchState {
            query: "dune".to_string(),
            page: 2,
            total_found: 37,
            ..SearchState::default()
        };
        assert_eq!(
            format_summary(&state, &favorites).as_deref(),
            Some("📊 Page 2 of 4 (37 results)")
        );
    }
}
