use bookverse_types::{BookRecord, PAGE_SIZE, ViewMode};

/// Everything the front end renders for one search session.
///
/// `results` and `total_found` always come from the latest request that
/// resolved for the current query and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub page: u32,
    pub view_mode: ViewMode,
    pub results: Vec<BookRecord>,
    pub total_found: u64,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            view_mode: ViewMode::Search,
            results: Vec::new(),
            total_found: 0,
            is_loading: false,
            last_error: None,
        }
    }
}

impl SearchState {
    /// A request should be in flight for this state.
    pub fn wants_fetch(&self) -> bool {
        self.view_mode == ViewMode::Search && !self.query.trim().is_empty()
    }

    pub fn total_pages(&self) -> u64 {
        self.total_found.div_ceil(u64::from(PAGE_SIZE))
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// The records to show: the favorites list in favorites mode, the search
    /// results otherwise.
    pub fn displayed<'a>(&'a self, favorites: &'a [BookRecord]) -> &'a [BookRecord] {
        match self.view_mode {
            ViewMode::Search => &self.results,
            ViewMode::Favorites => favorites,
        }
    }

    /// A query was searched, settled cleanly and matched nothing.
    pub fn shows_no_results(&self) -> bool {
        self.view_mode == ViewMode::Search
            && !self.query.is_empty()
            && !self.is_loading
            && self.last_error.is_none()
            && self.results.is_empty()
    }
}

/// How a request settled, as reported by `SearchSession::settle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Resolved {
        seq: u64,
        count: usize,
        total_found: u64,
    },
    Failed {
        seq: u64,
        message: String,
    },
}

impl RequestOutcome {
    pub fn seq(&self) -> u64 {
        match self {
            RequestOutcome::Resolved { seq, .. } | RequestOutcome::Failed { seq, .. } => *seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_total(page: u32, total_found: u64) -> SearchState {
        SearchState {
            query: "dune".to_string(),
            page,
            total_found,
            ..SearchState::default()
        }
    }

    #[test]
    fn test_default_state() {
        let state = SearchState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.view_mode, ViewMode::Search);
        assert!(!state.wants_fetch());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_wants_fetch_needs_search_mode_and_query() {
        let mut state = state_with_total(1, 0);
        assert!(state.wants_fetch());

        state.query = " \t ".to_string();
        assert!(!state.wants_fetch());

        state.query = "dune".to_string();
        state.view_mode = ViewMode::Favorites;
        assert!(!state.wants_fetch());
    }

    #[test]
    fn test_page_counts() {
        assert_eq!(state_with_total(1, 0).total_pages(), 0);
        assert_eq!(state_with_total(1, 12).total_pages(), 1);
        assert_eq!(state_with_total(1, 37).total_pages(), 4);

        assert!(state_with_total(3, 37).has_next_page());
        assert!(!state_with_total(4, 37).has_next_page());
        assert!(!state_with_total(1, 37).has_previous_page());
        assert!(state_with_total(2, 37).has_previous_page());
    }

    #[test]
    fn test_displayed_follows_view_mode() {
        let favorites = vec![BookRecord::new("/works/OL123W", "Dune")];
        let mut state = state_with_total(1, 1);
        state.results = vec![BookRecord::new("/works/OL9W", "Emma")];

        assert_eq!(state.displayed(&favorites)[0].key, "/works/OL9W");

        state.view_mode = ViewMode::Favorites;
        assert_eq!(state.displayed(&favorites)[0].key, "/works/OL123W");
    }

    #[test]
    fn test_shows_no_results() {
        let mut state = state_with_total(1, 0);
        assert!(state.shows_no_results());

        state.is_loading = true;
        assert!(!state.shows_no_results());

        state.is_loading = false;
        state.last_error = Some("Network error (HTTP 500)".to_string());
        assert!(!state.shows_no_results());

        state.last_error = None;
        state.query.clear();
        assert!(!state.shows_no_results());
    }
}
