use bookverse_types::PAGE_SIZE;

/// A single title search for one page of results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    title: String,
    page: u32,
}

impl SearchQuery {
    /// Build a query from raw input. The title is trimmed and a page of `0`
    /// is treated as the first page.
    pub fn new(title: &str, page: u32) -> Self {
        Self {
            title: title.trim().to_string(),
            page: page.max(1),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        PAGE_SIZE
    }

    /// Zero-based index of the first record on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(PAGE_SIZE)
    }
}
