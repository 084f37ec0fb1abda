//! Shared record types for BookVerse.
//!
//! These mirror the JSON shapes returned by the Open Library search service,
//! so the same types are used to decode responses and to persist favorites.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Number of records requested per page.
pub const PAGE_SIZE: u32 = 12;

/// Base of the catalog's own web pages; a record's key is appended to it.
pub const CATALOG_WEB_URL: &str = "https://openlibrary.org";

/// Base of the cover image service.
pub const COVERS_URL: &str = "https://covers.openlibrary.org/b/id";

/// Shown for records without a cover identifier.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/128x180?text=No+Cover";

/// A single search result from the catalog.
///
/// Records are identified by `key` (for example `/works/OL123W`) and are never
/// modified after they are received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub key: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(
        rename = "author_name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub authors: Option<Vec<String>>,
    #[serde(rename = "cover_i", default, skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<i64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl BookRecord {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            authors: None,
            cover_id: None,
        }
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_cover(mut self, cover_id: i64) -> Self {
        self.cover_id = Some(cover_id);
        self
    }

    /// Author names joined for display, empty when the catalog sent none.
    pub fn authors_display(&self) -> String {
        self.authors
            .as_deref()
            .map(|names| names.join(", "))
            .unwrap_or_default()
    }

    /// Cover image URL, or `None` when the record has no usable cover.
    ///
    /// The catalog uses non-positive identifiers for missing covers.
    pub fn cover_url(&self, size: CoverSize) -> Option<String> {
        self.cover_id
            .filter(|id| *id > 0)
            .map(|id| cover_url(id, size))
    }

    /// Cover image URL falling back to the placeholder image.
    pub fn cover_url_or_placeholder(&self, size: CoverSize) -> String {
        self.cover_url(size)
            .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_string())
    }

    /// The catalog's own page for this record.
    pub fn detail_url(&self) -> String {
        format!("{}{}", CATALOG_WEB_URL, self.key)
    }
}

/// Build the cover URL for a cover identifier.
pub fn cover_url(cover_id: i64, size: CoverSize) -> String {
    format!("{}/{}-{}.jpg", COVERS_URL, cover_id, size)
}

/// One page of search results as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub docs: Vec<BookRecord>,
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
}

/// Whether the front end shows live search results or the favorites list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Search,
    Favorites,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Search => ViewMode::Favorites,
            ViewMode::Favorites => ViewMode::Search,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Search => write!(f, "search"),
            ViewMode::Favorites => write!(f, "favorites"),
        }
    }
}

/// Size suffix understood by the cover image service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverSize {
    #[serde(rename = "S")]
    Small,
    #[default]
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl fmt::Display for CoverSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverSize::Small => write!(f, "S"),
            CoverSize::Medium => write!(f, "M"),
            CoverSize::Large => write!(f, "L"),
        }
    }
}

impl FromStr for CoverSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" | "SMALL" => Ok(CoverSize::Small),
            "M" | "MEDIUM" => Ok(CoverSize::Medium),
            "L" | "LARGE" => Ok(CoverSize::Large),
            other => Err(format!("Invalid cover size: {}", other)),
        }
    }
}
