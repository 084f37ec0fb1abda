use async_trait::async_trait;
use bookverse_types::SearchPage;
use url::Url;

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use crate::query::SearchQuery;

pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org/";

pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another deployment of the search service.
    ///
    /// `base_url` is the service root; `search.json` is resolved against it,
    /// so a base with a path must end in `/`.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Url::parse(base_url)?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join("search.json")?;
        url.query_pairs_mut()
            .append_pair("title", query.title())
            .append_pair("limit", &query.limit().to_string())
            .append_pair("offset", &query.offset().to_string());
        Ok(url)
    }
}

impl Default for OpenLibraryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let url = self.search_url(query)?;
        tracing::debug!("Searching catalog: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Catalog returned HTTP {}", status.as_u16());
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let page: SearchPage = serde_json::from_slice(&body)?;
        tracing::debug!(
            "Catalog returned {} of {} records",
            page.docs.len(),
            page.num_found
        );
        Ok(page)
    }
}
