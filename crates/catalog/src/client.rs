use async_trait::async_trait;
use bookverse_types::SearchPage;

use crate::error::Result;
use crate::query::SearchQuery;

#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage>;
}
