use async_trait::async_trait;
use cineverse_models::SearchFilters;
use crate::error::CatalogError;
use crate::response::{DetailResponse, SearchResponse};

/// Remote title lookups. Each call is a single request with no retries;
/// retry policy belongs to the caller.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    fn catalog_name(&self) -> &str;

    async fn search_by_title(&self, query: &str, page: u32) -> Result<SearchResponse, CatalogError>;

    async fn search_by_title_with_filters(
        &self,
        query: &str,
        filters: &SearchFilters,
        page: u32,
    ) -> Result<SearchResponse, CatalogError>;

    async fn fetch_by_id(&self, id: &str) -> Result<DetailResponse, CatalogError>;
}
