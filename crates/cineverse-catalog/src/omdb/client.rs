use crate::error::CatalogError;
use crate::omdb::api;
use crate::response::{DetailResponse, SearchResponse};
use crate::traits::CatalogClient;
use async_trait::async_trait;
use cineverse_models::SearchFilters;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct OmdbClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Build a client whose requests fail with `CatalogError::Timeout` after `timeout`.
    pub fn new(base_url: String, api_key: String, timeout: Duration, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self::with_client(client, base_url, api_key))
    }

    pub fn with_client(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client: Arc::new(client),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl CatalogClient for OmdbClient {
    fn catalog_name(&self) -> &str {
        "omdb"
    }

    async fn search_by_title(&self, query: &str, page: u32) -> Result<SearchResponse, CatalogError> {
        debug!("Searching catalog for '{}' (page {})", query, page);
        let params = api::search_params(query, page, &self.api_key);
        api::get_json(&self.client, &self.base_url, &params).await
    }

    async fn search_by_title_with_filters(
        &self,
        query: &str,
        filters: &SearchFilters,
        page: u32,
    ) -> Result<SearchResponse, CatalogError> {
        debug!("Searching catalog for '{}' (page {}) with filters {:?}", query, page, filters);
        let params = api::filtered_search_params(query, filters, page, &self.api_key);
        api::get_json(&self.client, &self.base_url, &params).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<DetailResponse, CatalogError> {
        debug!("Fetching catalog detail for {}", id);
        let params = api::detail_params(id, &self.api_key);
        api::get_json(&self.client, &self.base_url, &params).await
    }
}
