use cineverse_catalog::{CatalogClient, CatalogError};
use cineverse_models::{CollectionEntry, ComparisonEntry, MovieDetail};
use futures::future::join_all;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LookupError {
    /// The catalog answered, but without a usable record
    #[error("{0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fresh detail for one id. Details are never cached.
pub async fn fetch_detail(catalog: &dyn CatalogClient, id: &str) -> Result<MovieDetail, LookupError> {
    debug!("Fetching {} from {}", id, catalog.catalog_name());
    let response = catalog.fetch_by_id(id).await?;
    match response.to_detail() {
        Some(detail) => Ok(detail),
        None => {
            let message = response
                .error
                .clone()
                .unwrap_or_else(|| format!("No details available for {}", id));
            debug!("Detail lookup for {} on {} failed: {}", id, catalog.catalog_name(), message);
            Err(LookupError::NotFound(message))
        }
    }
}

/// Details for every comparison entry, fetched concurrently, in entry order.
pub async fn fetch_comparison_details(
    catalog: &dyn CatalogClient,
    entries: &[ComparisonEntry],
) -> Vec<(String, Result<MovieDetail, LookupError>)> {
    let lookups = entries.iter().map(|entry| async move {
        let id = entry.id().to_string();
        let detail = fetch_detail(catalog, &id).await;
        (id, detail)
    });
    join_all(lookups).await
}
