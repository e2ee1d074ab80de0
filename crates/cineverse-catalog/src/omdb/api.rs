use cineverse_models::SearchFilters;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use crate::error::CatalogError;

pub type QueryParams = Vec<(&'static str, String)>;

/// `s`, `page`, `apikey`
pub fn search_params(query: &str, page: u32, api_key: &str) -> QueryParams {
    vec![
        ("s", query.to_string()),
        ("page", page.to_string()),
        ("apikey", api_key.to_string()),
    ]
}

/// Search parameters plus `type` and `y`. The catalog has no genre parameter,
/// so a genre filter is not forwarded.
pub fn filtered_search_params(query: &str, filters: &SearchFilters, page: u32, api_key: &str) -> QueryParams {
    let mut params = search_params(query, page, api_key);
    if let Some(kind) = filters.kind {
        params.push(("type", kind.as_str().to_string()));
    }
    if let Some(year) = filters.year() {
        params.push(("y", year.to_string()));
    }
    params
}

/// `i`, `plot=full`, `apikey`
pub fn detail_params(id: &str, api_key: &str) -> QueryParams {
    vec![
        ("i", id.to_string()),
        ("plot", "full".to_string()),
        ("apikey", api_key.to_string()),
    ]
}

/// Issue one GET and parse the body. A non-2xx status is only an error when
/// the body does not parse; the catalog reports domain failures in the body.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    params: &QueryParams,
) -> Result<T, CatalogError> {
    let response = client.get(base_url).query(params).send().await?;

    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<T>(&body) {
        Ok(parsed) => {
            if !status.is_success() {
                warn!("Catalog returned HTTP {} with a parseable body", status);
            }
            Ok(parsed)
        }
        Err(e) if !status.is_success() => {
            debug!("Unparseable body for HTTP {}: {}", status, e);
            Err(CatalogError::Http {
                status: status.as_u16(),
                body,
            })
        }
        Err(e) => Err(CatalogError::Decode(e.to_string())),
    }
}
