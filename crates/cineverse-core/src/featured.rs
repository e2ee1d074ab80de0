//! Home view picks: a few featured movies and popular series.

use cineverse_catalog::{CatalogClient, CatalogError, SearchResponse};
use cineverse_models::{MovieKind, MovieSummary, SearchFilters};
use serde::Serialize;
use tracing::warn;

pub const FEATURED_MOVIES_QUERY: &str = "avengers";
pub const POPULAR_SERIES_QUERY: &str = "series";
/// Titles kept per section
pub const FEATURED_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Featured {
    pub movies: Vec<MovieSummary>,
    pub series: Vec<MovieSummary>,
}

/// Both sections are fetched concurrently. A failed section is logged and
/// comes back empty; it never fails the other one.
pub async fn fetch_featured(catalog: &dyn CatalogClient) -> Featured {
    let series_filters = SearchFilters {
        kind: Some(MovieKind::Series),
        ..SearchFilters::default()
    };

    let (movies, series) = futures::join!(
        catalog.search_by_title(FEATURED_MOVIES_QUERY, 1),
        catalog.search_by_title_with_filters(POPULAR_SERIES_QUERY, &series_filters, 1),
    );

    Featured {
        movies: top_titles(movies, "featured movies"),
        series: top_titles(series, "popular series"),
    }
}

fn top_titles(outcome: Result<SearchResponse, CatalogError>, section: &str) -> Vec<MovieSummary> {
    match outcome {
        Ok(response) if response.is_success() => response.summaries().into_iter().take(FEATURED_LIMIT).collect(),
        Ok(response) => {
            warn!("No {}: {}", section, response.error.unwrap_or_default());
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to load {}: {}", section, e);
            Vec::new()
        }
    }
}
