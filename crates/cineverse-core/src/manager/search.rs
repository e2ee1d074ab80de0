use super::CollectionManager;
use cineverse_catalog::{CatalogClient, CatalogError, SearchResponse};
use cineverse_models::SearchFilters;
use tracing::{debug, warn};

/// Shown when the catalog reports a failure without a message
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No results found";

/// One issued search. Only the most recently issued ticket may update state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub query: String,
    pub filters: SearchFilters,
    pub page: u32,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn uses_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}

/// Dispatch a ticket to the catalog: the filtered lookup when any filter key is set.
pub async fn run_search(catalog: &dyn CatalogClient, ticket: &SearchTicket) -> Result<SearchResponse, CatalogError> {
    debug!(
        "Searching {} for '{}' page {} (filtered: {})",
        catalog.catalog_name(),
        ticket.query,
        ticket.page,
        ticket.uses_filters()
    );
    if ticket.uses_filters() {
        catalog
            .search_by_title_with_filters(&ticket.query, &ticket.filters, ticket.page)
            .await
    } else {
        catalog.search_by_title(&ticket.query, ticket.page).await
    }
}

impl CollectionManager {
    /// Start a search. Supersedes any search still in flight.
    ///
    /// A blank query resolves immediately to an empty result and returns `None`;
    /// the catalog must not be called in that case.
    pub fn begin_search(&mut self, query: &str, filters: SearchFilters, page: u32) -> Option<SearchTicket> {
        self.search_generation += 1;
        self.search.loading = true;
        self.search.error = None;

        let query = query.trim();
        if query.is_empty() {
            self.search.results.clear();
            self.search.total_results = 0;
            self.search.error = None;
            self.search.loading = false;
            return None;
        }

        Some(SearchTicket {
            generation: self.search_generation,
            query: query.to_string(),
            filters,
            page: page.max(1),
        })
    }

    /// Apply the outcome of `ticket`. Returns `false`, changing nothing, when a
    /// newer search or a `clear_search` has superseded it.
    pub fn finish_search(&mut self, ticket: &SearchTicket, outcome: Result<SearchResponse, CatalogError>) -> bool {
        if ticket.generation != self.search_generation {
            debug!(
                "Discarding stale response for '{}' (search {} superseded by {})",
                ticket.query, ticket.generation, self.search_generation
            );
            return false;
        }

        match outcome {
            Ok(response) if response.is_success() => {
                self.search.results = response.summaries();
                self.search.total_results = response.total_results_count();
                self.search.current_page = ticket.page;
                self.search.error = None;
                debug!(
                    "Search '{}' page {}: {} results of {}",
                    ticket.query,
                    ticket.page,
                    self.search.results.len(),
                    self.search.total_results
                );
            }
            Ok(response) => {
                let message = response
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_NO_RESULTS_MESSAGE.to_string());
                warn!("Search '{}' returned no results: {}", ticket.query, message);
                self.search.error = Some(message);
                self.search.results.clear();
                self.search.total_results = 0;
            }
            Err(e) => {
                warn!("Search '{}' failed: {}", ticket.query, e);
                self.search.error = Some(format!("Connection error: {}", e));
                self.search.results.clear();
                self.search.total_results = 0;
            }
        }

        // Last, so observers never see loading=false next to stale results
        self.search.loading = false;
        true
    }

    /// Begin, await the catalog, and finish in one call.
    pub async fn search(&mut self, catalog: &dyn CatalogClient, query: &str, filters: SearchFilters, page: u32) {
        let Some(ticket) = self.begin_search(query, filters, page) else {
            return;
        };
        let outcome = run_search(catalog, &ticket).await;
        self.finish_search(&ticket, outcome);
    }

    /// Reset search state without a network call. Any in-flight search is superseded.
    pub fn clear_search(&mut self) {
        self.search_generation += 1;
        self.search.results.clear();
        self.search.error = None;
        self.search.current_page = 1;
        self.search.total_results = 0;
        self.search.loading = false;
    }

    /// Updates the page only; callers follow up with a search.
    pub fn set_current_page(&mut self, page: u32) {
        self.search.current_page = page.max(1);
    }

    pub fn clear_error(&mut self) {
        self.search.error = None;
    }
}
