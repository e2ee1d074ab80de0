use super::*;
use crate::shared::SharedCollections;
use crate::storage::{FileBlobStore, MemoryBlobStore, PersistentStore};
use async_trait::async_trait;
use cineverse_catalog::{CatalogClient, CatalogError, DetailResponse, RawSearchItem, ResponseFlag, SearchResponse};
use cineverse_models::{MovieKind, SearchFilters};
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn movie(id: &str) -> MovieSummary {
    MovieSummary::new(id, format!("Movie {}", id), "2020", MovieKind::Movie)
}

fn manager_with_backend() -> (CollectionManager, Arc<MemoryBlobStore>) {
    let backend = Arc::new(MemoryBlobStore::new());
    let manager = CollectionManager::new(PersistentStore::new(backend.clone()));
    (manager, backend)
}

fn ids<E: CollectionEntry>(entries: &[E]) -> Vec<&str> {
    entries.iter().map(|e| e.id()).collect()
}

fn found(query: &str, total: &str) -> SearchResponse {
    SearchResponse {
        response: ResponseFlag::True,
        search: vec![RawSearchItem {
            imdb_id: format!("tt_{}", query),
            title: query.to_string(),
            year: "2001".to_string(),
            item_type: "movie".to_string(),
            poster: Some("N/A".to_string()),
        }],
        total_results: Some(total.to_string()),
        error: None,
    }
}

/// Records every call; responds by query. "slow" sleeps before answering.
#[derive(Default)]
struct StubCatalog {
    calls: Mutex<Vec<String>>,
}

impl StubCatalog {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    async fn respond(&self, query: &str) -> Result<SearchResponse, CatalogError> {
        if query == "slow" {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        match query {
            "zzzzz_nonexistent" => Ok(SearchResponse {
                response: ResponseFlag::False,
                search: Vec::new(),
                total_results: None,
                error: Some("Movie not found!".to_string()),
            }),
            "silent_failure" => Ok(SearchResponse {
                response: ResponseFlag::False,
                search: Vec::new(),
                total_results: None,
                error: None,
            }),
            "offline" => Err(CatalogError::Transport("dns error: no such host".to_string())),
            "garbled" => Ok(found(query, "many")),
            _ => Ok(found(query, "42")),
        }
    }
}

#[async_trait]
impl CatalogClient for StubCatalog {
    fn catalog_name(&self) -> &str {
        "stub"
    }

    async fn search_by_title(&self, query: &str, page: u32) -> Result<SearchResponse, CatalogError> {
        self.calls.lock().push(format!("search:{}:{}", query, page));
        self.respond(query).await
    }

    async fn search_by_title_with_filters(
        &self,
        query: &str,
        _filters: &SearchFilters,
        page: u32,
    ) -> Result<SearchResponse, CatalogError> {
        self.calls.lock().push(format!("filtered:{}:{}", query, page));
        self.respond(query).await
    }

    async fn fetch_by_id(&self, _id: &str) -> Result<DetailResponse, CatalogError> {
        Err(CatalogError::Transport("not used".to_string()))
    }
}

// Favorites

#[test]
fn test_toggle_favorite_adds_then_removes() {
    let (mut manager, _) = manager_with_backend();
    let m = MovieSummary::new("tt001", "A", "2020", MovieKind::Movie);

    manager.toggle_favorite(&m);
    assert_eq!(manager.favorites().len(), 1);
    assert_eq!(manager.favorites()[0].movie, m);
    assert!(manager.is_favorite("tt001"));

    manager.toggle_favorite(&m);
    assert!(manager.favorites().is_empty());
    assert!(!manager.is_favorite("tt001"));
}

#[test]
fn test_toggle_favorite_twice_restores_membership() {
    let (mut manager, _) = manager_with_backend();
    manager.toggle_favorite(&movie("tt1"));
    manager.toggle_favorite(&movie("tt2"));
    let before: Vec<String> = ids(manager.favorites()).into_iter().map(String::from).collect();

    manager.toggle_favorite(&movie("tt3"));
    manager.toggle_favorite(&movie("tt3"));
    assert_eq!(ids(manager.favorites()), before);
}

#[test]
fn test_favorites_written_through() {
    let (mut manager, backend) = manager_with_backend();
    manager.toggle_favorite(&movie("tt1"));
    let raw = backend.raw(FAVORITES_KEY).unwrap();
    let stored: Vec<FavoriteEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(ids(&stored), vec!["tt1"]);

    manager.clear_favorites();
    let stored: Vec<FavoriteEntry> = serde_json::from_str(&backend.raw(FAVORITES_KEY).unwrap()).unwrap();
    assert!(stored.is_empty());
}

#[test]
fn test_collections_survive_restart() {
    let backend = Arc::new(MemoryBlobStore::new());
    {
        let mut manager = CollectionManager::new(PersistentStore::new(backend.clone()));
        manager.toggle_favorite(&movie("tt1"));
        manager.add_to_watchlist(&movie("tt2"));
        manager.mark_as_watched("tt2");
        manager.add_to_comparison(&movie("tt3"));
        manager.toggle_theme();
    }

    let manager = CollectionManager::new(PersistentStore::new(backend));
    assert!(manager.is_favorite("tt1"));
    assert!(manager.watchlist_entry("tt2").unwrap().watched);
    assert!(manager.is_in_comparison("tt3"));
    assert!(manager.is_dark_mode());
}

#[test]
fn test_corrupt_storage_starts_empty() {
    let backend = Arc::new(MemoryBlobStore::new());
    backend.insert_raw(FAVORITES_KEY, "not json at all");
    backend.insert_raw(WATCHLIST_KEY, r#"{"unexpected": "shape"}"#);
    let manager = CollectionManager::new(PersistentStore::new(backend));
    assert!(manager.favorites().is_empty());
    assert!(manager.watchlist().is_empty());
}

#[test]
fn test_persistence_failure_does_not_block_mutation() {
    let backend = Arc::new(MemoryBlobStore::failing());
    let mut manager = CollectionManager::new(PersistentStore::new(backend.clone()));
    manager.toggle_favorite(&movie("tt1"));
    manager.add_to_comparison(&movie("tt1"));
    assert!(manager.is_favorite("tt1"));
    assert!(manager.is_in_comparison("tt1"));
    assert_eq!(backend.raw(FAVORITES_KEY), None);
}

// Watchlist

#[test]
fn test_add_to_watchlist_is_insert_if_absent() {
    let (mut manager, _) = manager_with_backend();
    manager.add_to_watchlist(&movie("tt1"));
    manager.update_watchlist_priority("tt1", Priority::High);
    manager.add_to_watchlist(&movie("tt1"));

    assert_eq!(manager.watchlist().len(), 1);
    let entry = &manager.watchlist()[0];
    assert_eq!(entry.priority, Priority::High);
    assert!(!entry.watched);
}

#[test]
fn test_toggle_watchlist_reinserts_with_defaults() {
    let (mut manager, _) = manager_with_backend();
    let m = movie("tt1");
    manager.toggle_watchlist(&m);
    manager.update_watchlist_priority("tt1", Priority::Low);
    manager.mark_as_watched("tt1");

    manager.toggle_watchlist(&m);
    assert!(!manager.is_in_watchlist("tt1"));

    manager.toggle_watchlist(&m);
    let entry = manager.watchlist_entry("tt1").unwrap();
    assert_eq!(entry.priority, Priority::Medium);
    assert!(!entry.watched);
    assert_eq!(entry.watched_at, None);
}

#[test]
fn test_remove_from_watchlist_missing_is_noop() {
    let (mut manager, backend) = manager_with_backend();
    manager.remove_from_watchlist("tt404");
    assert!(manager.watchlist().is_empty());
    assert_eq!(backend.raw(WATCHLIST_KEY), None);
}

#[test]
fn test_update_priority_keeps_other_fields() {
    let (mut manager, _) = manager_with_backend();
    manager.add_to_watchlist(&movie("tt1"));
    manager.mark_as_watched("tt1");
    let before = manager.watchlist_entry("tt1").unwrap().clone();

    manager.update_watchlist_priority("tt1", Priority::High);
    let after = manager.watchlist_entry("tt1").unwrap();
    assert_eq!(after.priority, Priority::High);
    assert_eq!(after.added_at, before.added_at);
    assert_eq!(after.watched, before.watched);
    assert_eq!(after.watched_at, before.watched_at);

    manager.update_watchlist_priority("tt404", Priority::Low);
    assert_eq!(manager.watchlist().len(), 1);
}

#[test]
fn test_mark_as_watched_pins_first_timestamp() {
    let (mut manager, _) = manager_with_backend();
    manager.add_to_watchlist(&movie("tt1"));

    manager.mark_as_watched("tt1");
    let first = manager.watchlist_entry("tt1").unwrap().watched_at;
    assert!(first.is_some());

    std::thread::sleep(Duration::from_millis(5));
    manager.mark_as_watched("tt1");
    let entry = manager.watchlist_entry("tt1").unwrap();
    assert!(entry.watched);
    assert_eq!(entry.watched_at, first);

    manager.mark_as_watched("tt404");
    assert_eq!(manager.watchlist().len(), 1);
}

#[test]
fn test_clear_watchlist_persists_empty() {
    let (mut manager, backend) = manager_with_backend();
    manager.add_to_watchlist(&movie("tt1"));
    manager.clear_watchlist();
    assert!(manager.watchlist().is_empty());
    assert_eq!(backend.raw(WATCHLIST_KEY).as_deref().map(str::trim), Some("[]"));
}

// Comparison

#[test]
fn test_comparison_caps_at_four_without_eviction() {
    let (mut manager, _) = manager_with_backend();
    for id in ["tt1", "tt2", "tt3", "tt4"] {
        manager.add_to_comparison(&movie(id));
    }
    assert_eq!(manager.comparison().len(), 4);
    assert!(manager.is_comparison_full());

    manager.add_to_comparison(&movie("tt5"));
    assert_eq!(ids(manager.comparison()), vec!["tt1", "tt2", "tt3", "tt4"]);
    assert!(!manager.is_in_comparison("tt5"));

    manager.remove_from_comparison("tt2");
    assert_eq!(ids(manager.comparison()), vec!["tt1", "tt3", "tt4"]);
}

#[test]
fn test_comparison_rejects_duplicates() {
    let (mut manager, _) = manager_with_backend();
    manager.add_to_comparison(&movie("tt1"));
    manager.add_to_comparison(&movie("tt1"));
    assert_eq!(manager.comparison().len(), 1);

    manager.clear_comparison();
    assert!(manager.comparison().is_empty());
    manager.remove_from_comparison("tt1");
    assert!(manager.comparison().is_empty());
}

// Persistence

#[test]
fn test_unusable_storage_starts_empty_and_keeps_working() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let store = PersistentStore::new(Arc::new(FileBlobStore::new(blocker.join("storage"))));
    let mut manager = CollectionManager::new(store);
    assert!(manager.favorites().is_empty());
    assert!(manager.watchlist().is_empty());
    assert!(manager.comparison().is_empty());
    assert!(!manager.is_dark_mode());

    manager.toggle_favorite(&movie("tt1"));
    manager.add_to_watchlist(&movie("tt2"));
    manager.add_to_comparison(&movie("tt3"));
    assert!(manager.is_favorite("tt1"));
    assert!(manager.is_in_watchlist("tt2"));
    assert!(manager.is_in_comparison("tt3"));
    assert!(manager.toggle_theme());
}

#[derive(Debug, Clone)]
enum Step {
    ToggleFavorite(usize),
    AddToWatchlist(usize),
    ToggleWatchlist(usize),
    AddToComparison(usize),
    RemoveFromComparison(usize),
}

fn step() -> impl Strategy<Value = Step> {
    // Six ids so the comparison cap of four is routinely hit
    let id = 0..6usize;
    prop_oneof![
        id.clone().prop_map(Step::ToggleFavorite),
        id.clone().prop_map(Step::AddToWatchlist),
        id.clone().prop_map(Step::ToggleWatchlist),
        id.clone().prop_map(Step::AddToComparison),
        id.prop_map(Step::RemoveFromComparison),
    ]
}

fn apply(manager: &mut CollectionManager, step: &Step) {
    match step {
        Step::ToggleFavorite(n) => manager.toggle_favorite(&movie(&format!("tt{}", n))),
        Step::AddToWatchlist(n) => manager.add_to_watchlist(&movie(&format!("tt{}", n))),
        Step::ToggleWatchlist(n) => manager.toggle_watchlist(&movie(&format!("tt{}", n))),
        Step::AddToComparison(n) => manager.add_to_comparison(&movie(&format!("tt{}", n))),
        Step::RemoveFromComparison(n) => manager.remove_from_comparison(&format!("tt{}", n)),
    }
}

fn check_unique<E: CollectionEntry>(entries: &[E]) -> Result<(), TestCaseError> {
    let list = ids(entries);
    let mut deduped = list.clone();
    deduped.sort();
    deduped.dedup();
    prop_assert_eq!(deduped.len(), list.len(), "duplicate ids in {:?}", list);
    Ok(())
}

fn stored<T: serde::de::DeserializeOwned>(backend: &MemoryBlobStore, key: &str) -> Vec<T> {
    backend
        .raw(key)
        .map(|raw| serde_json::from_str(&raw).unwrap())
        .unwrap_or_default()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]
    #[test]
    fn collections_stay_unique_capped_and_written_through(steps in prop::collection::vec(step(), 0..40)) {
        let (mut manager, backend) = manager_with_backend();

        for step in &steps {
            apply(&mut manager, step);

            check_unique(manager.favorites())?;
            check_unique(manager.watchlist())?;
            check_unique(manager.comparison())?;
            prop_assert!(manager.comparison().len() <= COMPARISON_CAPACITY);

            let favorites: Vec<FavoriteEntry> = stored(&backend, FAVORITES_KEY);
            let watchlist: Vec<WatchlistEntry> = stored(&backend, WATCHLIST_KEY);
            let comparison: Vec<ComparisonEntry> = stored(&backend, COMPARISON_KEY);
            prop_assert_eq!(favorites.as_slice(), manager.favorites());
            prop_assert_eq!(watchlist.as_slice(), manager.watchlist());
            prop_assert_eq!(comparison.as_slice(), manager.comparison());
        }
    }
}

// Search

#[tokio::test]
async fn test_empty_query_short_circuits() {
    let (mut manager, _) = manager_with_backend();
    let catalog = StubCatalog::default();

    manager.search(&catalog, "", SearchFilters::default(), 1).await;
    manager.search(&catalog, "   ", SearchFilters::default(), 1).await;

    assert!(catalog.calls().is_empty());
    assert!(manager.results().is_empty());
    assert_eq!(manager.error(), None);
    assert!(!manager.loading());
}

#[tokio::test]
async fn test_successful_search_sets_results() {
    let (mut manager, _) = manager_with_backend();
    let catalog = StubCatalog::default();

    manager.search(&catalog, "  alien ", SearchFilters::default(), 3).await;

    assert_eq!(catalog.calls(), vec!["search:alien:3"]);
    assert_eq!(ids_of(manager.results()), vec!["tt_alien"]);
    assert_eq!(manager.results()[0].poster_url, None);
    assert_eq!(manager.total_results(), 42);
    assert_eq!(manager.current_page(), 3);
    assert_eq!(manager.error(), None);
    assert!(!manager.loading());
}

fn ids_of(results: &[MovieSummary]) -> Vec<&str> {
    results.iter().map(|m| m.id.as_str()).collect()
}

#[tokio::test]
async fn test_filters_select_filtered_lookup() {
    let (mut manager, _) = manager_with_backend();
    let catalog = StubCatalog::default();

    let filters = SearchFilters {
        kind: Some(MovieKind::Series),
        ..SearchFilters::default()
    };
    manager.search(&catalog, "office", filters, 1).await;

    let blank = SearchFilters {
        year: Some(String::new()),
        ..SearchFilters::default()
    };
    manager.search(&catalog, "office", blank, 2).await;

    assert_eq!(catalog.calls(), vec!["filtered:office:1", "search:office:2"]);
}

#[tokio::test]
async fn test_domain_failure_clears_results() {
    let (mut manager, _) = manager_with_backend();
    let catalog = StubCatalog::default();

    manager.search(&catalog, "alien", SearchFilters::default(), 1).await;
    assert_eq!(manager.results().len(), 1);

    manager.search(&catalog, "zzzzz_nonexistent", SearchFilters::default(), 1).await;
    assert!(manager.results().is_empty());
    assert_eq!(manager.error(), Some("Movie not found!"));
    assert_eq!(manager.total_results(), 0);
    assert!(!manager.loading());
}

#[tokio::test]
async fn test_domain_failure_without_message_uses_default() {
    let (mut manager, _) = manager_with_backend();
    manager
        .search(&StubCatalog::default(), "silent_failure", SearchFilters::default(), 1)
        .await;
    assert_eq!(manager.error(), Some(DEFAULT_NO_RESULTS_MESSAGE));
}

#[tokio::test]
async fn test_transport_failure_reports_connection_error() {
    let (mut manager, _) = manager_with_backend();
    manager.toggle_favorite(&movie("tt1"));

    manager.search(&StubCatalog::default(), "offline", SearchFilters::default(), 1).await;

    let error = manager.error().unwrap();
    assert!(error.starts_with("Connection error:"));
    assert!(error.contains("no such host"));
    assert!(manager.results().is_empty());
    assert!(!manager.loading());
    // Collections are untouched by search failures
    assert!(manager.is_favorite("tt1"));
}

#[tokio::test]
async fn test_unparsable_total_is_zero() {
    let (mut manager, _) = manager_with_backend();
    manager.search(&StubCatalog::default(), "garbled", SearchFilters::default(), 1).await;
    assert_eq!(manager.results().len(), 1);
    assert_eq!(manager.total_results(), 0);
}

#[test]
fn test_begin_search_sets_loading_and_clears_error() {
    let (mut manager, _) = manager_with_backend();
    let ticket = manager.begin_search("a", SearchFilters::default(), 1).unwrap();
    manager.finish_search(&ticket, Err(CatalogError::Timeout));
    assert!(manager.error().is_some());

    let ticket = manager.begin_search("b", SearchFilters::default(), 0).unwrap();
    assert!(manager.loading());
    assert_eq!(manager.error(), None);
    assert_eq!(ticket.page, 1);
}

#[test]
fn test_stale_response_is_discarded() {
    let (mut manager, _) = manager_with_backend();
    let first = manager.begin_search("first", SearchFilters::default(), 1).unwrap();
    let second = manager.begin_search("second", SearchFilters::default(), 1).unwrap();

    assert!(manager.finish_search(&second, Ok(found("second", "1"))));
    assert!(!manager.loading());

    assert!(!manager.finish_search(&first, Ok(found("first", "1"))));
    assert_eq!(ids_of(manager.results()), vec!["tt_second"]);
}

#[test]
fn test_loading_stays_true_until_latest_search_finishes() {
    let (mut manager, _) = manager_with_backend();
    let first = manager.begin_search("first", SearchFilters::default(), 1).unwrap();
    let second = manager.begin_search("second", SearchFilters::default(), 1).unwrap();

    manager.finish_search(&first, Ok(found("first", "1")));
    assert!(manager.loading());
    assert!(manager.results().is_empty());

    manager.finish_search(&second, Ok(found("second", "1")));
    assert!(!manager.loading());
}

#[test]
fn test_clear_search_supersedes_in_flight() {
    let (mut manager, _) = manager_with_backend();
    let ticket = manager.begin_search("alien", SearchFilters::default(), 2).unwrap();
    manager.clear_search();

    assert!(!manager.finish_search(&ticket, Ok(found("alien", "9"))));
    assert!(manager.results().is_empty());
    assert_eq!(manager.current_page(), 1);
    assert_eq!(manager.total_results(), 0);
    assert!(!manager.loading());
}

#[test]
fn test_set_current_page_and_clear_error() {
    let (mut manager, _) = manager_with_backend();
    manager.set_current_page(5);
    assert_eq!(manager.current_page(), 5);
    assert!(!manager.loading());

    let ticket = manager.begin_search("x", SearchFilters::default(), 1).unwrap();
    manager.finish_search(&ticket, Err(CatalogError::Timeout));
    manager.clear_error();
    assert_eq!(manager.error(), None);
}

#[tokio::test]
async fn test_overlapping_searches_keep_latest_issued() {
    let shared = SharedCollections::new(CollectionManager::new(PersistentStore::in_memory()));
    let catalog = StubCatalog::default();

    let (slow_applied, fast_applied) = tokio::join!(
        shared.search(&catalog, "slow", SearchFilters::default(), 1),
        shared.search(&catalog, "fast", SearchFilters::default(), 1),
    );

    assert!(!slow_applied);
    assert!(fast_applied);
    shared.read(|m| {
        assert_eq!(ids_of(m.results()), vec!["tt_fast"]);
        assert!(!m.loading());
    });
}

#[test]
fn test_shared_handle_mutations() {
    let shared = SharedCollections::new(CollectionManager::new(PersistentStore::in_memory()));
    let view = shared.clone();
    shared.update(|m| m.toggle_favorite(&movie("tt1")));
    assert!(view.read(|m| m.is_favorite("tt1")));
    assert_eq!(view.lock().favorites().len(), 1);
}
