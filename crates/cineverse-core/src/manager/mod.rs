mod search;
#[cfg(test)]
mod tests;

pub use search::{run_search, SearchTicket, DEFAULT_NO_RESULTS_MESSAGE};

use crate::storage::{PersistentStore, COMPARISON_KEY, DARK_MODE_KEY, FAVORITES_KEY, WATCHLIST_KEY};
use chrono::Utc;
use cineverse_models::{
    CollectionEntry, ComparisonEntry, FavoriteEntry, MovieSummary, Priority, SearchState, WatchlistEntry,
};
use tracing::{debug, info};

/// Most movies the comparison set holds at once
pub const COMPARISON_CAPACITY: usize = 4;

/// Owns search state and the three user collections.
///
/// The methods here are the only way to change that state. Every collection
/// change is written through to the [`PersistentStore`] before returning.
pub struct CollectionManager {
    store: PersistentStore,
    search: SearchState,
    search_generation: u64,
    favorites: Vec<FavoriteEntry>,
    watchlist: Vec<WatchlistEntry>,
    comparison: Vec<ComparisonEntry>,
    dark_mode: bool,
}

fn contains<E: CollectionEntry>(entries: &[E], id: &str) -> bool {
    entries.iter().any(|e| e.id() == id)
}

impl CollectionManager {
    /// Load every collection from `store`, starting empty where nothing valid is stored.
    pub fn new(store: PersistentStore) -> Self {
        let favorites: Vec<FavoriteEntry> = store.load(FAVORITES_KEY, Vec::new());
        let watchlist: Vec<WatchlistEntry> = store.load(WATCHLIST_KEY, Vec::new());
        let comparison: Vec<ComparisonEntry> = store.load(COMPARISON_KEY, Vec::new());
        let dark_mode = store.load(DARK_MODE_KEY, false);

        info!(
            "Loaded collections: {} favorites, {} watchlist, {} comparison",
            favorites.len(),
            watchlist.len(),
            comparison.len()
        );

        Self {
            store,
            search: SearchState::default(),
            search_generation: 0,
            favorites,
            watchlist,
            comparison,
            dark_mode,
        }
    }

    // Read-only state

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn results(&self) -> &[MovieSummary] {
        &self.search.results
    }

    pub fn loading(&self) -> bool {
        self.search.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.search.error.as_deref()
    }

    pub fn total_results(&self) -> u64 {
        self.search.total_results
    }

    pub fn current_page(&self) -> u32 {
        self.search.current_page
    }

    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.favorites
    }

    pub fn watchlist(&self) -> &[WatchlistEntry] {
        &self.watchlist
    }

    pub fn comparison(&self) -> &[ComparisonEntry] {
        &self.comparison
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        contains(&self.favorites, id)
    }

    pub fn is_in_watchlist(&self, id: &str) -> bool {
        contains(&self.watchlist, id)
    }

    pub fn is_in_comparison(&self, id: &str) -> bool {
        contains(&self.comparison, id)
    }

    pub fn watchlist_entry(&self, id: &str) -> Option<&WatchlistEntry> {
        self.watchlist.iter().find(|e| e.id() == id)
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    // Write-through

    fn persist_favorites(&self) {
        self.store.save(FAVORITES_KEY, &self.favorites);
    }

    fn persist_watchlist(&self) {
        self.store.save(WATCHLIST_KEY, &self.watchlist);
    }

    fn persist_comparison(&self) {
        self.store.save(COMPARISON_KEY, &self.comparison);
    }

    // Favorites

    /// Remove the movie if it is a favorite, otherwise add it stamped with the current time.
    pub fn toggle_favorite(&mut self, movie: &MovieSummary) {
        if self.is_favorite(&movie.id) {
            self.favorites.retain(|f| f.id() != movie.id);
            debug!("Removed {} from favorites. Total: {}", movie.id, self.favorites.len());
        } else {
            self.favorites.push(FavoriteEntry::new(movie.clone(), Utc::now()));
            debug!("Added {} to favorites. Total: {}", movie.id, self.favorites.len());
        }
        self.persist_favorites();
    }

    pub fn clear_favorites(&mut self) {
        info!("Clearing {} favorites", self.favorites.len());
        self.favorites.clear();
        self.persist_favorites();
    }

    // Watchlist

    /// Insert with the add-time defaults. No-op when already present.
    pub fn add_to_watchlist(&mut self, movie: &MovieSummary) {
        if self.is_in_watchlist(&movie.id) {
            debug!("{} already in watchlist", movie.id);
            return;
        }
        self.watchlist.push(WatchlistEntry::new(movie.clone(), Utc::now()));
        debug!("Added {} to watchlist. Total: {}", movie.id, self.watchlist.len());
        self.persist_watchlist();
    }

    pub fn remove_from_watchlist(&mut self, id: &str) {
        let before = self.watchlist.len();
        self.watchlist.retain(|e| e.id() != id);
        if self.watchlist.len() == before {
            return;
        }
        debug!("Removed {} from watchlist. Total: {}", id, self.watchlist.len());
        self.persist_watchlist();
    }

    pub fn toggle_watchlist(&mut self, movie: &MovieSummary) {
        if self.is_in_watchlist(&movie.id) {
            self.remove_from_watchlist(&movie.id);
        } else {
            self.add_to_watchlist(movie);
        }
    }

    /// Changes only the priority; `added_at` and the watched state are untouched.
    pub fn update_watchlist_priority(&mut self, id: &str, priority: Priority) {
        let Some(entry) = self.watchlist.iter_mut().find(|e| e.id() == id) else {
            return;
        };
        entry.priority = priority;
        debug!("Set watchlist priority of {} to {}", id, priority);
        self.persist_watchlist();
    }

    /// Not a toggle: a watched entry stays watched and keeps its first `watched_at`.
    pub fn mark_as_watched(&mut self, id: &str) {
        let Some(entry) = self.watchlist.iter_mut().find(|e| e.id() == id) else {
            return;
        };
        entry.mark_watched(Utc::now());
        debug!("Marked {} as watched", id);
        self.persist_watchlist();
    }

    pub fn clear_watchlist(&mut self) {
        info!("Clearing {} watchlist entries", self.watchlist.len());
        self.watchlist.clear();
        self.persist_watchlist();
    }

    // Comparison

    /// Append unless the set is full or already holds the movie. A full set
    /// rejects the new movie rather than evicting an old one.
    pub fn add_to_comparison(&mut self, movie: &MovieSummary) {
        if self.is_comparison_full() {
            debug!("Comparison limit reached (max {}), ignoring {}", COMPARISON_CAPACITY, movie.id);
            return;
        }
        if self.is_in_comparison(&movie.id) {
            return;
        }
        self.comparison.push(ComparisonEntry::from(movie.clone()));
        debug!("Added {} to comparison. Total: {}", movie.id, self.comparison.len());
        self.persist_comparison();
    }

    pub fn remove_from_comparison(&mut self, id: &str) {
        let before = self.comparison.len();
        self.comparison.retain(|e| e.id() != id);
        if self.comparison.len() == before {
            return;
        }
        debug!("Removed {} from comparison. Total: {}", id, self.comparison.len());
        self.persist_comparison();
    }

    pub fn clear_comparison(&mut self) {
        info!("Clearing {} comparison entries", self.comparison.len());
        self.comparison.clear();
        self.persist_comparison();
    }

    pub fn is_comparison_full(&self) -> bool {
        self.comparison.len() >= COMPARISON_CAPACITY
    }

    // Preferences

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.store.save(DARK_MODE_KEY, &self.dark_mode);
        self.dark_mode
    }
}
