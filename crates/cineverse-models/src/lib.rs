pub mod comparison;
pub mod detail;
pub mod favorite;
pub mod movie;
pub mod rating;
pub mod search;
pub mod watchlist;

pub use comparison::ComparisonEntry;
pub use detail::MovieDetail;
pub use favorite::FavoriteEntry;
pub use movie::{MovieKind, MovieSummary};
pub use rating::RatingPair;
pub use search::{SearchFilters, SearchState, RESULTS_PER_PAGE};
pub use watchlist::{Priority, WatchlistEntry};

/// A stored record keyed by the catalog id of the movie it wraps.
///
/// Every user collection holds at most one entry per id.
pub trait CollectionEntry {
    fn movie(&self) -> &MovieSummary;

    fn id(&self) -> &str {
        &self.movie().id
    }
}
