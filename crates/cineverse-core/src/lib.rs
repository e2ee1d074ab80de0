pub mod details;
pub mod featured;
pub mod manager;
pub mod ordering;
pub mod share;
pub mod shared;
pub mod storage;

pub use details::{fetch_comparison_details, fetch_detail, LookupError};
pub use featured::{fetch_featured, Featured, FEATURED_LIMIT};
pub use manager::{CollectionManager, SearchTicket, COMPARISON_CAPACITY};
pub use ordering::{count_by_kind, sorted_favorites, watchlist_view, FavoriteSort, KindCounts, WatchlistFilter, WatchlistSort};
pub use share::{ShareLinks, SharePlatform};
pub use shared::SharedCollections;
pub use storage::{BlobStore, FileBlobStore, MemoryBlobStore, PersistentStore};
