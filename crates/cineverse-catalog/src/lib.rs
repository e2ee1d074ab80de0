pub mod error;
pub mod omdb;
pub mod response;
pub mod traits;

pub use error::CatalogError;
pub use omdb::OmdbClient;
pub use response::{DetailResponse, RawRating, RawSearchItem, ResponseFlag, SearchResponse};
pub use traits::CatalogClient;
