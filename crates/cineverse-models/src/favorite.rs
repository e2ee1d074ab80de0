use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::movie::MovieSummary;
use crate::CollectionEntry;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub added_at: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn new(movie: MovieSummary, added_at: DateTime<Utc>) -> Self {
        Self { movie, added_at }
    }
}

impl CollectionEntry for FavoriteEntry {
    fn movie(&self) -> &MovieSummary {
        &self.movie
    }
}
