use serde::{Deserialize, Serialize};
use crate::movie::MovieSummary;
use crate::CollectionEntry;

/// Comparison entries carry no metadata beyond the summary itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonEntry {
    #[serde(flatten)]
    pub movie: MovieSummary,
}

impl From<MovieSummary> for ComparisonEntry {
    fn from(movie: MovieSummary) -> Self {
        Self { movie }
    }
}

impl CollectionEntry for ComparisonEntry {
    fn movie(&self) -> &MovieSummary {
        &self.movie
    }
}
