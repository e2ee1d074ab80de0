use serde::{Deserialize, Serialize};
use crate::movie::{MovieKind, MovieSummary};
use crate::rating::RatingPair;

/// Full record from the single-item lookup. Fetched fresh per view, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub kind: MovieKind,
    pub poster_url: Option<String>,
    pub plot: Option<String>,
    pub runtime: Option<String>,
    pub genres: Vec<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Vec<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub rated: Option<String>, // Content rating, e.g. "PG-13"
    pub released: Option<String>,
    pub ratings: Vec<RatingPair>,
    pub imdb_rating: Option<String>,
    pub imdb_votes: Option<String>,
    pub metascore: Option<String>,
    pub box_office: Option<String>,
}

impl MovieDetail {
    /// The summary shape stored in collections.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            kind: self.kind,
            poster_url: self.poster_url.clone(),
        }
    }

    pub fn rating_from(&self, source: &str) -> Option<&str> {
        self.ratings
            .iter()
            .find(|r| r.source.eq_ignore_ascii_case(source))
            .map(|r| r.value.as_str())
    }
}
