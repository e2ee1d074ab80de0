use cineverse_models::{MovieDetail, MovieKind, MovieSummary, RatingPair};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Catalog placeholder for a missing value
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResponseFlag {
    True,
    False,
}

/// Body of a title search, kept as the catalog sent it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(rename = "Response")]
    pub response: ResponseFlag,
    #[serde(rename = "Search", default)]
    pub search: Vec<RawSearchItem>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Type")]
    pub item_type: String,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Body of a single-item lookup. Every detail field is optional because a
/// `Response: "False"` body carries only `Error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DetailResponse {
    #[serde(default)]
    pub response: Option<ResponseFlag>,
    pub error: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "Type")]
    pub item_type: Option<String>,
    pub poster: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    #[serde(default)]
    pub ratings: Vec<RawRating>,
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    pub box_office: Option<String>,
}

fn available(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != NOT_AVAILABLE)
        .map(str::to_string)
}

fn split_list(value: Option<&str>) -> Vec<String> {
    available(value)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.response == ResponseFlag::True
    }

    /// `totalResults` as a count, 0 when absent or unparsable
    pub fn total_results_count(&self) -> u64 {
        self.total_results
            .as_deref()
            .and_then(|t| t.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }

    /// Rows converted to summaries. Rows with an unknown type are skipped.
    pub fn summaries(&self) -> Vec<MovieSummary> {
        self.search.iter().filter_map(RawSearchItem::to_summary).collect()
    }
}

impl RawSearchItem {
    pub fn to_summary(&self) -> Option<MovieSummary> {
        let kind = match self.item_type.parse::<MovieKind>() {
            Ok(kind) => kind,
            Err(_) => {
                debug!("Skipping {} ({}): unsupported type '{}'", self.imdb_id, self.title, self.item_type);
                return None;
            }
        };
        Some(MovieSummary {
            id: self.imdb_id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            kind,
            poster_url: available(self.poster.as_deref()),
        })
    }
}

impl DetailResponse {
    pub fn is_success(&self) -> bool {
        self.response == Some(ResponseFlag::True)
    }

    /// Converts a successful body into a detail record. `None` for a
    /// `Response: "False"` body or one missing the id, title, or a known type.
    pub fn to_detail(&self) -> Option<MovieDetail> {
        if !self.is_success() {
            return None;
        }
        let id = available(self.imdb_id.as_deref())?;
        let title = available(self.title.as_deref())?;
        let kind = self.item_type.as_deref()?.parse::<MovieKind>().ok()?;

        Some(MovieDetail {
            id,
            title,
            year: self.year.clone().unwrap_or_default(),
            kind,
            poster_url: available(self.poster.as_deref()),
            plot: available(self.plot.as_deref()),
            runtime: available(self.runtime.as_deref()),
            genres: split_list(self.genre.as_deref()),
            director: available(self.director.as_deref()),
            writer: available(self.writer.as_deref()),
            actors: split_list(self.actors.as_deref()),
            language: available(self.language.as_deref()),
            country: available(self.country.as_deref()),
            awards: available(self.awards.as_deref()),
            rated: available(self.rated.as_deref()),
            released: available(self.released.as_deref()),
            ratings: self
                .ratings
                .iter()
                .map(|r| RatingPair::new(r.source.clone(), r.value.clone()))
                .collect(),
            imdb_rating: available(self.imdb_rating.as_deref()),
            imdb_votes: available(self.imdb_votes.as_deref()),
            metascore: available(self.metascore.as_deref()),
            box_office: available(self.box_office.as_deref()),
        })
    }
}
