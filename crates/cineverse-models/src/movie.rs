use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single search-result row as returned by the catalog.
///
/// Never mutated once received; collections copy it into their entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub year: String, // May be a range such as "2016–2019"
    pub kind: MovieKind,
    #[serde(default)]
    pub poster_url: Option<String>, // None when the catalog has no poster
}

impl MovieSummary {
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: impl Into<String>, kind: MovieKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            kind,
            poster_url: None,
        }
    }

    pub fn with_poster(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MovieKind {
    Movie,
    Series,
    Episode,
}

impl MovieKind {
    /// Catalog query value for the `type` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieKind::Movie => "movie",
            MovieKind::Series => "series",
            MovieKind::Episode => "episode",
        }
    }
}

impl fmt::Display for MovieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" => Ok(MovieKind::Movie),
            "series" => Ok(MovieKind::Series),
            "episode" => Ok(MovieKind::Episode),
            other => Err(format!("Invalid kind: {}. Use 'movie', 'series', or 'episode'", other)),
        }
    }
}
