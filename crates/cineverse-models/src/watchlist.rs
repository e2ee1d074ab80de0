use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::movie::MovieSummary;
use crate::CollectionEntry;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub watched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>, // Only present once marked watched
}

impl WatchlistEntry {
    /// New entry with the add-time defaults: medium priority, unwatched.
    pub fn new(movie: MovieSummary, added_at: DateTime<Utc>) -> Self {
        Self {
            movie,
            added_at,
            priority: Priority::default(),
            watched: false,
            watched_at: None,
        }
    }

    /// Marks the entry watched. The first timestamp is kept on repeat calls.
    pub fn mark_watched(&mut self, at: DateTime<Utc>) {
        if !self.watched || self.watched_at.is_none() {
            self.watched_at = Some(at);
        }
        self.watched = true;
    }
}

impl CollectionEntry for WatchlistEntry {
    fn movie(&self) -> &MovieSummary {
        &self.movie
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("Invalid priority: {}. Use 'low', 'medium', or 'high'", other)),
        }
    }
}
