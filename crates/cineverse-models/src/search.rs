use serde::{Deserialize, Serialize};
use crate::movie::{MovieKind, MovieSummary};

/// The catalog pages search results in fixed pages of ten.
pub const RESULTS_PER_PAGE: u64 = 10;

/// Optional search filters. Blank strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MovieKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl SearchFilters {
    pub fn year(&self) -> Option<&str> {
        non_blank(self.year.as_deref())
    }

    pub fn genre(&self) -> Option<&str> {
        non_blank(self.genre.as_deref())
    }

    /// True when no filter key carries a value
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.year().is_none() && self.genre().is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Transient search state, rebuilt on every search and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub results: Vec<MovieSummary>,
    pub loading: bool,
    pub error: Option<String>,
    pub total_results: u64,
    pub current_page: u32,
}

impl SearchState {
    pub fn total_pages(&self) -> u64 {
        self.total_results.div_ceil(RESULTS_PER_PAGE)
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            loading: false,
            error: None,
            total_results: 0,
            current_page: 1,
        }
    }
}
