//! Sorted and filtered copies of the collections for display.
//!
//! Collections keep insertion order; nothing here reorders the backing sequence.

use cineverse_models::{CollectionEntry, FavoriteEntry, MovieKind, WatchlistEntry};
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FavoriteSort {
    /// Most recently added first
    #[default]
    AddedAt,
    Title,
    /// Newest release first
    Year,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatchlistFilter {
    #[default]
    All,
    Watched,
    Unwatched,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatchlistSort {
    #[default]
    Added,
    Title,
    Year,
    /// High before low
    Priority,
}

impl FromStr for FavoriteSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "added" | "added-at" | "addedat" => Ok(FavoriteSort::AddedAt),
            "title" => Ok(FavoriteSort::Title),
            "year" => Ok(FavoriteSort::Year),
            _ => Err(format!("Invalid sort: {}. Use 'added', 'title', or 'year'", s)),
        }
    }
}

impl FromStr for WatchlistFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(WatchlistFilter::All),
            "watched" => Ok(WatchlistFilter::Watched),
            "unwatched" => Ok(WatchlistFilter::Unwatched),
            _ => Err(format!("Invalid filter: {}. Use 'all', 'watched', or 'unwatched'", s)),
        }
    }
}

impl FromStr for WatchlistSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "added" => Ok(WatchlistSort::Added),
            "title" => Ok(WatchlistSort::Title),
            "year" => Ok(WatchlistSort::Year),
            "priority" => Ok(WatchlistSort::Priority),
            _ => Err(format!("Invalid sort: {}. Use 'added', 'title', 'year', or 'priority'", s)),
        }
    }
}

fn by_title<E: CollectionEntry>(a: &E, b: &E) -> Ordering {
    a.movie().title.to_lowercase().cmp(&b.movie().title.to_lowercase())
}

fn by_year_desc<E: CollectionEntry>(a: &E, b: &E) -> Ordering {
    b.movie().year.cmp(&a.movie().year)
}

pub fn sorted_favorites(entries: &[FavoriteEntry], sort: FavoriteSort) -> Vec<FavoriteEntry> {
    let mut sorted = entries.to_vec();
    match sort {
        FavoriteSort::AddedAt => sorted.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
        FavoriteSort::Title => sorted.sort_by(by_title),
        FavoriteSort::Year => sorted.sort_by(by_year_desc),
    }
    sorted
}

pub fn watchlist_view(entries: &[WatchlistEntry], filter: WatchlistFilter, sort: WatchlistSort) -> Vec<WatchlistEntry> {
    let mut view: Vec<WatchlistEntry> = entries
        .iter()
        .filter(|e| match filter {
            WatchlistFilter::All => true,
            WatchlistFilter::Watched => e.watched,
            WatchlistFilter::Unwatched => !e.watched,
        })
        .cloned()
        .collect();

    match sort {
        WatchlistSort::Added => view.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
        WatchlistSort::Title => view.sort_by(by_title),
        WatchlistSort::Year => view.sort_by(by_year_desc),
        WatchlistSort::Priority => view.sort_by(|a, b| b.priority.cmp(&a.priority)),
    }
    view
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub movies: usize,
    pub series: usize,
    pub episodes: usize,
}

pub fn count_by_kind<E: CollectionEntry>(entries: &[E]) -> KindCounts {
    entries.iter().fold(KindCounts::default(), |mut counts, e| {
        match e.movie().kind {
            MovieKind::Movie => counts.movies += 1,
            MovieKind::Series => counts.series += 1,
            MovieKind::Episode => counts.episodes += 1,
        }
        counts
    })
}
