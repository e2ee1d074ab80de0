use crate::output::Output;
use cineverse_core::CollectionManager;
use cineverse_models::MovieSummary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while waiting on the catalog. Hidden unless the output is
/// a human-facing, non-quiet terminal.
pub fn spinner(output: &Output, message: impl Into<String>) -> ProgressBar {
    if output.is_quiet() || !output.is_human() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Compact membership markers: F = favorite, W = watchlist, C = comparison
pub fn membership(manager: &CollectionManager, id: &str) -> String {
    let mut marks = String::new();
    if manager.is_favorite(id) {
        marks.push('F');
    }
    if manager.is_in_watchlist(id) {
        marks.push('W');
    }
    if manager.is_in_comparison(id) {
        marks.push('C');
    }
    marks
}

pub fn describe(movie: &MovieSummary) -> String {
    format!("\"{}\" ({})", movie.title, movie.year)
}
