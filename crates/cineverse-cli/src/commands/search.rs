use super::context::AppContext;
use super::ui::{describe, membership, spinner};
use crate::output::{new_table, Output};
use cineverse_core::CollectionManager;
use cineverse_models::{SearchFilters, RESULTS_PER_PAGE};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;
use tracing::info;

pub async fn run_search(ctx: &AppContext, query: &str, filters: SearchFilters, page: u32, output: &Output) -> Result<()> {
    if query.trim().is_empty() {
        output.warn("Enter a title to search for");
        return Ok(());
    }

    let catalog = ctx.catalog()?;
    let mut manager = ctx.collections();

    let pb = spinner(output, format!("Searching for \"{}\"...", query.trim()));
    manager.search(&catalog, query, filters, page).await;
    pb.finish_and_clear();

    ensure_succeeded(&manager, output)?;

    let state = manager.search_state();
    info!(
        "Search \"{}\" returned {} of {} results",
        query.trim(),
        state.results.len(),
        state.total_results
    );

    if !output.is_human() {
        output.data(&json!({
            "query": query.trim(),
            "results": state.results,
            "totalResults": state.total_results,
            "currentPage": state.current_page,
            "totalPages": state.total_pages(),
        }));
        return Ok(());
    }

    let mut table = new_table(["#", "ID", "Title", "Year", "Type", "Lists"]);
    let offset = u64::from(state.current_page.saturating_sub(1)) * RESULTS_PER_PAGE;
    for (i, movie) in state.results.iter().enumerate() {
        table.add_row(vec![
            (offset + i as u64 + 1).to_string(),
            movie.id.clone(),
            movie.title.clone(),
            movie.year.clone(),
            movie.kind.to_string(),
            membership(&manager, &movie.id),
        ]);
    }
    output.table(&table);
    output.println(format!(
        "Page {} of {} ({} results)",
        state.current_page,
        state.total_pages(),
        state.total_results
    ));
    if let Some(first) = state.results.first() {
        output.println(format!("Try: cineverse detail {}  # {}", first.id, describe(first)));
    }

    Ok(())
}

/// A failed search fails the command, so scripts get a non-zero exit.
fn ensure_succeeded(manager: &CollectionManager, output: &Output) -> Result<()> {
    let Some(error) = manager.error() else {
        return Ok(());
    };
    if !output.is_human() {
        output.error(error);
    }
    Err(eyre!("Search failed: {}", error))
}
