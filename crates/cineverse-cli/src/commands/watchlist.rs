use super::context::{resolve_movie, AppContext};
use super::ui::describe;
use crate::output::{mark, new_table, Output};
use cineverse_core::{count_by_kind, watchlist_view, WatchlistFilter, WatchlistSort};
use cineverse_models::{Priority, WatchlistEntry};
use color_eyre::Result;
use serde_json::json;

pub fn run_list(ctx: &AppContext, filter: WatchlistFilter, sort: WatchlistSort, output: &Output) -> Result<()> {
    let manager = ctx.collections();
    let entries = watchlist_view(manager.watchlist(), filter, sort);
    let watched = manager.watchlist().iter().filter(|e| e.watched).count();

    if !output.is_human() {
        output.data(&json!({
            "watchlist": entries,
            "counts": count_by_kind(manager.watchlist()),
            "watched": watched,
            "total": manager.watchlist().len(),
        }));
        return Ok(());
    }

    if entries.is_empty() {
        output.info("Nothing on the watchlist matches. Add a title with: cineverse watchlist add <id>");
        return Ok(());
    }

    output.table(&watchlist_table(&entries));
    output.println(format!("{} of {} watched", watched, manager.watchlist().len()));
    Ok(())
}

fn watchlist_table(entries: &[WatchlistEntry]) -> comfy_table::Table {
    let mut table = new_table(["ID", "Title", "Year", "Priority", "Watched", "Added"]);
    for entry in entries {
        table.add_row(vec![
            entry.movie.id.clone(),
            entry.movie.title.clone(),
            entry.movie.year.clone(),
            entry.priority.to_string(),
            entry
                .watched_at
                .map(|at| format!("{} {}", mark(true), at.format("%Y-%m-%d")))
                .unwrap_or_else(|| mark(entry.watched).to_string()),
            entry.added_at.format("%Y-%m-%d").to_string(),
        ]);
    }
    table
}

pub async fn run_add(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let mut manager = ctx.collections();
    if manager.is_in_watchlist(id) {
        output.info(format!("{} is already on the watchlist", id));
        return Ok(());
    }

    let movie = resolve_movie(ctx, &manager, id).await?;
    manager.add_to_watchlist(&movie);
    output.success(format!("Added {} to the watchlist", describe(&movie)));
    Ok(())
}

pub fn run_remove(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let mut manager = ctx.collections();
    let Some(entry) = manager.watchlist_entry(id).cloned() else {
        output.warn(format!("{} is not on the watchlist", id));
        return Ok(());
    };

    manager.remove_from_watchlist(id);
    output.success(format!("Removed {} from the watchlist", describe(&entry.movie)));
    Ok(())
}

pub async fn run_toggle(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let mut manager = ctx.collections();
    let movie = resolve_movie(ctx, &manager, id).await?;

    manager.toggle_watchlist(&movie);

    if manager.is_in_watchlist(id) {
        output.success(format!("Added {} to the watchlist", describe(&movie)));
    } else {
        output.success(format!("Removed {} from the watchlist", describe(&movie)));
    }
    Ok(())
}

pub fn run_watched(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let mut manager = ctx.collections();
    if !manager.is_in_watchlist(id) {
        output.warn(format!("{} is not on the watchlist", id));
        return Ok(());
    }

    manager.mark_as_watched(id);
    if let Some(entry) = manager.watchlist_entry(id) {
        let when = entry
            .watched_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        output.success(format!("Marked {} as watched {}", describe(&entry.movie), when).trim_end());
    }
    Ok(())
}

pub fn run_priority(ctx: &AppContext, id: &str, priority: Priority, output: &Output) -> Result<()> {
    let mut manager = ctx.collections();
    if !manager.is_in_watchlist(id) {
        output.warn(format!("{} is not on the watchlist", id));
        return Ok(());
    }

    manager.update_watchlist_priority(id, priority);
    output.success(format!("Set priority of {} to {}", id, priority));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cineverse_models::{MovieKind, MovieSummary};

    #[test]
    fn test_watchlist_table_shows_watched_date() {
        let added = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut seen = WatchlistEntry::new(MovieSummary::new("tt1", "Heat", "1995", MovieKind::Movie), added);
        seen.mark_watched(Utc.with_ymd_and_hms(2024, 2, 3, 20, 0, 0).unwrap());
        let unseen = WatchlistEntry::new(MovieSummary::new("tt2", "Ronin", "1998", MovieKind::Movie), added);

        let rendered = watchlist_table(&[seen, unseen]).to_string();
        assert!(rendered.contains("2024-02-03"));
        assert!(rendered.contains("Ronin"));
        assert!(rendered.contains("medium"));
    }
}
