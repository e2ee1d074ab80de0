use super::context::{resolve_movie, AppContext};
use super::ui::{describe, membership};
use crate::output::{new_table, Output};
use cineverse_core::{count_by_kind, sorted_favorites, FavoriteSort};
use color_eyre::Result;
use serde_json::json;

pub fn run_list(ctx: &AppContext, sort: FavoriteSort, output: &Output) -> Result<()> {
    let manager = ctx.collections();
    let favorites = sorted_favorites(manager.favorites(), sort);
    let counts = count_by_kind(manager.favorites());

    if !output.is_human() {
        output.data(&json!({ "favorites": favorites, "counts": counts }));
        return Ok(());
    }

    if favorites.is_empty() {
        output.info("No favorites yet. Add one with: cineverse favorites toggle <id>");
        return Ok(());
    }

    let mut table = new_table(["ID", "Title", "Year", "Type", "Added", "Lists"]);
    for entry in &favorites {
        table.add_row(vec![
            entry.movie.id.clone(),
            entry.movie.title.clone(),
            entry.movie.year.clone(),
            entry.movie.kind.to_string(),
            entry.added_at.format("%Y-%m-%d %H:%M").to_string(),
            membership(&manager, &entry.movie.id),
        ]);
    }
    output.table(&table);
    output.println(format!(
        "{} favorites: {} movies, {} series, {} episodes",
        favorites.len(),
        counts.movies,
        counts.series,
        counts.episodes
    ));
    Ok(())
}

pub async fn run_toggle(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let mut manager = ctx.collections();
    let movie = resolve_movie(ctx, &manager, id).await?;

    manager.toggle_favorite(&movie);

    if manager.is_favorite(id) {
        output.success(format!("Added {} to favorites", describe(&movie)));
    } else {
        output.success(format!("Removed {} from favorites", describe(&movie)));
    }
    Ok(())
}
