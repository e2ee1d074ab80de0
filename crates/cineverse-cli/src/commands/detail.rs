use super::context::AppContext;
use super::ui::spinner;
use crate::output::{mark, new_table, Output};
use cineverse_core::fetch_detail;
use cineverse_models::MovieDetail;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;

pub async fn run_detail(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let catalog = ctx.catalog()?;
    let manager = ctx.collections();

    let pb = spinner(output, format!("Loading {}...", id));
    let result = fetch_detail(&catalog, id).await;
    pb.finish_and_clear();

    let detail = result.map_err(|e| eyre!("{}", e))?;
    let in_watchlist = manager.watchlist_entry(id);

    if !output.is_human() {
        output.data(&json!({
            "detail": detail,
            "favorite": manager.is_favorite(id),
            "watchlist": in_watchlist,
            "comparison": manager.is_in_comparison(id),
        }));
        return Ok(());
    }

    output.table(&detail_table(&detail));

    let mut lists = new_table(["Favorite", "Watchlist", "Priority", "Watched", "Comparison"]);
    lists.add_row(vec![
        mark(manager.is_favorite(id)).to_string(),
        mark(in_watchlist.is_some()).to_string(),
        in_watchlist.map(|e| e.priority.to_string()).unwrap_or_default(),
        mark(in_watchlist.is_some_and(|e| e.watched)).to_string(),
        mark(manager.is_in_comparison(id)).to_string(),
    ]);
    output.table(&lists);

    Ok(())
}

fn detail_table(detail: &MovieDetail) -> comfy_table::Table {
    let mut table = new_table(["Field", "Value"]);
    let rows: Vec<(&str, String)> = vec![
        ("Title", detail.title.clone()),
        ("Year", detail.year.clone()),
        ("Type", detail.kind.to_string()),
        ("Rated", opt(&detail.rated)),
        ("Released", opt(&detail.released)),
        ("Runtime", opt(&detail.runtime)),
        ("Genre", detail.genres.join(", ")),
        ("Director", opt(&detail.director)),
        ("Writer", opt(&detail.writer)),
        ("Actors", detail.actors.join(", ")),
        ("Language", opt(&detail.language)),
        ("Country", opt(&detail.country)),
        ("Awards", opt(&detail.awards)),
        ("IMDb", rating_line(detail)),
        ("Metascore", opt(&detail.metascore)),
        ("Box office", opt(&detail.box_office)),
        ("Plot", opt(&detail.plot)),
    ];
    for (field, value) in rows {
        if !value.is_empty() {
            table.add_row(vec![field.to_string(), value]);
        }
    }
    for rating in &detail.ratings {
        table.add_row(vec![rating.source.clone(), rating.value.clone()]);
    }
    table
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn rating_line(detail: &MovieDetail) -> String {
    match (&detail.imdb_rating, &detail.imdb_votes) {
        (Some(rating), Some(votes)) => format!("{} ({} votes)", rating, votes),
        (Some(rating), None) => rating.clone(),
        _ => String::new(),
    }
}
