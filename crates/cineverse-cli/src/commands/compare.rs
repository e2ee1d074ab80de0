use super::context::{resolve_movie, AppContext};
use super::ui::{describe, spinner};
use crate::output::{new_table, Output};
use cineverse_core::{fetch_comparison_details, LookupError, COMPARISON_CAPACITY};
use cineverse_models::{CollectionEntry, MovieDetail};
use color_eyre::Result;
use comfy_table::Table;
use serde_json::json;

pub async fn run_list(ctx: &AppContext, output: &Output) -> Result<()> {
    let manager = ctx.collections();
    let entries = manager.comparison();

    if entries.is_empty() {
        output.info(format!(
            "The comparison set is empty. Add up to {} titles with: cineverse compare add <id>",
            COMPARISON_CAPACITY
        ));
        return Ok(());
    }

    let catalog = ctx.catalog()?;
    let pb = spinner(output, format!("Loading details for {} titles...", entries.len()));
    let details = fetch_comparison_details(&catalog, entries).await;
    pb.finish_and_clear();

    if !output.is_human() {
        let rows: Vec<_> = details
            .iter()
            .map(|(id, result)| match result {
                Ok(detail) => json!({ "id": id, "detail": detail }),
                Err(e) => json!({ "id": id, "error": e.to_string() }),
            })
            .collect();
        output.data(&json!({ "comparison": rows, "capacity": COMPARISON_CAPACITY }));
        return Ok(());
    }

    output.table(&comparison_table(&details));
    for (id, result) in &details {
        if let Err(e) = result {
            output.warn(format!("Could not load {}: {}", id, e));
        }
    }
    output.println(format!("{} of {} slots used", entries.len(), COMPARISON_CAPACITY));
    Ok(())
}

/// One column per title, one row per attribute
fn comparison_table(details: &[(String, Result<MovieDetail, LookupError>)]) -> Table {
    let headers: Vec<String> = std::iter::once("".to_string())
        .chain(details.iter().map(|(id, result)| match result {
            Ok(detail) => detail.title.clone(),
            Err(_) => id.clone(),
        }))
        .collect();
    let mut table = new_table(headers.iter().map(String::as_str));

    let attributes: [(&str, fn(&MovieDetail) -> String); 9] = [
        ("Year", |d| d.year.clone()),
        ("Type", |d| d.kind.to_string()),
        ("Runtime", |d| d.runtime.clone().unwrap_or_default()),
        ("Genre", |d| d.genres.join(", ")),
        ("Director", |d| d.director.clone().unwrap_or_default()),
        ("IMDb", |d| d.imdb_rating.clone().unwrap_or_default()),
        ("Rotten Tomatoes", |d| d.rating_from("Rotten Tomatoes").unwrap_or_default().to_string()),
        ("Metascore", |d| d.metascore.clone().unwrap_or_default()),
        ("Box office", |d| d.box_office.clone().unwrap_or_default()),
    ];

    for (label, value) in attributes {
        let mut row = vec![label.to_string()];
        row.extend(details.iter().map(|(_, result)| match result {
            Ok(detail) => value(detail),
            Err(_) => "-".to_string(),
        }));
        table.add_row(row);
    }
    table
}

pub async fn run_add(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let mut manager = ctx.collections();

    if manager.is_in_comparison(id) {
        output.info(format!("{} is already in the comparison set", id));
        return Ok(());
    }
    if manager.is_comparison_full() {
        output.warn(format!(
            "The comparison set is full ({} titles). Remove one first with: cineverse compare remove <id>",
            COMPARISON_CAPACITY
        ));
        return Ok(());
    }

    let movie = resolve_movie(ctx, &manager, id).await?;
    manager.add_to_comparison(&movie);
    output.success(format!(
        "Added {} to the comparison set ({}/{})",
        describe(&movie),
        manager.comparison().len(),
        COMPARISON_CAPACITY
    ));
    Ok(())
}

pub fn run_remove(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let mut manager = ctx.collections();
    let Some(entry) = manager.comparison().iter().find(|e| e.id() == id).cloned() else {
        output.warn(format!("{} is not in the comparison set", id));
        return Ok(());
    };

    manager.remove_from_comparison(id);
    output.success(format!("Removed {} from the comparison set", describe(entry.movie())));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineverse_models::{MovieKind, RatingPair};

    fn detail(id: &str, title: &str) -> MovieDetail {
        MovieDetail {
            id: id.to_string(),
            title: title.to_string(),
            year: "2010".to_string(),
            kind: MovieKind::Movie,
            poster_url: None,
            plot: None,
            runtime: Some("148 min".to_string()),
            genres: vec!["Sci-Fi".to_string()],
            director: None,
            writer: None,
            actors: vec![],
            language: None,
            country: None,
            awards: None,
            rated: None,
            released: None,
            ratings: vec![RatingPair::new("Rotten Tomatoes", "87%")],
            imdb_rating: Some("8.8".to_string()),
            imdb_votes: None,
            metascore: None,
            box_office: None,
        }
    }

    #[test]
    fn test_comparison_table_has_a_column_per_title() {
        let details = vec![
            ("tt1".to_string(), Ok(detail("tt1", "Inception"))),
            ("tt2".to_string(), Err(LookupError::NotFound("Incorrect IMDb ID.".to_string()))),
        ];
        let rendered = comparison_table(&details).to_string();
        assert!(rendered.contains("Inception"));
        assert!(rendered.contains("tt2"));
        assert!(rendered.contains("87%"));
        assert!(rendered.contains("148 min"));
    }
}
