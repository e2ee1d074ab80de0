use super::context::AppContext;
use super::ui::{membership, spinner};
use crate::output::{new_table, Output};
use cineverse_core::{fetch_featured, CollectionManager};
use cineverse_models::MovieSummary;
use color_eyre::Result;

pub async fn run_featured(ctx: &AppContext, output: &Output) -> Result<()> {
    let catalog = ctx.catalog()?;
    let manager = ctx.collections();

    let pb = spinner(output, "Loading featured titles...");
    let featured = fetch_featured(&catalog).await;
    pb.finish_and_clear();

    if !output.is_human() {
        output.data(&featured);
        return Ok(());
    }

    for (heading, titles) in [("Featured movies", &featured.movies), ("Popular series", &featured.series)] {
        output.println(heading);
        if titles.is_empty() {
            output.warn("Nothing to show right now");
            continue;
        }
        output.table(&section_table(&manager, titles));
    }
    Ok(())
}

fn section_table(manager: &CollectionManager, titles: &[MovieSummary]) -> comfy_table::Table {
    let mut table = new_table(["ID", "Title", "Year", "Lists"]);
    for movie in titles {
        table.add_row(vec![
            movie.id.clone(),
            movie.title.clone(),
            movie.year.clone(),
            membership(manager, &movie.id),
        ]);
    }
    table
}
