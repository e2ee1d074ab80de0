use super::context::AppContext;
use super::ui::spinner;
use crate::output::{new_table, Output};
use cineverse_core::{fetch_detail, SharePlatform};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;

pub async fn run_share(ctx: &AppContext, id: &str, platform: Option<SharePlatform>, output: &Output) -> Result<()> {
    let catalog = ctx.catalog()?;

    let pb = spinner(output, format!("Loading {}...", id));
    let result = fetch_detail(&catalog, id).await;
    pb.finish_and_clear();
    let detail = result.map_err(|e| eyre!("{}", e))?;

    let links = ctx.share_links();
    let movie = detail.summary();
    let plot = detail.plot.as_deref();
    let platforms: Vec<SharePlatform> = match platform {
        Some(p) => vec![p],
        None => SharePlatform::ALL.to_vec(),
    };

    if !output.is_human() {
        let urls: serde_json::Map<String, serde_json::Value> = platforms
            .iter()
            .map(|p| (p.to_string(), json!(links.share_url(&movie, plot, *p))))
            .collect();
        output.data(&json!({
            "id": movie.id,
            "pageUrl": links.page_url(&movie.id),
            "clipboard": links.clipboard_text(&movie),
            "links": urls,
        }));
        return Ok(());
    }

    let mut table = new_table(["Platform", "Link"]);
    for p in &platforms {
        table.add_row(vec![p.to_string(), links.share_url(&movie, plot, *p)]);
    }
    output.table(&table);
    output.println(links.clipboard_text(&movie));
    Ok(())
}
