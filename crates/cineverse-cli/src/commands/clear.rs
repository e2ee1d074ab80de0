use super::context::AppContext;
use super::prompts::prompt_yes_no;
use crate::output::Output;
use color_eyre::Result;
use tracing::info;

pub fn run_clear(
    ctx: &AppContext,
    favorites: bool,
    watchlist: bool,
    comparison: bool,
    all: bool,
    yes: bool,
    output: &Output,
) -> Result<()> {
    let (favorites, watchlist, comparison) = if all {
        (true, true, true)
    } else {
        (favorites, watchlist, comparison)
    };

    let targets: Vec<&str> = [
        (favorites, "favorites"),
        (watchlist, "watchlist"),
        (comparison, "comparison set"),
    ]
    .into_iter()
    .filter_map(|(selected, name)| selected.then_some(name))
    .collect();

    if targets.is_empty() {
        output.warn("No clear option specified. Use --favorites, --watchlist, --comparison, or --all");
        output.println("\nExample: cineverse clear --watchlist");
        return Ok(());
    }

    if !yes && !prompt_yes_no(&format!("Clear the {}?", targets.join(", ")), false)? {
        output.info("Nothing cleared");
        return Ok(());
    }

    let mut manager = ctx.collections();

    if favorites {
        let count = manager.favorites().len();
        manager.clear_favorites();
        output.success(format!("Cleared {} favorites", count));
    }

    if watchlist {
        let count = manager.watchlist().len();
        manager.clear_watchlist();
        output.success(format!("Cleared {} watchlist entries", count));
    }

    if comparison {
        let count = manager.comparison().len();
        manager.clear_comparison();
        output.success(format!("Cleared {} titles from the comparison set", count));
    }

    info!("Cleared collections: {}", targets.join(", "));
    Ok(())
}
