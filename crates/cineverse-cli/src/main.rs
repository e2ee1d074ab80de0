use clap::{ArgAction, Parser, Subcommand};
use cineverse_core::{FavoriteSort, SharePlatform, WatchlistFilter, WatchlistSort};
use cineverse_models::{MovieKind, Priority, SearchFilters};
use color_eyre::eyre::Context;
use commands::{clear, compare, config, context::AppContext, detail, favorites, featured, search, share, theme, watchlist};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "cineverse")]
#[command(about = "CineVerse - Search the movie catalog and keep favorites, a watchlist, and comparisons")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog by title
    Search {
        /// Title to search for
        query: String,

        /// Restrict to movie, series, or episode
        #[arg(long = "type", value_name = "KIND")]
        kind: Option<MovieKind>,

        /// Release year
        #[arg(long)]
        year: Option<String>,

        /// Genre (kept with the filters, not sent to the catalog)
        #[arg(long)]
        genre: Option<String>,

        /// Result page, 10 results per page
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show featured movies and popular series
    Featured,
    /// Show full details for one catalog id
    Detail {
        /// Catalog id, e.g. tt1375666
        id: String,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
    /// Manage the watchlist
    Watchlist {
        #[command(subcommand)]
        command: WatchlistCommands,
    },
    /// Manage the comparison set (up to 4 titles)
    Compare {
        #[command(subcommand)]
        command: CompareCommands,
    },
    /// Print share links for a title
    Share {
        /// Catalog id
        id: String,

        /// Only print the link for this platform
        #[arg(long)]
        platform: Option<SharePlatform>,
    },
    /// Show or toggle the display theme
    Theme {
        /// Flip between light and dark
        #[arg(long, action = ArgAction::SetTrue)]
        toggle: bool,
    },
    /// Clear stored collections
    Clear {
        /// Clear favorites
        #[arg(long, action = ArgAction::SetTrue)]
        favorites: bool,

        /// Clear the watchlist
        #[arg(long, action = ArgAction::SetTrue)]
        watchlist: bool,

        /// Clear the comparison set
        #[arg(long, action = ArgAction::SetTrue)]
        comparison: bool,

        /// Clear every collection
        #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["favorites", "watchlist", "comparison"])]
        all: bool,

        /// Skip the confirmation prompt
        #[arg(short, long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum FavoritesCommands {
    /// List favorites
    List {
        /// added, title, or year
        #[arg(long, default_value = "added")]
        sort: FavoriteSort,
    },
    /// Add a title to favorites, or remove it if already there
    Toggle { id: String },
}

#[derive(Subcommand)]
enum WatchlistCommands {
    /// List the watchlist
    List {
        /// all, watched, or unwatched
        #[arg(long, default_value = "all")]
        filter: WatchlistFilter,

        /// added, title, year, or priority
        #[arg(long, default_value = "added")]
        sort: WatchlistSort,
    },
    /// Add a title (medium priority, unwatched)
    Add { id: String },
    /// Remove a title
    Remove { id: String },
    /// Add a title, or remove it if already there
    Toggle { id: String },
    /// Mark a title as watched
    Watched { id: String },
    /// Set a title's priority
    Priority {
        id: String,
        /// low, medium, or high
        priority: Priority,
    },
}

#[derive(Subcommand)]
enum CompareCommands {
    /// Show the comparison set side by side
    List,
    /// Add a title to the comparison set
    Add { id: String },
    /// Remove a title from the comparison set
    Remove { id: String },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Store the catalog API key
    SetApiKey {
        /// Prompted for when omitted
        key: Option<String>,
    },
    /// Forget the stored catalog API key
    ClearApiKey,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let ctx = AppContext::load().context("Failed to load configuration")?;

    logging::init_logging(cli.verbose, cli.quiet, ctx.config.logging.file.as_deref())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to initialize logging: {}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Search {
            query,
            kind,
            year,
            genre,
            page,
        } => {
            let filters = SearchFilters { kind, year, genre };
            search::run_search(&ctx, &query, filters, page, &output).await?;
        }
        Commands::Featured => {
            featured::run_featured(&ctx, &output).await?;
        }
        Commands::Detail { id } => {
            detail::run_detail(&ctx, &id, &output).await?;
        }
        Commands::Favorites { command } => match command {
            FavoritesCommands::List { sort } => favorites::run_list(&ctx, sort, &output)?,
            FavoritesCommands::Toggle { id } => favorites::run_toggle(&ctx, &id, &output).await?,
        },
        Commands::Watchlist { command } => match command {
            WatchlistCommands::List { filter, sort } => watchlist::run_list(&ctx, filter, sort, &output)?,
            WatchlistCommands::Add { id } => watchlist::run_add(&ctx, &id, &output).await?,
            WatchlistCommands::Remove { id } => watchlist::run_remove(&ctx, &id, &output)?,
            WatchlistCommands::Toggle { id } => watchlist::run_toggle(&ctx, &id, &output).await?,
            WatchlistCommands::Watched { id } => watchlist::run_watched(&ctx, &id, &output)?,
            WatchlistCommands::Priority { id, priority } => watchlist::run_priority(&ctx, &id, priority, &output)?,
        },
        Commands::Compare { command } => match command {
            CompareCommands::List => compare::run_list(&ctx, &output).await?,
            CompareCommands::Add { id } => compare::run_add(&ctx, &id, &output).await?,
            CompareCommands::Remove { id } => compare::run_remove(&ctx, &id, &output)?,
        },
        Commands::Share { id, platform } => {
            share::run_share(&ctx, &id, platform, &output).await?;
        }
        Commands::Theme { toggle } => {
            theme::run_theme(&ctx, toggle, &output)?;
        }
        Commands::Clear {
            favorites,
            watchlist,
            comparison,
            all,
            yes,
        } => {
            clear::run_clear(&ctx, favorites, watchlist, comparison, all, yes, &output)?;
        }
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => config::show_config(&ctx, &output)?,
            Some(ConfigCommands::SetApiKey { key }) => config::set_api_key(&ctx, key, &output)?,
            Some(ConfigCommands::ClearApiKey) => config::clear_api_key(&ctx, &output)?,
            Some(ConfigCommands::Init { force }) => config::init_config(&ctx, force, &output)?,
        },
    }

    Ok(())
}
