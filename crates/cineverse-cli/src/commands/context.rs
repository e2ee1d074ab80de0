use cineverse_catalog::OmdbClient;
use cineverse_config::{Config, CredentialStore, PathManager};
use cineverse_core::{fetch_detail, CollectionManager, FileBlobStore, PersistentStore, ShareLinks};
use cineverse_models::{CollectionEntry, MovieSummary};
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Everything a command needs: resolved paths, validated config, and
/// factories for the store-backed collections and the catalog client.
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config = Config::load_or_default(&paths.config_file())
            .map_err(|e| eyre!("Failed to read {}: {}", paths.config_file().display(), e))?;
        config.validate().map_err(|e| eyre!("Invalid configuration: {}", e))?;
        Ok(Self { paths, config })
    }

    /// Never fails: an unusable storage directory reads as empty collections
    /// and write failures are logged by the store.
    pub fn collections(&self) -> CollectionManager {
        let dir = self.config.storage_dir(&self.paths);
        debug!("Using storage directory {}", dir.display());
        let backend = FileBlobStore::new(dir);
        CollectionManager::new(PersistentStore::new(Arc::new(backend)))
    }

    pub fn catalog(&self) -> Result<OmdbClient> {
        let mut store = CredentialStore::new(self.paths.credentials_file());
        store
            .load()
            .map_err(|e| eyre!("Failed to read credentials: {}", e))?;

        let api_key = store.resolve_catalog_api_key().ok_or_else(|| {
            eyre!("No catalog API key configured. Run `cineverse config set-api-key` or set CINEVERSE_API_KEY")
        })?;

        let catalog = &self.config.catalog;
        OmdbClient::new(
            catalog.base_url.clone(),
            api_key,
            Duration::from_secs(catalog.timeout_seconds),
            &catalog.user_agent,
        )
        .context("Failed to build catalog client")
    }

    pub fn share_links(&self) -> ShareLinks {
        ShareLinks::new(self.config.share.base_url.clone(), self.config.share.app_name.clone())
    }
}

/// The stored summary if any collection already holds `id`, otherwise a
/// fresh lookup against the catalog.
pub async fn resolve_movie(ctx: &AppContext, manager: &CollectionManager, id: &str) -> Result<MovieSummary> {
    if let Some(movie) = stored_movie(manager, id) {
        return Ok(movie);
    }
    let catalog = ctx.catalog()?;
    let detail = fetch_detail(&catalog, id).await.map_err(|e| eyre!("{}", e))?;
    Ok(detail.summary())
}

fn stored_movie(manager: &CollectionManager, id: &str) -> Option<MovieSummary> {
    manager
        .favorites()
        .iter()
        .map(|e| e.movie())
        .chain(manager.watchlist().iter().map(|e| e.movie()))
        .chain(manager.comparison().iter().map(|e| e.movie()))
        .find(|m| m.id == id)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineverse_models::MovieKind;

    #[test]
    fn test_stored_movie_searches_every_collection() {
        let mut manager = CollectionManager::new(PersistentStore::in_memory());
        let favorite = MovieSummary::new("tt1", "Alien", "1979", MovieKind::Movie);
        let queued = MovieSummary::new("tt2", "Aliens", "1986", MovieKind::Movie);
        let compared = MovieSummary::new("tt3", "Alien 3", "1992", MovieKind::Movie);
        manager.toggle_favorite(&favorite);
        manager.add_to_watchlist(&queued);
        manager.add_to_comparison(&compared);

        assert_eq!(stored_movie(&manager, "tt1"), Some(favorite));
        assert_eq!(stored_movie(&manager, "tt2"), Some(queued));
        assert_eq!(stored_movie(&manager, "tt3"), Some(compared));
        assert_eq!(stored_movie(&manager, "tt4"), None);
    }
}
