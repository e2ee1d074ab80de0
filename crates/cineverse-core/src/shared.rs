use crate::manager::{run_search, CollectionManager};
use cineverse_catalog::CatalogClient;
use cineverse_models::SearchFilters;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable handle to one [`CollectionManager`].
///
/// Searches hold the lock only to begin and to finish, never while awaiting
/// the catalog, so overlapping searches are possible and the stale ones are
/// discarded on completion.
#[derive(Clone)]
pub struct SharedCollections {
    inner: Arc<Mutex<CollectionManager>>,
}

impl SharedCollections {
    pub fn new(manager: CollectionManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, CollectionManager> {
        self.inner.lock()
    }

    pub fn read<R>(&self, f: impl FnOnce(&CollectionManager) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut CollectionManager) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Returns whether this search's outcome was applied.
    pub async fn search(&self, catalog: &dyn CatalogClient, query: &str, filters: SearchFilters, page: u32) -> bool {
        let ticket = {
            let mut manager = self.inner.lock();
            manager.begin_search(query, filters, page)
        };
        let Some(ticket) = ticket else {
            return false;
        };

        let outcome = run_search(catalog, &ticket).await;

        let mut manager = self.inner.lock();
        manager.finish_search(&ticket, outcome)
    }
}
