use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

pub const FAVORITES_KEY: &str = "movieFavorites";
pub const WATCHLIST_KEY: &str = "movieWatchlist";
pub const COMPARISON_KEY: &str = "movieComparison";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Durable named-blob substrate. Values survive process restarts.
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory.
///
/// The directory is created on first write, so an unusable location only
/// surfaces as read/write failures that [`PersistentStore`] logs.
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.blob_path(key);

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

/// In-process substrate for tests and hosts without a filesystem.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `set` fails, as a full quota would
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_fail_writes(true);
        store
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Seed a raw value, bypassing serialization
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.blobs.lock().insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.lock().get(key).cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("storage quota exceeded"));
        }
        self.blobs.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON load/save over a [`BlobStore`]. Failures are logged and never propagated.
#[derive(Clone)]
pub struct PersistentStore {
    backend: Arc<dyn BlobStore>,
}

impl PersistentStore {
    pub fn new(backend: Arc<dyn BlobStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBlobStore::new()))
    }

    /// Stored value for `key`, or `default` when absent, unreadable, or corrupt.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Storage miss: {} (not yet written)", key);
                return default;
            }
            Err(e) => {
                warn!("Failed to read {} from storage: {}", key, e);
                return default;
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => {
                debug!("Storage hit: {}", key);
                value
            }
            Err(e) => {
                warn!("Stored value for {} is corrupt ({}), using default", key, e);
                default
            }
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize {} for storage: {}", key, e);
                return;
            }
        };

        match self.backend.set(key, &json) {
            Ok(()) => debug!("Storage saved: {}", key),
            Err(e) => warn!("Failed to write {} to storage: {}", key, e),
        }
    }
}
