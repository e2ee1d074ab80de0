pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{CatalogConfig, Config, LoggingConfig, ShareConfig, StorageConfig, DEFAULT_CATALOG_URL};
pub use credentials::{CredentialStore, API_KEY_ENV};
pub use paths::{PathManager, container_base_path};
