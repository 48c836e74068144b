//! Store selection from environment variables.

use crate::error::StoreError;
use crate::repositories::Database;
use crate::stores::{JsonFileStore, MemoryStore, PgDocumentStore, SnapshotStore};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Selects the backend: `memory`, `file` or `postgres`.
pub const STORE_VAR: &str = "ECODASH_STORE";
/// Path of the JSON data file.
pub const DATA_FILE_VAR: &str = "ECODASH_DATA_FILE";
/// PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Key of the stored document.
pub const DOCUMENT_ID_VAR: &str = "ECODASH_DOCUMENT_ID";

/// Default JSON data file.
pub const DEFAULT_DATA_FILE: &str = "ecosystem_data.json";

/// Available storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    Memory,
    #[default]
    File,
    Postgres,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Memory => "memory",
            Self::File => "file",
            Self::Postgres => "postgres",
        })
    }
}

impl FromStr for StoreBackend {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            other => Err(StoreError::Config(format!("unknown store backend '{other}'"))),
        }
    }
}

/// Where and how the snapshot is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub data_file: PathBuf,
    pub database_url: Option<String>,
    pub document_id: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            database_url: None,
            document_id: crate::stores::DEFAULT_DOCUMENT_ID.to_string(),
        }
    }
}

impl StoreConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if `ECODASH_STORE` names an unknown backend.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; unset or blank keys keep
    /// their defaults.
    ///
    /// # Errors
    /// Returns an error if the backend name is unknown.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(backend) = get(STORE_VAR) {
            config.backend = backend.parse()?;
        }
        if let Some(path) = get(DATA_FILE_VAR) {
            config.data_file = PathBuf::from(path);
        }
        config.database_url = get(DATABASE_URL_VAR);
        if let Some(id) = get(DOCUMENT_ID_VAR) {
            config.document_id = id;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Opens the configured backend. PostgreSQL stores are migrated first.
    ///
    /// # Errors
    /// Returns an error if `postgres` is selected without a database URL, or
    /// if connecting or migrating fails.
    pub async fn open(&self) -> Result<Box<dyn SnapshotStore>, StoreError> {
        info!(backend = %self.backend, "opening snapshot store");
        match self.backend {
            StoreBackend::Memory => Ok(Box::new(MemoryStore::new())),
            StoreBackend::File => Ok(Box::new(JsonFileStore::new(&self.data_file))),
            StoreBackend::Postgres => {
                let url = self.database_url.as_deref().ok_or_else(|| {
                    StoreError::Config(format!("{DATABASE_URL_VAR} is required for postgres"))
                })?;
                let db = Database::connect(url).await?;
                db.migrate().await?;
                Ok(Box::new(PgDocumentStore::new(
                    db.documents(),
                    self.document_id.clone(),
                )))
            }
        }
    }
}
