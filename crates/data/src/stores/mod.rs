//! Snapshot storage backends.
//!
//! Every backend persists the whole [`EcosystemSnapshot`] as one document:
//! - [`MemoryStore`] keeps it in process memory
//! - [`JsonFileStore`] writes a pretty-printed JSON file
//! - [`PgDocumentStore`] stores a JSONB row in PostgreSQL

mod file;
mod memory;
mod postgres;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use postgres::{DEFAULT_DOCUMENT_ID, PgDocumentStore};

use crate::error::StoreError;
use async_trait::async_trait;
use ecodash_domain::entities::EcosystemSnapshot;

/// Key-value style persistence for the ecosystem snapshot.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads the stored snapshot, `None` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<EcosystemSnapshot>, StoreError>;

    /// Persists `snapshot`, replacing what was stored.
    async fn save(&self, snapshot: &EcosystemSnapshot) -> Result<(), StoreError>;

    /// Removes the stored snapshot.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}
