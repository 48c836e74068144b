use super::SnapshotStore;
use crate::error::StoreError;
use crate::repositories::DocumentRepository;
use async_trait::async_trait;
use ecodash_domain::entities::EcosystemSnapshot;
use tracing::{debug, error};

/// Default document key.
pub const DEFAULT_DOCUMENT_ID: &str = "ecosystem";

/// Keeps the snapshot as one JSONB document in PostgreSQL.
///
/// Saves merge top-level keys into the stored document; the last write
/// wins per key.
#[derive(Clone)]
pub struct PgDocumentStore {
    documents: DocumentRepository,
    document_id: String,
}

impl PgDocumentStore {
    #[must_use]
    pub fn new(documents: DocumentRepository, document_id: impl Into<String>) -> Self {
        Self {
            documents,
            document_id: document_id.into(),
        }
    }

    #[must_use]
    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}

#[async_trait]
impl SnapshotStore for PgDocumentStore {
    async fn load(&self) -> Result<Option<EcosystemSnapshot>, StoreError> {
        let Some(record) = self.documents.find_by_id(&self.document_id).await? else {
            return Ok(None);
        };
        debug!(id = %record.id, updated_at = %record.updated_at, "loaded document");
        serde_json::from_value(record.body).map(Some).map_err(|e| {
            error!(id = %self.document_id, error = %e, "stored document has an unexpected shape");
            StoreError::Decode {
                location: format!("ecosystem_documents/{}", self.document_id),
                source: e,
            }
        })
    }

    async fn save(&self, snapshot: &EcosystemSnapshot) -> Result<(), StoreError> {
        let body = serde_json::to_value(snapshot)?;
        self.documents.merge(&self.document_id, &body).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.documents.delete(&self.document_id).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
