//! JSONB document repository.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

/// Database record for one stored document.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// Document key.
    pub id: String,
    /// Document body.
    pub body: serde_json::Value,
    /// Last write timestamp.
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl DocumentRecord {
    /// Creates a DocumentRecord from a database row.
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            body: row.try_get("body")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Repository for the `ecosystem_documents` table.
#[derive(Clone)]
pub struct DocumentRepository {
    pool: Arc<PgPool>,
}

impl DocumentRepository {
    /// Creates a new DocumentRepository.
    #[must_use]
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Creates the document, or merges `body` into the stored one.
    ///
    /// The merge is shallow: top-level keys in `body` replace the stored
    /// keys of the same name, other stored keys are kept.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn merge(
        &self,
        id: &str,
        body: &serde_json::Value,
    ) -> Result<DocumentRecord, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO ecosystem_documents (id, body, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (id) DO UPDATE SET
                body = ecosystem_documents.body || EXCLUDED.body,
                updated_at = NOW()
            RETURNING id, body, updated_at
            "#,
        )
        .bind(id)
        .bind(body)
        .fetch_one(self.pool.as_ref())
        .await?;
        DocumentRecord::from_row(&row)
    }

    /// Finds a document by ID.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<DocumentRecord>, sqlx::Error> {
        let row = sqlx::query("SELECT id, body, updated_at FROM ecosystem_documents WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        row.as_ref().map(DocumentRecord::from_row).transpose()
    }

    /// Deletes a document. Returns whether a row was removed.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ecosystem_documents WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
