use super::SnapshotStore;
use crate::error::StoreError;
use async_trait::async_trait;
use ecodash_domain::entities::EcosystemSnapshot;
use tokio::sync::RwLock;

/// Process-local store. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RwLock<Option<EcosystemSnapshot>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out holding `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: EcosystemSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Result<Option<EcosystemSnapshot>, StoreError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &EcosystemSnapshot) -> Result<(), StoreError> {
        *self.snapshot.write().await = Some(snapshot.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.snapshot.write().await = None;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
