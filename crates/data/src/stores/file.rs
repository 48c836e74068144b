use super::SnapshotStore;
use crate::error::StoreError;
use async_trait::async_trait;
use ecodash_domain::entities::EcosystemSnapshot;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

/// Stores the snapshot in a single JSON file.
///
/// Writes go to `<file>.tmp` first and are renamed over the target, so a
/// crash mid-write leaves the previous file intact. A file that is not JSON
/// at all is reported and treated as empty; valid JSON of the wrong shape is
/// an error and is never overwritten.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> Result<Option<EcosystemSnapshot>, StoreError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        let value: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt data file, ignoring it");
                return Ok(None);
            }
        };
        match serde_json::from_value(value) {
            Ok(snapshot) => {
                debug!(path = %self.path.display(), "loaded snapshot");
                Ok(Some(snapshot))
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "data file has an unexpected shape");
                Err(StoreError::Decode {
                    location: self.path.display().to_string(),
                    source: e,
                })
            }
        }
    }

    async fn save(&self, snapshot: &EcosystemSnapshot) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(snapshot)?;
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, text)
            .await
            .map_err(|e| StoreError::io(&temp, e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
