use std::path::PathBuf;

/// Failure of a snapshot store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the data file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The snapshot could not be encoded.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// A stored snapshot exists but does not have the expected shape. It is
    /// left untouched.
    #[error("Stored snapshot at {location} could not be read: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },
    /// The document database rejected the request.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// The store settings are incomplete or invalid.
    #[error("Invalid store configuration: {0}")]
    Config(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
