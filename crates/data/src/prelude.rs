//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use ecodash_data::prelude::*;
//! ```

pub use crate::config::{StoreBackend, StoreConfig};
pub use crate::error::StoreError;
pub use crate::repositories::Database;
pub use crate::service::{EcosystemService, SyncEvent};
pub use crate::stores::{JsonFileStore, MemoryStore, PgDocumentStore, SnapshotStore};
