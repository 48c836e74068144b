//! Persistence for the ecosystem dashboard.
//!
//! This crate provides:
//! - The [`stores::SnapshotStore`] interface with memory, JSON file and PostgreSQL backends
//! - Database repositories for the JSONB document table
//! - Store selection from environment variables
//! - [`service::EcosystemService`], the dashboard operations on top of a store

/// Store configuration.
pub mod config;
/// Storage errors.
pub mod error;
/// Prelude module for convenient imports.
pub mod prelude;
/// Database repositories.
pub mod repositories;
/// Dashboard service.
pub mod service;
/// Snapshot store backends.
pub mod stores;

pub use error::StoreError;
