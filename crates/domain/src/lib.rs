//! Core types for the ecosystem dashboard.
//!
//! This crate holds the plain data the rest of the workspace computes on:
//! - Value objects for growth projections (metric sets, results, waterfall bars)
//! - Entities persisted in the ecosystem snapshot (dashboard metrics, meeting record, simulator state)
//! - Status tags and divisions
//! - Lenient numeric coercion and currency formatting

/// Currency formatting.
pub mod currency;
/// Daily report text extraction.
pub mod daily_report;
/// Persisted entities.
pub mod entities;
/// Status tags, divisions and currencies.
pub mod enums;
/// Identifier parse errors.
pub mod error;
/// Lenient numeric coercion and serde adapters.
pub mod numeric;
/// Projection value objects.
pub mod value_objects;

pub use error::ParseError;
