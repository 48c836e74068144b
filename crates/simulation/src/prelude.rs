//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use ecodash_simulation::prelude::*;
//! ```

// Engine
pub use crate::engine::{calculate, growth_percent, waterfall};

// Pricing
pub use crate::pricing::markup_price;

// Projection report
pub use crate::projection::ProjectionReport;

// Scaling
pub use crate::scaling::apply_global_growth;
