//! Growth projection engine.
//!
//! Pure calculations behind the growth simulator:
//! - Profit, revenue and customer counts for a metric set
//! - Percentage growth between two states
//! - Step-wise ("waterfall") attribution of the profit change to each driver
//! - Uniform scaling of a current state into a target
//! - Markup pricing

/// Prelude module for convenient imports.
pub mod prelude;

/// Profit model and waterfall attribution.
pub mod engine;
/// Markup pricing.
pub mod pricing;
/// Current versus target report.
pub mod projection;
/// Uniform driver scaling.
pub mod scaling;
