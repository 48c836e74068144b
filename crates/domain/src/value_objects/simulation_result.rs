use crate::numeric::lenient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures derived from one [`MetricSet`](super::MetricSet).
///
/// Never stored; recomputed from the metric set on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Whole customers acquired from the leads.
    #[serde(default, with = "lenient")]
    pub customers: Decimal,
    /// Gross revenue.
    #[serde(default, with = "lenient")]
    pub revenue: Decimal,
    /// Profit after margin.
    #[serde(default, with = "lenient")]
    pub profit: Decimal,
}
