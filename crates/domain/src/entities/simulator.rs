use crate::numeric::lenient;
use crate::value_objects::MetricSet;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed spend recorded next to a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingCosts {
    #[serde(default, with = "lenient")]
    pub marketing: Decimal,
    #[serde(default, with = "lenient")]
    pub fixed_cost: Decimal,
}

impl Default for OperatingCosts {
    fn default() -> Self {
        Self {
            marketing: Decimal::from(5_000_000),
            fixed_cost: Decimal::from(15_000_000),
        }
    }
}

/// Stored input of the growth simulator: a current and a target state.
///
/// Written back verbatim on save; results are always recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorState {
    pub current: MetricSet,
    pub target: MetricSet,
    pub costs: OperatingCosts,
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self {
            current: MetricSet::new(
                Decimal::from(1_000),
                Decimal::from(10),
                Decimal::from(2),
                Decimal::from(100_000),
                Decimal::from(25),
            ),
            target: MetricSet::new(
                Decimal::from(1_100),
                Decimal::from(11),
                Decimal::new(22, 1),   // 2.2
                Decimal::from(110_000),
                Decimal::new(275, 1),  // 27.5
            ),
            costs: OperatingCosts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_targets() {
        let state = SimulatorState::default();
        assert_eq!(state.target.trans, dec!(2.2));
        assert_eq!(state.target.margin, dec!(27.5));
        assert_eq!(state.costs.fixed_cost, dec!(15000000));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(SimulatorState::default()).unwrap();
        assert_eq!(json["current"]["leads"], 1000);
        assert_eq!(json["target"]["trans"], 2.2);
        assert_eq!(json["costs"]["fixedCost"], 15_000_000);
    }
}
