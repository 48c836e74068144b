//! Side-by-side projection of a current and a target state.

use crate::engine::{calculate, growth_percent, waterfall};
use ecodash_domain::numeric::lenient;
use ecodash_domain::value_objects::{MetricSet, SimulationResult, WaterfallStep};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Everything the simulator page shows for one current/target pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    /// Figures for the current state.
    pub current: SimulationResult,
    /// Figures for the target state.
    pub target: SimulationResult,
    /// Profit growth in percent.
    #[serde(serialize_with = "lenient::serialize")]
    pub growth_percent: Decimal,
    /// Seven-bar attribution of the profit change.
    pub waterfall: Vec<WaterfallStep>,
    /// Target profit in millions, one decimal place.
    #[serde(serialize_with = "lenient::serialize")]
    pub score_index: Decimal,
}

impl ProjectionReport {
    /// Builds the report from the two metric sets.
    #[must_use]
    pub fn build(current: &MetricSet, target: &MetricSet) -> Self {
        let current_result = calculate(current);
        let target_result = calculate(target);

        Self {
            growth_percent: growth_percent(&current_result, &target_result),
            waterfall: waterfall(current, target),
            score_index: score_index(&target_result),
            current: current_result,
            target: target_result,
        }
    }

    /// Absolute profit change.
    #[must_use]
    pub fn profit_lift(&self) -> Decimal {
        self.target
            .profit
            .checked_sub(self.current.profit)
            .unwrap_or(Decimal::ZERO)
    }
}

fn score_index(target: &SimulationResult) -> Decimal {
    (target.profit / Decimal::from(1_000_000))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_report_for_default_pair() {
        let current = MetricSet::new(dec!(1000), dec!(10), dec!(2), dec!(100000), dec!(25));
        let target = MetricSet::new(dec!(1100), dec!(11), dec!(2.2), dec!(110000), dec!(27.5));
        let report = ProjectionReport::build(&current, &target);

        assert_eq!(report.current.profit, dec!(5000000));
        assert_eq!(report.target.profit, dec!(8052550));
        assert_eq!(report.growth_percent, dec!(61.051));
        assert_eq!(report.profit_lift(), dec!(3052550));
        assert_eq!(report.score_index, dec!(8.1));
        assert_eq!(report.waterfall.len(), 7);
    }

    #[test]
    fn test_report_serializes_numbers() {
        let set = MetricSet::new(dec!(1000), dec!(10), dec!(2), dec!(100000), dec!(25));
        let json = serde_json::to_value(ProjectionReport::build(&set, &set)).unwrap();
        assert_eq!(json["growthPercent"], 0);
        assert_eq!(json["current"]["profit"], 5_000_000);
        assert_eq!(json["waterfall"][0]["label"], "Baseline");
    }
}
