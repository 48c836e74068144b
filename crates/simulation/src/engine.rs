//! Growth projection engine.
//!
//! Closed-form profit model:
//!
//! ```text
//! customers = floor(leads * conv / 100)
//! revenue   = customers * trans * sale
//! profit    = revenue * margin / 100
//! ```
//!
//! Every function here is pure and infallible. Arithmetic overflow degrades
//! the affected figure to zero instead of failing.

use ecodash_domain::value_objects::{Driver, MetricSet, SimulationResult, WaterfallStep};
use rust_decimal::Decimal;

/// Label of the first waterfall bar.
pub const BASELINE_LABEL: &str = "Baseline";
/// Label of the last waterfall bar.
pub const PROJECTED_LABEL: &str = "Projected";

/// Computes customers, revenue and profit for one metric set.
#[must_use]
pub fn calculate(metrics: &MetricSet) -> SimulationResult {
    let customers = mul(metrics.leads, percent(metrics.conv)).floor();
    let revenue = mul(mul(customers, metrics.trans), metrics.sale);
    let profit = mul(revenue, percent(metrics.margin));

    SimulationResult {
        customers,
        revenue,
        profit,
    }
}

/// Relative profit change from `current` to `target`, in percent.
///
/// Zero when the current profit is not positive, which also rules out a
/// division by zero.
#[must_use]
pub fn growth_percent(current: &SimulationResult, target: &SimulationResult) -> Decimal {
    if current.profit <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    target
        .profit
        .checked_sub(current.profit)
        .and_then(|diff| diff.checked_div(current.profit))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Attributes the profit change between two states to each driver.
///
/// Returns seven bars: the baseline total, one bar per driver in
/// [`Driver::ORDER`], and the projected total. Each driver bar swaps that
/// driver to its target value on top of the drivers already swapped, so the
/// driver deltas sum to exactly `target profit - current profit`.
#[must_use]
pub fn waterfall(current: &MetricSet, target: &MetricSet) -> Vec<WaterfallStep> {
    let base = calculate(current).profit;

    let mut steps = Vec::with_capacity(Driver::ORDER.len() + 2);
    steps.push(WaterfallStep::total(BASELINE_LABEL, base));

    let mut blended = *current;
    let mut previous = base;
    for driver in Driver::ORDER {
        blended = blended.with(driver, target.get(driver));
        let profit = calculate(&blended).profit;
        steps.push(WaterfallStep::driver(driver.label(), previous, profit));
        previous = profit;
    }

    steps.push(WaterfallStep::total(PROJECTED_LABEL, calculate(target).profit));
    steps
}

fn percent(value: Decimal) -> Decimal {
    value
        .checked_div(Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO)
}

fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn current() -> MetricSet {
        MetricSet::new(dec!(1000), dec!(10), dec!(2), dec!(100000), dec!(25))
    }

    fn target() -> MetricSet {
        MetricSet::new(dec!(1100), dec!(11), dec!(2.2), dec!(110000), dec!(27.5))
    }

    #[test]
    fn test_calculate_reference_case() {
        let result = calculate(&current());
        assert_eq!(result.customers, dec!(100));
        assert_eq!(result.revenue, dec!(20000000));
        assert_eq!(result.profit, dec!(5000000));
    }

    #[test]
    fn test_calculate_floors_customers() {
        // 999 * 10% = 99.9 customers, floored to 99.
        let set = current().with(Driver::Leads, dec!(999));
        assert_eq!(calculate(&set).customers, dec!(99));
    }

    #[test]
    fn test_calculate_propagates_negative_inputs() {
        let set = current().with(Driver::Margin, dec!(-10));
        assert_eq!(calculate(&set).profit, dec!(-2000000));
    }

    #[test]
    fn test_calculate_overflow_degrades_to_zero() {
        let huge = Decimal::MAX;
        let set = MetricSet::new(huge, dec!(100), huge, huge, dec!(100));
        let result = calculate(&set);
        assert_eq!(result.revenue, Decimal::ZERO);
        assert_eq!(result.profit, Decimal::ZERO);
    }

    #[test]
    fn test_calculate_is_pure() {
        let set = target();
        assert_eq!(calculate(&set), calculate(&set));
        assert_eq!(set, target());
    }

    #[test]
    fn test_growth_percent() {
        let c = calculate(&current());
        let t = calculate(&target());
        // 121 customers * 2.2 * 110000 * 27.5% = 8,052,550; up 61.051%.
        assert_eq!(t.profit, dec!(8052550));
        assert_eq!(growth_percent(&c, &t), dec!(61.051));
    }

    #[test]
    fn test_growth_percent_zero_without_positive_baseline() {
        let t = calculate(&target());
        let zero = SimulationResult::default();
        let negative = SimulationResult {
            profit: dec!(-5),
            ..SimulationResult::default()
        };
        assert_eq!(growth_percent(&zero, &t), Decimal::ZERO);
        assert_eq!(growth_percent(&negative, &t), Decimal::ZERO);
    }

    #[test]
    fn test_waterfall_shape() {
        let steps = waterfall(&current(), &target());
        let labels: Vec<_> = steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Baseline", "Leads", "Conv.", "Freq.", "Ticket", "Margin", "Projected"]
        );
        assert_eq!(steps[0].delta, dec!(5000000));
        assert_eq!(steps[6].range, [Decimal::ZERO, dec!(8052550)]);
        assert!(steps[0].is_total() && steps[6].is_total());
    }

    #[test]
    fn test_waterfall_steps_chain() {
        let steps = waterfall(&current(), &target());
        for pair in steps[1..6].windows(2) {
            assert_eq!(pair[0].range[1], pair[1].range[0]);
        }
        assert_eq!(steps[1].range[0], steps[0].range[1]);
        assert_eq!(steps[5].range[1], steps[6].range[1]);
        // Leads only: 110 customers * 2 * 100000 * 25% = 5,500,000.
        assert_eq!(steps[1].range, [dec!(5000000), dec!(5500000)]);
    }

    #[test]
    fn test_waterfall_identical_states_are_flat() {
        let steps = waterfall(&current(), &current());
        assert!(steps[1..6].iter().all(|s| s.delta.is_zero()));
    }

    fn metric_set() -> impl Strategy<Value = MetricSet> {
        (
            0i64..200_000,
            0i64..10_000,
            0i64..500,
            0i64..50_000_000,
            -5_000i64..10_000,
        )
            .prop_map(|(leads, conv, trans, sale, margin)| {
                MetricSet::new(
                    Decimal::from(leads),
                    Decimal::new(conv, 2),
                    Decimal::new(trans, 1),
                    Decimal::from(sale),
                    Decimal::new(margin, 2),
                )
            })
    }

    proptest! {
        #[test]
        fn waterfall_always_has_seven_steps(c in metric_set(), t in metric_set()) {
            prop_assert_eq!(waterfall(&c, &t).len(), 7);
        }

        #[test]
        fn driver_deltas_account_for_total_change(c in metric_set(), t in metric_set()) {
            let steps = waterfall(&c, &t);
            let attributed: Decimal = steps[1..6].iter().map(|s| s.delta).sum();
            prop_assert_eq!(attributed, calculate(&t).profit - calculate(&c).profit);
            prop_assert_eq!(steps[0].delta, calculate(&c).profit);
            prop_assert_eq!(steps[6].range, [Decimal::ZERO, calculate(&t).profit]);
        }

        #[test]
        fn no_leads_or_no_conversion_means_no_profit(set in metric_set(), zero_leads in any::<bool>()) {
            let driver = if zero_leads { Driver::Leads } else { Driver::Conversion };
            let result = calculate(&set.with(driver, Decimal::ZERO));
            prop_assert_eq!(result.customers, Decimal::ZERO);
            prop_assert_eq!(result.profit, Decimal::ZERO);
        }

        #[test]
        fn growth_is_zero_for_non_positive_baseline(
            profit in -1_000_000i64..=0,
            t in metric_set(),
        ) {
            let current = SimulationResult { profit: Decimal::from(profit), ..SimulationResult::default() };
            prop_assert_eq!(growth_percent(&current, &calculate(&t)), Decimal::ZERO);
        }
    }
}
