//! Uniform scaling of every driver.

use ecodash_domain::value_objects::{Driver, MetricSet};
use rust_decimal::{Decimal, RoundingStrategy};

/// Derives a target by growing every current driver by `growth_pct` percent.
///
/// Leads and ticket size are rounded to whole units; conversion, frequency
/// and margin keep two decimal places. Midpoints round away from zero.
#[must_use]
pub fn apply_global_growth(current: &MetricSet, growth_pct: Decimal) -> MetricSet {
    let multiplier = Decimal::ONE
        + growth_pct
            .checked_div(Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::ZERO);

    Driver::ORDER.into_iter().fold(*current, |target, driver| {
        let scaled = current
            .get(driver)
            .checked_mul(multiplier)
            .unwrap_or(Decimal::ZERO);
        let places = if driver.is_whole() { 0 } else { 2 };
        target.with(
            driver,
            scaled.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ten_percent_growth_matches_default_target() {
        let current = MetricSet::new(dec!(1000), dec!(10), dec!(2), dec!(100000), dec!(25));
        let target = apply_global_growth(&current, dec!(10));
        assert_eq!(
            target,
            MetricSet::new(dec!(1100), dec!(11), dec!(2.2), dec!(110000), dec!(27.5))
        );
    }

    #[test]
    fn test_rounding_per_driver() {
        let current = MetricSet::new(dec!(333), dec!(3.333), dec!(1.005), dec!(999), dec!(12.345));
        let target = apply_global_growth(&current, dec!(5));
        // 333 * 1.05 = 349.65 -> 350; 999 * 1.05 = 1048.95 -> 1049
        assert_eq!(target.leads, dec!(350));
        assert_eq!(target.sale, dec!(1049));
        // 3.333 * 1.05 = 3.49965 -> 3.50
        assert_eq!(target.conv, dec!(3.50));
        // 1.005 * 1.05 = 1.05525 -> 1.06
        assert_eq!(target.trans, dec!(1.06));
        // 12.345 * 1.05 = 12.96225 -> 12.96
        assert_eq!(target.margin, dec!(12.96));
    }

    #[test]
    fn test_zero_growth_keeps_current() {
        let current = MetricSet::new(dec!(1000), dec!(10), dec!(2), dec!(100000), dec!(25));
        assert_eq!(apply_global_growth(&current, Decimal::ZERO), current);
    }

    #[test]
    fn test_negative_growth_shrinks() {
        let current = MetricSet::new(dec!(1000), dec!(10), dec!(2), dec!(100000), dec!(25));
        let target = apply_global_growth(&current, dec!(-50));
        assert_eq!(target.leads, dec!(500));
        assert_eq!(target.margin, dec!(12.5));
    }
}
