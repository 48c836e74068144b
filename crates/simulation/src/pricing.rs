//! Selling-price helper from the tools page.

use rust_decimal::Decimal;

/// Selling price from a unit cost and a markup percentage:
/// `cost + cost * markup_pct / 100`.
///
/// Overflow yields zero.
#[must_use]
pub fn markup_price(cost: Decimal, markup_pct: Decimal) -> Decimal {
    cost.checked_mul(markup_pct)
        .and_then(|m| m.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|markup| cost.checked_add(markup))
        .unwrap_or(Decimal::ZERO)
}
