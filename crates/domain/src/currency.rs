//! Currency formatting for projected figures.

use crate::enums::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

impl Currency {
    /// Symbol printed before the amount.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Idr => "Rp",
            Self::Usd => "US$",
        }
    }

    /// Formats a whole-unit amount with Indonesian digit grouping,
    /// e.g. `Rp 5.000.000` or `-US$ 1.250`.
    #[must_use]
    pub fn format(self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().trunc().to_string();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{} {}", self.symbol(), group_thousands(&digits, '.'))
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_idr_groups_thousands() {
        assert_eq!(Currency::Idr.format(dec!(5000000)), "Rp 5.000.000");
        assert_eq!(Currency::Idr.format(dec!(999)), "Rp 999");
        assert_eq!(Currency::Idr.format(dec!(0)), "Rp 0");
    }

    #[test]
    fn test_format_rounds_to_whole_units() {
        assert_eq!(Currency::Usd.format(dec!(1234.5)), "US$ 1.235");
        assert_eq!(Currency::Idr.format(dec!(-1250.4)), "-Rp 1.250");
        assert_eq!(Currency::Idr.format(dec!(-0.4)), "Rp 0");
    }
}
