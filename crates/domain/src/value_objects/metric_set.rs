use crate::error::ParseError;
use crate::numeric::{self, lenient};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One business state: the five drivers of profit.
///
/// Used for both the current and the target side of a projection. Missing or
/// non-numeric fields read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricSet {
    /// Prospect leads per period.
    #[serde(default, with = "lenient")]
    pub leads: Decimal,
    /// Lead-to-customer conversion, in percent.
    #[serde(default, with = "lenient")]
    pub conv: Decimal,
    /// Transactions per customer.
    #[serde(default, with = "lenient")]
    pub trans: Decimal,
    /// Average sale value per transaction.
    #[serde(default, with = "lenient")]
    pub sale: Decimal,
    /// Profit margin, in percent.
    #[serde(default, with = "lenient")]
    pub margin: Decimal,
}

impl MetricSet {
    /// Creates a metric set from its five drivers.
    #[must_use]
    pub fn new(leads: Decimal, conv: Decimal, trans: Decimal, sale: Decimal, margin: Decimal) -> Self {
        Self {
            leads,
            conv,
            trans,
            sale,
            margin,
        }
    }

    /// Returns the value of one driver.
    #[must_use]
    pub fn get(&self, driver: Driver) -> Decimal {
        match driver {
            Driver::Leads => self.leads,
            Driver::Conversion => self.conv,
            Driver::Frequency => self.trans,
            Driver::Ticket => self.sale,
            Driver::Margin => self.margin,
        }
    }

    /// Returns a copy with one driver replaced.
    #[must_use]
    pub fn with(mut self, driver: Driver, value: Decimal) -> Self {
        match driver {
            Driver::Leads => self.leads = value,
            Driver::Conversion => self.conv = value,
            Driver::Frequency => self.trans = value,
            Driver::Ticket => self.sale = value,
            Driver::Margin => self.margin = value,
        }
        self
    }

    /// Returns a copy with one driver replaced by free-form input, coerced
    /// to zero when it is not a number.
    #[must_use]
    pub fn with_raw(self, driver: Driver, raw: &str) -> Self {
        self.with(driver, numeric::coerce(raw))
    }
}

/// A profit driver, in the order the waterfall attributes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Driver {
    Leads,
    Conversion,
    Frequency,
    Ticket,
    Margin,
}

impl Driver {
    /// Attribution order: leads, conversion, frequency, ticket, margin.
    pub const ORDER: [Driver; 5] = [
        Driver::Leads,
        Driver::Conversion,
        Driver::Frequency,
        Driver::Ticket,
        Driver::Margin,
    ];

    /// Field name in a stored metric set.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Leads => "leads",
            Self::Conversion => "conv",
            Self::Frequency => "trans",
            Self::Ticket => "sale",
            Self::Margin => "margin",
        }
    }

    /// Short chart label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Leads => "Leads",
            Self::Conversion => "Conv.",
            Self::Frequency => "Freq.",
            Self::Ticket => "Ticket",
            Self::Margin => "Margin",
        }
    }

    /// Whether the driver is a whole count or currency amount rather than a
    /// ratio.
    #[must_use]
    pub fn is_whole(self) -> bool {
        matches!(self, Self::Leads | Self::Ticket)
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Driver {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Driver::ORDER
            .into_iter()
            .find(|d| d.key() == wanted)
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> MetricSet {
        MetricSet::new(dec!(1000), dec!(10), dec!(2), dec!(100000), dec!(25))
    }

    #[test]
    fn test_get_and_with_cover_every_driver() {
        let base = sample();
        for driver in Driver::ORDER {
            let changed = base.with(driver, dec!(7));
            assert_eq!(changed.get(driver), dec!(7));
            for other in Driver::ORDER.into_iter().filter(|d| *d != driver) {
                assert_eq!(changed.get(other), base.get(other));
            }
        }
    }

    #[test]
    fn test_with_raw_coerces_garbage_to_zero() {
        let set = sample().with_raw(Driver::Margin, "abc");
        assert_eq!(set.margin, Decimal::ZERO);

        let set = sample().with_raw(Driver::Frequency, "2.5x");
        assert_eq!(set.trans, dec!(2.5));
    }

    #[test]
    fn test_deserialize_sanitizes_fields() {
        let json = r#"{"leads": "1100", "conv": null, "trans": 2.2, "margin": "n/a"}"#;
        let set: MetricSet = serde_json::from_str(json).unwrap();
        assert_eq!(set, MetricSet::new(dec!(1100), dec!(0), dec!(2.2), dec!(0), dec!(0)));
    }

    #[test]
    fn test_driver_keys_round_trip() {
        for driver in Driver::ORDER {
            assert_eq!(driver.key().parse::<Driver>().unwrap(), driver);
        }
        assert!("profit".parse::<Driver>().is_err());
    }
}
