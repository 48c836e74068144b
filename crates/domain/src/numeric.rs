//! Lenient numeric coercion.
//!
//! Figures reach the dashboard as free-form text typed into a form or as
//! loosely typed JSON written by older snapshots. None of them is allowed to
//! fail a calculation: anything that does not read as a number becomes zero.

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use std::sync::LazyLock;

/// Leading numeric prefix, the same prefix a browser's `parseFloat` accepts.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

/// Parses the leading number in `raw`.
///
/// Surrounding whitespace and trailing non-numeric text are ignored, so
/// `" 25% "` reads as `25`. Returns `None` when there is no leading number
/// or it does not fit in a `Decimal`.
#[must_use]
pub fn parse(raw: &str) -> Option<Decimal> {
    let matched = NUMERIC_PREFIX.find(raw.trim())?.as_str();
    Decimal::from_str(matched)
        .or_else(|_| Decimal::from_scientific(matched))
        .ok()
}

/// Parses free-form numeric text, falling back to zero.
#[must_use]
pub fn coerce(raw: &str) -> Decimal {
    parse(raw).unwrap_or(Decimal::ZERO)
}

/// Converts a float, mapping NaN, infinities and out-of-range values to zero.
#[must_use]
pub fn from_f64_or_zero(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    // f64 Display is the shortest round-trip form, so 2.2 stays 2.2.
    coerce(&value.to_string())
}

/// Serde adapter for persisted figures.
///
/// Serializes as a JSON number (an integer when the value is integral) and
/// deserializes from numbers, numeric strings or anything else, the latter
/// coerced to zero. Pair with `#[serde(default)]` so missing fields are zero
/// as well.
pub mod lenient {
    use super::{coerce, from_f64_or_zero};
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Int(i64),
        Float(f64),
        Text(String),
        Other(IgnoredAny),
    }

    /// Writes a decimal as a JSON number.
    ///
    /// Values a JSON number cannot carry exactly (integers beyond `i64`,
    /// fractions with more digits than an `f64` holds) are written as
    /// numeric strings, which [`deserialize`] reads back unchanged.
    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.fract().is_zero() {
            if let Some(int) = value.to_i64() {
                return serializer.serialize_i64(int);
            }
        } else if let Some(float) = value.to_f64() {
            if from_f64_or_zero(float) == *value {
                return serializer.serialize_f64(float);
            }
        }
        serializer.serialize_str(&value.normalize().to_string())
    }

    /// Reads a decimal, coercing anything non-numeric to zero.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = Option::<Loose>::deserialize(deserializer)?;
        Ok(match parsed {
            Some(Loose::Int(v)) => Decimal::from(v),
            Some(Loose::Float(v)) => from_f64_or_zero(v),
            Some(Loose::Text(s)) => coerce(&s),
            Some(Loose::Other(_)) | None => Decimal::ZERO,
        })
    }
}

/// Serde adapter for stored whole counts such as stock levels.
///
/// Reads anything [`lenient`] reads, dropping the fraction; negative or
/// oversized values become zero.
pub mod lenient_count {
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = super::lenient::deserialize(deserializer)?;
        Ok(value.trunc().to_u32().unwrap_or(0))
    }
}

/// Serializes a `[start, end]` pair of decimals as two JSON numbers.
pub fn serialize_pair<S>(pair: &[Decimal; 2], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeTuple;

    struct Number<'a>(&'a Decimal);

    impl serde::Serialize for Number<'_> {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            lenient::serialize(self.0, serializer)
        }
    }

    let mut tuple = serializer.serialize_tuple(2)?;
    tuple.serialize_element(&Number(&pair[0]))?;
    tuple.serialize_element(&Number(&pair[1]))?;
    tuple.end()
}
