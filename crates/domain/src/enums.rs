use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A two-state tag that flips between its variants.
///
/// Row statuses are stored as short string tags rather than booleans, so each
/// collection gets its own pair of tags.
pub trait Toggle: Copy {
    /// Returns the other state.
    #[must_use]
    fn toggled(self) -> Self;
}

/// Track status of a KPI row or a rock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackStatus {
    /// On track.
    #[default]
    On,
    /// Off track.
    Off,
}

impl Toggle for TrackStatus {
    fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

/// Completion status of a to-do row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    /// Not done yet.
    #[default]
    Not,
    /// Done.
    Done,
}

impl Toggle for TodoStatus {
    fn toggled(self) -> Self {
        match self {
            Self::Not => Self::Done,
            Self::Done => Self::Not,
        }
    }
}

/// Inventory health of a SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StockStatus {
    #[default]
    Good,
    Low,
    Critical,
}

/// Serde helper for stored status tags.
///
/// A missing, null, unknown or mistyped tag reads as the type's default
/// instead of failing the whole document.
pub mod lenient_tag {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tag<T> {
        Known(T),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(match Option::<Tag<T>>::deserialize(deserializer)? {
            Some(Tag::Known(tag)) => tag,
            Some(Tag::Other(_)) | None => T::default(),
        })
    }
}

/// Business division with its own KPI table and rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    Ecomm,
    Hcga,
    Live,
    Sales,
    Creative,
    Prod,
    Warehouse,
}

impl Division {
    /// All divisions in meeting order.
    pub const ALL: [Division; 7] = [
        Division::Ecomm,
        Division::Hcga,
        Division::Live,
        Division::Sales,
        Division::Creative,
        Division::Prod,
        Division::Warehouse,
    ];

    /// Short key used in ratings and issue tags.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Ecomm => "ecomm",
            Self::Hcga => "hcga",
            Self::Live => "live",
            Self::Sales => "sales",
            Self::Creative => "creative",
            Self::Prod => "prod",
            Self::Warehouse => "warehouse",
        }
    }

    /// Human-readable table title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ecomm => "E-Commerce & Retail",
            Self::Hcga => "HCGA & Finance",
            Self::Live => "Live, KOL, Affiliate",
            Self::Sales => "Sales Admin",
            Self::Creative => "Creative & Sosmed",
            Self::Prod => "Production & Purchase",
            Self::Warehouse => "Warehouse & Logistik",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Division {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Division::ALL
            .into_iter()
            .find(|d| d.key() == wanted)
            .ok_or_else(|| ParseError::UnknownDivision(s.to_string()))
    }
}

/// Display currency for projected figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indonesian rupiah.
    #[default]
    Idr,
    /// US dollar.
    Usd,
}

impl FromStr for Currency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IDR" => Ok(Self::Idr),
            "USD" => Ok(Self::Usd),
            _ => Err(ParseError::UnknownCurrency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_tag::deserialize")]
        status: TrackStatus,
        #[serde(default, deserialize_with = "lenient_tag::deserialize")]
        stock: StockStatus,
    }

    #[test]
    fn test_lenient_tag_falls_back_to_default() {
        let row = |json: &str| serde_json::from_str::<Row>(json).unwrap();
        let known = row(r#"{"status": "off", "stock": "Critical"}"#);
        assert_eq!((known.status, known.stock), (TrackStatus::Off, StockStatus::Critical));

        let odd = row(r#"{"status": 3, "stock": "Medium"}"#);
        assert_eq!((odd.status, odd.stock), (TrackStatus::On, StockStatus::Good));

        let empty = row(r#"{"status": null}"#);
        assert_eq!((empty.status, empty.stock), (TrackStatus::On, StockStatus::Good));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        for status in [TrackStatus::On, TrackStatus::Off] {
            assert_eq!(status.toggled().toggled(), status);
            assert_ne!(status.toggled(), status);
        }
        for status in [TodoStatus::Not, TodoStatus::Done] {
            assert_eq!(status.toggled().toggled(), status);
            assert_ne!(status.toggled(), status);
        }
    }

    #[test]
    fn test_status_tags_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&TrackStatus::Off).unwrap(), r#""off""#);
        assert_eq!(serde_json::to_string(&TodoStatus::Done).unwrap(), r#""done""#);
        let parsed: TodoStatus = serde_json::from_str(r#""not""#).unwrap();
        assert_eq!(parsed, TodoStatus::Not);
    }

    #[test]
    fn test_division_from_str() {
        assert_eq!("Warehouse".parse::<Division>().unwrap(), Division::Warehouse);
        assert_eq!(" hcga ".parse::<Division>().unwrap(), Division::Hcga);
        assert!("finance".parse::<Division>().is_err());
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("eur".parse::<Currency>().is_err());
    }
}
