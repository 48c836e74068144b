use crate::enums::{StockStatus, lenient_tag};
use crate::error::ParseError;
use crate::numeric::{lenient, lenient_count};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Headline sales figures shown on the dashboard overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Gross merchandise value.
    #[serde(default, with = "lenient")]
    pub gmv: Decimal,
    #[serde(default, with = "lenient")]
    pub net_sales: Decimal,
    #[serde(default, with = "lenient")]
    pub profit: Decimal,
    #[serde(default, with = "lenient")]
    pub sold_items: Decimal,
    /// Average discount, in percent.
    #[serde(default, with = "lenient")]
    pub discount_rate: Decimal,
    /// Return rate, in percent.
    #[serde(default, with = "lenient")]
    pub return_rate: Decimal,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            gmv: Decimal::from(165_000_000),
            net_sales: Decimal::from(135_000_000),
            profit: Decimal::from(55_000_000),
            sold_items: Decimal::from(1_340),
            discount_rate: Decimal::from(18),
            return_rate: Decimal::from(3),
        }
    }
}

impl DashboardMetrics {
    #[must_use]
    pub fn get(&self, field: MetricField) -> Decimal {
        match field {
            MetricField::Gmv => self.gmv,
            MetricField::NetSales => self.net_sales,
            MetricField::Profit => self.profit,
            MetricField::SoldItems => self.sold_items,
            MetricField::DiscountRate => self.discount_rate,
            MetricField::ReturnRate => self.return_rate,
        }
    }

    pub fn set(&mut self, field: MetricField, value: Decimal) {
        let slot = match field {
            MetricField::Gmv => &mut self.gmv,
            MetricField::NetSales => &mut self.net_sales,
            MetricField::Profit => &mut self.profit,
            MetricField::SoldItems => &mut self.sold_items,
            MetricField::DiscountRate => &mut self.discount_rate,
            MetricField::ReturnRate => &mut self.return_rate,
        };
        *slot = value;
    }
}

/// Names of the editable dashboard figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    Gmv,
    NetSales,
    Profit,
    SoldItems,
    DiscountRate,
    ReturnRate,
}

impl MetricField {
    pub const ALL: [MetricField; 6] = [
        MetricField::Gmv,
        MetricField::NetSales,
        MetricField::Profit,
        MetricField::SoldItems,
        MetricField::DiscountRate,
        MetricField::ReturnRate,
    ];

    /// Field name as stored.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Gmv => "gmv",
            Self::NetSales => "netSales",
            Self::Profit => "profit",
            Self::SoldItems => "soldItems",
            Self::DiscountRate => "discountRate",
            Self::ReturnRate => "returnRate",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MetricField {
    type Err = ParseError;

    /// Accepts the stored camelCase name or a snake/kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        MetricField::ALL
            .into_iter()
            .find(|f| f.key().to_ascii_lowercase() == wanted)
            .ok_or_else(|| ParseError::UnknownMetric(s.to_string()))
    }
}

/// One point of the weekly sales trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    /// Day label.
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "lenient")]
    pub sales: Decimal,
}

impl SalesPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, sales: i64) -> Self {
        Self {
            name: name.into(),
            sales: Decimal::from(sales),
        }
    }
}

/// Default weekly sales trend.
#[must_use]
pub fn default_sales_chart() -> Vec<SalesPoint> {
    vec![
        SalesPoint::new("Mon", 120_000_000),
        SalesPoint::new("Tue", 110_000_000),
        SalesPoint::new("Wed", 135_000_000),
        SalesPoint::new("Thu", 125_000_000),
        SalesPoint::new("Fri", 140_000_000),
        SalesPoint::new("Sat", 155_000_000),
        SalesPoint::new("Sun", 135_000_000),
    ]
}

/// Stock level of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuItem {
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "lenient_count")]
    pub stock: u32,
    #[serde(default, deserialize_with = "lenient_tag::deserialize")]
    pub status: StockStatus,
}

impl SkuItem {
    #[must_use]
    pub fn new(sku: impl Into<String>, name: impl Into<String>, stock: u32, status: StockStatus) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            stock,
            status,
        }
    }

    /// Whether the item belongs on the low-stock alert list.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.status != StockStatus::Good
    }
}

/// Default stock monitor rows.
#[must_use]
pub fn default_sku_data() -> Vec<SkuItem> {
    vec![
        SkuItem::new("SKU-001", "Premium Coffee Bean 500g", 120, StockStatus::Good),
        SkuItem::new("SKU-002", "Ceramic Mug Set (4pcs)", 15, StockStatus::Low),
        SkuItem::new("SKU-003", "Electric Coffee Grinder", 5, StockStatus::Critical),
        SkuItem::new("SKU-004", "Paper Filter V60 (100pcs)", 500, StockStatus::Good),
    ]
}
