//! Extraction of headline figures from a free-text daily report.
//!
//! Store leads paste a short message such as
//! `"Laporan hari ini: Penjualan 150000000, Laba 50000000, Terjual 200 barang"`.
//! Keywords are matched in English or Indonesian, case-insensitively, with an
//! optional `Rp`/`Rp.` prefix before the amount.

use crate::entities::{DashboardMetrics, MetricField};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

static SALES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:sales|penjualan)\s+(?:rp\.?)?\s*(\d+)").unwrap()
});

static PROFIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:profit|laba|untung)\s+(?:rp\.?)?\s*(\d+)").unwrap()
});

static ITEMS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:items|barang|terjual)\s+(\d+)").unwrap()
});

/// Figures found in a daily report. Absent keywords stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyReport {
    pub net_sales: Option<Decimal>,
    pub profit: Option<Decimal>,
    pub sold_items: Option<Decimal>,
}

impl DailyReport {
    /// Scans `text` for sales, profit and item counts.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            net_sales: capture(&SALES_RE, text),
            profit: capture(&PROFIT_RE, text),
            sold_items: capture(&ITEMS_RE, text),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates().is_empty()
    }

    /// The fields this report would change, in display order.
    #[must_use]
    pub fn updates(&self) -> Vec<(MetricField, Decimal)> {
        [
            (MetricField::NetSales, self.net_sales),
            (MetricField::Profit, self.profit),
            (MetricField::SoldItems, self.sold_items),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    /// Writes the extracted figures into `metrics` and returns what changed.
    pub fn apply(&self, metrics: &mut DashboardMetrics) -> Vec<(MetricField, Decimal)> {
        let updates = self.updates();
        for (field, value) in &updates {
            metrics.set(*field, *value);
        }
        updates
    }
}

fn capture(re: &Regex, text: &str) -> Option<Decimal> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<Decimal>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_indonesian_report() {
        let report =
            DailyReport::parse("Laporan hari ini: Penjualan 150000000, Laba 50000000, Terjual 200 barang");
        assert_eq!(report.net_sales, Some(dec!(150000000)));
        assert_eq!(report.profit, Some(dec!(50000000)));
        assert_eq!(report.sold_items, Some(dec!(200)));
    }

    #[test]
    fn test_parse_english_with_currency_prefix() {
        let report = DailyReport::parse("sales Rp. 5000000 and profit rp 2000000");
        assert_eq!(report.net_sales, Some(dec!(5000000)));
        assert_eq!(report.profit, Some(dec!(2000000)));
        assert_eq!(report.sold_items, None);
    }

    #[test]
    fn test_parse_nothing_recognised() {
        let report = DailyReport::parse("all quiet today");
        assert!(report.is_empty());
    }

    #[test]
    fn test_apply_only_touches_found_fields() {
        let mut metrics = DashboardMetrics::default();
        let before_gmv = metrics.gmv;
        let changed = DailyReport::parse("items 50").apply(&mut metrics);
        assert_eq!(changed, vec![(MetricField::SoldItems, dec!(50))]);
        assert_eq!(metrics.sold_items, dec!(50));
        assert_eq!(metrics.gmv, before_gmv);
    }
}
