use super::dashboard::{DashboardMetrics, SalesPoint, SkuItem, default_sales_chart, default_sku_data};
use super::meeting::MeetingRecord;
use super::simulator::SimulatorState;
use serde::{Deserialize, Serialize};

/// Everything the dashboard persists, read and written as one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EcosystemSnapshot {
    pub metrics: DashboardMetrics,
    pub meeting: MeetingRecord,
    pub simulator: SimulatorState,
    pub chart_data: Vec<SalesPoint>,
    pub sku_data: Vec<SkuItem>,
}

impl Default for EcosystemSnapshot {
    fn default() -> Self {
        Self {
            metrics: DashboardMetrics::default(),
            meeting: MeetingRecord::default(),
            simulator: SimulatorState::default(),
            chart_data: default_sales_chart(),
            sku_data: default_sku_data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_survives_json() {
        let snapshot = EcosystemSnapshot::default();
        let text = serde_json::to_string(&snapshot).unwrap();
        let back: EcosystemSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_top_level_keys() {
        let json = serde_json::to_value(EcosystemSnapshot::default()).unwrap();
        for key in ["metrics", "meeting", "simulator", "chartData", "skuData"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["chartData"].as_array().map(Vec::len), Some(7));
    }
}
