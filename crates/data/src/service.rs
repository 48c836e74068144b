//! Dashboard operations over a snapshot store.
//!
//! Every operation reads the full snapshot and every write puts the full
//! snapshot back. Successful writes are announced on a broadcast channel so
//! other views can refresh.

use crate::error::StoreError;
use crate::stores::SnapshotStore;
use ecodash_domain::daily_report::DailyReport;
use ecodash_domain::entities::{
    DashboardMetrics, EcosystemSnapshot, MeetingRecord, MetricField, SalesPoint, SimulatorState,
    SkuItem,
};
use ecodash_domain::numeric;
use ecodash_simulation::engine::calculate;
use rust_decimal::Decimal;
use tokio::sync::{Mutex, broadcast};
use tracing::{debug, error, info, warn};

const EVENT_CAPACITY: usize = 64;

/// Announces which part of the snapshot changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    /// Defaults were written to an empty store.
    Seeded,
    MetricsUpdated,
    MeetingSaved,
    GrowthSaved,
    Reset,
}

/// Read and write access to the ecosystem snapshot.
pub struct EcosystemService {
    store: Box<dyn SnapshotStore>,
    events: broadcast::Sender<SyncEvent>,
    write_lock: Mutex<()>,
}

impl EcosystemService {
    #[must_use]
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            store,
            events,
            write_lock: Mutex::new(()),
        }
    }

    /// Receives a [`SyncEvent`] after each successful write.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.events.subscribe()
    }

    /// Loads the snapshot, seeding and saving the defaults when the store is
    /// empty.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or the seed cannot be
    /// written.
    pub async fn snapshot(&self) -> Result<EcosystemSnapshot, StoreError> {
        if let Some(snapshot) = self.store.load().await? {
            return Ok(snapshot);
        }
        info!(store = self.store.name(), "store empty, seeding defaults");
        let snapshot = EcosystemSnapshot::default();
        self.write(&snapshot, SyncEvent::Seeded).await?;
        Ok(snapshot)
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub async fn dashboard_metrics(&self) -> Result<DashboardMetrics, StoreError> {
        Ok(self.snapshot().await?.metrics)
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub async fn sales_chart(&self) -> Result<Vec<SalesPoint>, StoreError> {
        Ok(self.snapshot().await?.chart_data)
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub async fn sku_data(&self) -> Result<Vec<SkuItem>, StoreError> {
        Ok(self.snapshot().await?.sku_data)
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub async fn meeting(&self) -> Result<MeetingRecord, StoreError> {
        Ok(self.snapshot().await?.meeting)
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub async fn growth(&self) -> Result<SimulatorState, StoreError> {
        Ok(self.snapshot().await?.simulator)
    }

    /// Merges raw `(field, value)` pairs into the dashboard metrics.
    ///
    /// Values are read with [`numeric::parse`]; pairs with an unknown field or
    /// a value that is not a number are skipped. A non-zero `netSales` also
    /// becomes the sales of the last chart point. Returns the updated metrics.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be read or written.
    pub async fn update_dashboard_metrics<I, K, V>(
        &self,
        updates: I,
    ) -> Result<DashboardMetrics, StoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let accepted: Vec<(MetricField, Decimal)> = updates
            .into_iter()
            .filter_map(|(key, raw)| {
                let (key, raw) = (key.as_ref(), raw.as_ref());
                let Ok(field) = key.parse::<MetricField>() else {
                    warn!(field = key, "unknown dashboard metric, skipped");
                    return None;
                };
                let Some(value) = numeric::parse(raw) else {
                    warn!(%field, value = raw, "metric value is not a number, skipped");
                    return None;
                };
                Some((field, value))
            })
            .collect();

        self.apply_metric_updates(&accepted).await
    }

    /// Extracts sales, profit and item counts from a free-text report and
    /// stores them. Returns the fields that changed, empty when nothing was
    /// recognised (in which case nothing is written).
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be read or written.
    pub async fn apply_daily_report(
        &self,
        text: &str,
    ) -> Result<Vec<(MetricField, Decimal)>, StoreError> {
        let updates = DailyReport::parse(text).updates();
        if updates.is_empty() {
            debug!("daily report contained no figures");
            return Ok(updates);
        }
        self.apply_metric_updates(&updates).await?;
        Ok(updates)
    }

    /// Replaces the stored meeting record.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be read or written.
    pub async fn save_meeting(&self, record: MeetingRecord) -> Result<MeetingRecord, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.snapshot().await?;
        snapshot.meeting = record;
        self.write(&snapshot, SyncEvent::MeetingSaved).await?;
        Ok(snapshot.meeting)
    }

    /// Replaces the simulator inputs and sets the dashboard profit to the
    /// profit of the current state, rounded to a whole amount.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be read or written.
    pub async fn save_growth(&self, simulator: SimulatorState) -> Result<SimulatorState, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.snapshot().await?;
        snapshot.metrics.profit = round_half_up(calculate(&simulator.current).profit);
        snapshot.simulator = simulator;
        self.write(&snapshot, SyncEvent::GrowthSaved).await?;
        Ok(snapshot.simulator)
    }

    /// Clears the store. The next read seeds the defaults again.
    ///
    /// # Errors
    /// Returns an error if the store cannot be cleared.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        if let Err(e) = self.store.clear().await {
            error!(store = self.store.name(), error = %e, "failed to reset store");
            return Err(e);
        }
        info!(store = self.store.name(), "store reset");
        let _ = self.events.send(SyncEvent::Reset);
        Ok(())
    }

    async fn apply_metric_updates(
        &self,
        updates: &[(MetricField, Decimal)],
    ) -> Result<DashboardMetrics, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.snapshot().await?;
        for (field, value) in updates {
            snapshot.metrics.set(*field, *value);
            if *field == MetricField::NetSales && !value.is_zero() {
                if let Some(last) = snapshot.chart_data.last_mut() {
                    last.sales = *value;
                }
            }
        }
        self.write(&snapshot, SyncEvent::MetricsUpdated).await?;
        Ok(snapshot.metrics)
    }

    async fn write(&self, snapshot: &EcosystemSnapshot, event: SyncEvent) -> Result<(), StoreError> {
        if let Err(e) = self.store.save(snapshot).await {
            error!(store = self.store.name(), ?event, error = %e, "failed to save snapshot");
            return Err(e);
        }
        info!(store = self.store.name(), ?event, "snapshot saved");
        // No subscribers is fine.
        let _ = self.events.send(event);
        Ok(())
    }
}

/// Rounds half-way values up, toward positive infinity.
fn round_half_up(value: Decimal) -> Decimal {
    value
        .checked_add(Decimal::new(5, 1))
        .map_or(Decimal::ZERO, |v| v.floor())
}
