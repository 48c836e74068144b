pub mod dashboard;
pub mod meeting;
pub mod simulator;
pub mod snapshot;

// Re-export for easier access
pub use dashboard::{DashboardMetrics, MetricField, SalesPoint, SkuItem};
pub use meeting::{
    Attendee, EditableRow, KpiField, KpiRow, MeetingRecord, Ratings, RockField, RockRow,
    StatusRow, TextField, TodoField, TodoRow,
};
pub use simulator::{OperatingCosts, SimulatorState};
pub use snapshot::EcosystemSnapshot;
