pub mod metric_set;
pub mod simulation_result;
pub mod waterfall;

pub use metric_set::{Driver, MetricSet};
pub use simulation_result::SimulationResult;
pub use waterfall::{StepKind, WaterfallStep};
