use crate::numeric::{lenient, serialize_pair};
use rust_decimal::Decimal;
use serde::Serialize;

/// Whether a bar restates a total or attributes a change to one driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Total,
    Driver,
}

/// One bar of the profit waterfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaterfallStep {
    /// Chart label.
    pub label: String,
    /// Bar extent `[start, end]`.
    #[serde(serialize_with = "serialize_pair")]
    pub range: [Decimal; 2],
    /// `range[1] - range[0]`.
    #[serde(serialize_with = "lenient::serialize")]
    pub delta: Decimal,
    /// Total or driver bar.
    pub kind: StepKind,
}

impl WaterfallStep {
    /// A bar that stands on zero and shows a whole total.
    #[must_use]
    pub fn total(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            range: [Decimal::ZERO, value],
            delta: value,
            kind: StepKind::Total,
        }
    }

    /// A floating bar from `start` to `end`.
    ///
    /// The delta saturates to zero if the subtraction overflows.
    #[must_use]
    pub fn driver(label: impl Into<String>, start: Decimal, end: Decimal) -> Self {
        Self {
            label: label.into(),
            range: [start, end],
            delta: end.checked_sub(start).unwrap_or(Decimal::ZERO),
            kind: StepKind::Driver,
        }
    }

    #[must_use]
    pub fn is_total(&self) -> bool {
        self.kind == StepKind::Total
    }

    /// Whether the bar raised profit (or left it unchanged).
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.delta >= Decimal::ZERO
    }
}
