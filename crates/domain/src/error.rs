use thiserror::Error;

/// Errors raised when reading identifiers typed by a user.
///
/// Figures never fail to parse; they coerce to zero instead (see
/// [`crate::numeric`]). Only names that select something can be wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown division: {0}")]
    UnknownDivision(String),
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("unknown dashboard metric: {0}")]
    UnknownMetric(String),
    #[error("unknown field: {0}")]
    UnknownField(String),
}
