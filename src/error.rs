//! Error types for expression construction

use thiserror::Error;

/// Error type for expression and builder operations.
///
/// Every variant is a construction/precondition failure surfaced at the
/// offending call; none are transient or retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("condition attribute must be non-empty")]
    EmptyAttribute,

    #[error("no existing expression to apply {0}")]
    NoBaseExpression(&'static str),

    #[error("no expression built")]
    NoExpressionBuilt,

    #[error("invalid expression structure")]
    InvalidStructure,
}
