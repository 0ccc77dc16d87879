//! Error types for model construction and validation.

use thiserror::Error;

/// Errors raised when building model values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Source measurement code was not `L` or `H`.
    #[error("unknown source measurement: {0}")]
    UnknownSource(String),

    /// Operator code was not `+` or `-`.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// Persisted subunit value outside `[0, SUB_RADIX)`.
    #[error("subunit value {value} out of range 0..{radix}")]
    SubunitOutOfRange { value: i64, radix: i64 },

    /// Persisted offset with a negative unit count; negative adjustments are
    /// expressed through the operator instead.
    #[error("offset units must not be negative, got {0}")]
    NegativeOffsetUnits(i64),
}
