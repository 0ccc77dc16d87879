//! Error types for formula persistence.

use thiserror::Error;

/// Errors from reading the persisted formula table.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The store could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted data exists but fails to parse or fails schema validation.
    /// The recovery policy in [`crate::FormulaRepository::load`] substitutes
    /// the compiled-in defaults for this case.
    #[error("malformed persisted formula table: {0}")]
    MalformedPersistedData(#[from] serde_json::Error),
}
