//! Unified error type definition

use thiserror::Error;

/// Core layer error type
///
/// The only fallible boundary is the options/selection file contract;
/// selector operations themselves never fail (stale lookups degrade to
/// no-ops instead).
#[derive(Error, Debug)]
pub enum CoreError {
    /// Options or selection file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Options document is not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Options document violates the data contract
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Core layer result alias
pub type CoreResult<T> = Result<T, CoreError>;
