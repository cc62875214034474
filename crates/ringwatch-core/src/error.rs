//! Error types for the fraud-ring detection engine.

use thiserror::Error;

/// Main error type for ringwatch operations.
#[derive(Error, Debug)]
pub enum RingwatchError {
    /// One or more required columns are missing from the input schema.
    #[error("missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// A single input row failed to parse.
    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },

    /// IO error surfaced while reading or writing data.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RingwatchError {
    /// Create a schema error naming the missing columns.
    pub fn schema(missing: Vec<String>) -> Self {
        Self::Schema { missing }
    }

    /// Create a parse error for the given 1-based row number.
    pub fn parse(row: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            row,
            message: message.into(),
        }
    }
}

/// Result type alias for ringwatch operations.
pub type RingwatchResult<T> = Result<T, RingwatchError>;
