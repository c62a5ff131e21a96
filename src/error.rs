//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A caller-supplied value violates a contract
    #[error("Validation error: {0}")]
    Validation(String),

    /// The persisted store is malformed
    #[error("Format error at line {line}: {message}")]
    Format { line: u64, message: String },

    /// Positional access outside the transaction sequence
    #[error("Index {index} out of range for ledger of {len} transactions")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a format error for the given store line
    pub fn format(line: u64, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a store format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is an out-of-range index error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.kind() {
            csv::ErrorKind::Io(_) => Self::Io(err.to_string()),
            _ => Self::format(line, err.to_string()),
        }
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
