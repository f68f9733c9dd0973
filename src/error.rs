//! Error types for the ypbank-swift library.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading reference data or converting accounts.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing CSV data.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A reference record whose clearing bounds are reversed.
    #[error("Invalid clearing range {start}-{end} for bank {bank_code}")]
    InvalidRange {
        bank_code: String,
        start: u32,
        end: u32,
    },

    /// The clearing prefix of an account is not a number.
    #[error("Invalid clearing number: {0}")]
    InvalidClearingNumber(String),

    /// Missing required field.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid output format specified.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Failure while processing one row of a batch file.
    #[error("Row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<Error>,
    },
}
