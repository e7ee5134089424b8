//! Error types for FRED data acquisition.

use curveview_core::TableError;
use thiserror::Error;

/// A specialized Result type for FRED operations.
pub type FredResult<T> = Result<T, FredError>;

/// Error types for FRED data acquisition.
#[derive(Error, Debug)]
pub enum FredError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// FRED answered with a non-success status code.
    #[error("{series_id}: server returned status {status}")]
    Status {
        /// Series being fetched when the error occurred.
        series_id: String,
        /// HTTP status code returned.
        status: u16,
    },

    /// The response body was not well-formed CSV.
    #[error("{series_id}: malformed csv: {source}")]
    Csv {
        /// Series being fetched when the error occurred.
        series_id: String,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A CSV record had a missing or unparsable field.
    #[error("{series_id}: bad record at line {line}: {reason}")]
    BadRecord {
        /// Series being fetched when the error occurred.
        series_id: String,
        /// 1-based line number of the offending record.
        line: u64,
        /// What was wrong with the record.
        reason: String,
    },

    /// Assembling the fetched series into a table failed.
    #[error(transparent)]
    Table(#[from] TableError),
}
