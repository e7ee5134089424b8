//! Error types for chart construction.

use chrono::NaiveDate;
use thiserror::Error;

/// A specialized Result type for chart construction.
pub type ChartResult<T> = Result<T, ChartError>;

/// Error types for chart construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The requested date is not a member of the table's date index.
    #[error("date {date} not in table index [{first}, {last}]")]
    DateNotFound {
        /// The requested date.
        date: NaiveDate,
        /// Earliest date in the table.
        first: NaiveDate,
        /// Latest date in the table.
        last: NaiveDate,
    },
}
