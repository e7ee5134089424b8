//! Error types for series and table construction.

use chrono::NaiveDate;
use thiserror::Error;

/// A specialized Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Error types for series and table construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// No input series were supplied to the assembly.
    #[error("cannot assemble a yield table from zero series")]
    NoSeries,

    /// The same tenor appeared more than once in the input.
    #[error("duplicate tenor in input: {tenor}")]
    DuplicateTenor {
        /// Series identifier of the repeated tenor.
        tenor: String,
    },

    /// No date survived the inner join across all input series.
    #[error("no date is present in all {series_count} input series")]
    EmptyJoin {
        /// Number of series that were joined.
        series_count: usize,
    },

    /// Series observations are not in strictly increasing date order.
    #[error("non-monotonic dates at index {index}: {prev} >= {current}")]
    NonMonotonicDates {
        /// Index where the ordering violation occurred.
        index: usize,
        /// Previous observation date.
        prev: NaiveDate,
        /// Offending observation date.
        current: NaiveDate,
    },

    /// A series contained a non-finite yield value.
    #[error("non-finite yield for {date}: {value}")]
    NonFiniteValue {
        /// Observation date of the bad value.
        date: NaiveDate,
        /// The offending value.
        value: f64,
    },
}
