//! # Curveview Core
//!
//! Core domain types for the Curveview Treasury yield curve dashboard.
//!
//! This crate provides the building blocks the rest of the workspace is
//! assembled from:
//!
//! - **[`TreasuryTenor`]**: the ten fixed constant-maturity tenors published
//!   by FRED (1-month through 30-year)
//! - **[`ObservationSeries`]**: one tenor's date-indexed yield series, as
//!   fetched from the data source
//! - **[`YieldTable`]**: the dense date × tenor matrix assembled from the
//!   per-tenor series with inner-join semantics
//!
//! ## Example
//!
//! ```rust
//! use curveview_core::{ObservationSeries, TreasuryTenor, YieldTable};
//! use chrono::NaiveDate;
//!
//! let d = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
//! let short = ObservationSeries::new(vec![(d, 5.0)]).unwrap();
//! let long = ObservationSeries::new(vec![(d, 3.8)]).unwrap();
//!
//! let table = YieldTable::assemble(vec![
//!     (TreasuryTenor::OneMonth, short),
//!     (TreasuryTenor::TenYear, long),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.num_rows(), 1);
//! assert_eq!(table.row(d), Some(&[5.0, 3.8][..]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod series;
pub mod table;
pub mod tenor;

pub use error::{TableError, TableResult};
pub use series::ObservationSeries;
pub use table::{Observation, YieldTable};
pub use tenor::TreasuryTenor;
