//! # Curveview FRED
//!
//! Data acquisition from FRED (Federal Reserve Bank of St. Louis) for the
//! Curveview dashboard.
//!
//! [`FredClient`] fetches each constant-maturity Treasury series from the
//! unauthenticated `fredgraph.csv` endpoint, one sequential request per
//! tenor. A failure on any tenor aborts the whole fetch; no retries and no
//! partial results, so a served dashboard always reflects a complete table.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod error;

mod parse;

pub use client::FredClient;
pub use error::{FredError, FredResult};
