//! # Curveview Charts
//!
//! Plotly figure construction for the Curveview dashboard.
//!
//! Two figures are built from the assembled [`YieldTable`]:
//!
//! - [`curve_snapshot`]: the yield curve on one selected date
//! - [`curve_animation`]: a time-lapse with one frame per date, on a fixed
//!   y-axis so the scale does not jump between frames
//!
//! Maturities are plotted in table-column order, which is ascending
//! duration by construction of the fixed tenor list.
//!
//! [`YieldTable`]: curveview_core::YieldTable

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod error;
pub mod snapshot;

pub use animation::{curve_animation, CurveAnimation};
pub use error::{ChartError, ChartResult};
pub use snapshot::curve_snapshot;
