//! The assembled yield table.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{TableError, TableResult};
use crate::series::ObservationSeries;
use crate::tenor::TreasuryTenor;

/// One row of the long-form reshape: a single (date, tenor, yield) triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Observation date.
    pub date: NaiveDate,
    /// Tenor of the observed yield.
    pub tenor: TreasuryTenor,
    /// Yield in percent.
    pub value: f64,
}

/// A dense date × tenor matrix of Treasury yields.
///
/// Assembled once per run from the per-tenor series and immutable
/// thereafter. A date appears as a row only when every input series has an
/// observation for it, so the table never contains missing cells.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldTable {
    columns: Vec<TreasuryTenor>,
    dates: Vec<NaiveDate>,
    /// Row-major yields, one row per date, one value per column.
    rows: Vec<Vec<f64>>,
}

impl YieldTable {
    /// Assembles the table from per-tenor series.
    ///
    /// Equivalent to a horizontal concat aligned on the date index followed
    /// by dropping every row with a missing value: only dates present in
    /// all input series survive. Column order is input order.
    ///
    /// # Errors
    ///
    /// Returns an error if no series are given, a tenor repeats, or no date
    /// is shared by all series.
    pub fn assemble(series: Vec<(TreasuryTenor, ObservationSeries)>) -> TableResult<Self> {
        if series.is_empty() {
            return Err(TableError::NoSeries);
        }
        for (i, (tenor, _)) in series.iter().enumerate() {
            if series[..i].iter().any(|(t, _)| t == tenor) {
                return Err(TableError::DuplicateTenor {
                    tenor: tenor.to_string(),
                });
            }
        }

        let columns: Vec<TreasuryTenor> = series.iter().map(|(t, _)| *t).collect();

        // Candidate dates come from the first series; each must then be
        // present in every other series to survive the join.
        let (_, first) = &series[0];
        let mut dates = Vec::new();
        let mut rows = Vec::new();
        for (date, value) in first.iter() {
            let mut row = Vec::with_capacity(series.len());
            row.push(value);
            for (_, other) in &series[1..] {
                match other.get(date) {
                    Some(v) => row.push(v),
                    None => break,
                }
            }
            if row.len() == series.len() {
                dates.push(date);
                rows.push(row);
            }
        }

        if dates.is_empty() {
            return Err(TableError::EmptyJoin {
                series_count: series.len(),
            });
        }

        Ok(Self {
            columns,
            dates,
            rows,
        })
    }

    /// Column tenors in fetch order.
    #[must_use]
    pub fn columns(&self) -> &[TreasuryTenor] {
        &self.columns
    }

    /// Column labels: the FRED series identifiers, in column order.
    #[must_use]
    pub fn column_labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|t| t.series_id()).collect()
    }

    /// Dates in ascending order, one per row.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// First (earliest) date in the table.
    #[must_use]
    pub fn first_date(&self) -> NaiveDate {
        self.dates[0]
    }

    /// Last (latest) date in the table.
    #[must_use]
    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Number of rows (dates).
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.dates.len()
    }

    /// Yields for `date` in column order, if the date is an index member.
    #[must_use]
    pub fn row(&self, date: NaiveDate) -> Option<&[f64]> {
        self.dates
            .binary_search(&date)
            .ok()
            .map(|i| self.rows[i].as_slice())
    }

    /// The maximum yield anywhere in the table.
    #[must_use]
    pub fn max_yield(&self) -> f64 {
        self.rows
            .iter()
            .flatten()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Reshapes the table to long form: one (date, tenor, yield) triple per
    /// cell, grouped by date in chronological order.
    ///
    /// Transient by design; it only feeds the animated chart.
    #[must_use]
    pub fn long_form(&self) -> Vec<Observation> {
        let mut out = Vec::with_capacity(self.dates.len() * self.columns.len());
        for (date, row) in self.dates.iter().zip(&self.rows) {
            for (tenor, value) in self.columns.iter().zip(row) {
                out.push(Observation {
                    date: *date,
                    tenor: *tenor,
                    value: *value,
                });
            }
        }
        out
    }
}
