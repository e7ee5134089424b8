//! Date-indexed observation series for a single tenor.

use chrono::NaiveDate;

use crate::error::{TableError, TableResult};

/// One tenor's fetched yield series.
///
/// Holds only non-missing observations: dates the source reports as missing
/// (FRED publishes `.` for market holidays) are dropped before construction,
/// and the inner join in [`YieldTable::assemble`] then excludes those dates
/// from the final table.
///
/// [`YieldTable::assemble`]: crate::YieldTable::assemble
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSeries {
    observations: Vec<(NaiveDate, f64)>,
}

impl ObservationSeries {
    /// Creates a series from (date, yield) pairs.
    ///
    /// Dates must be strictly increasing and values finite.
    pub fn new(observations: Vec<(NaiveDate, f64)>) -> TableResult<Self> {
        for (index, pair) in observations.windows(2).enumerate() {
            if pair[0].0 >= pair[1].0 {
                return Err(TableError::NonMonotonicDates {
                    index: index + 1,
                    prev: pair[0].0,
                    current: pair[1].0,
                });
            }
        }
        if let Some(&(date, value)) = observations.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TableError::NonFiniteValue { date, value });
        }
        Ok(Self { observations })
    }

    /// Number of observations in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Looks up the yield observed on `date`, if any.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.observations
            .binary_search_by_key(&date, |&(d, _)| d)
            .ok()
            .map(|i| self.observations[i].1)
    }

    /// Iterates over (date, yield) pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.observations.iter().copied()
    }
}
