//! Parsing of `fredgraph.csv` response bodies.

use chrono::NaiveDate;
use curveview_core::ObservationSeries;

use crate::error::{FredError, FredResult};

/// Parses a `fredgraph.csv` body into an observation series.
///
/// The body is two columns: a date column and the series value column. FRED
/// publishes `.` for dates with no observation (market holidays); those
/// records are skipped, so the returned series holds only real values.
pub(crate) fn parse_fredgraph_csv(series_id: &str, body: &str) -> FredResult<ObservationSeries> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let mut points = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| FredError::Csv {
            series_id: series_id.to_string(),
            source: e,
        })?;
        let line = record.position().map_or(0, |p| p.line());

        let bad_record = |reason: String| FredError::BadRecord {
            series_id: series_id.to_string(),
            line,
            reason,
        };

        let date_field = record
            .get(0)
            .ok_or_else(|| bad_record("missing date column".to_string()))?;
        let value_field = record
            .get(1)
            .ok_or_else(|| bad_record("missing value column".to_string()))?
            .trim();

        // Missing observation marker.
        if value_field == "." {
            continue;
        }

        let date = NaiveDate::parse_from_str(date_field.trim(), "%Y-%m-%d")
            .map_err(|e| bad_record(format!("invalid date {date_field:?}: {e}")))?;
        let value: f64 = value_field
            .parse()
            .map_err(|e| bad_record(format!("invalid yield {value_field:?}: {e}")))?;

        points.push((date, value));
    }

    Ok(ObservationSeries::new(points)?)
}
