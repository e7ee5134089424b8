//! Single-date yield curve figure.

use chrono::NaiveDate;
use plotly::common::{Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use curveview_core::YieldTable;

use crate::error::{ChartError, ChartResult};

/// Builds the yield curve figure for one selected date.
///
/// One line trace: x = the table's column labels in column order, y = that
/// date's yields. The date slider only emits index members, so
/// [`ChartError::DateNotFound`] marks a caller bug or a hand-crafted URL.
pub fn curve_snapshot(table: &YieldTable, date: NaiveDate) -> ChartResult<Plot> {
    let row = table.row(date).ok_or_else(|| ChartError::DateNotFound {
        date,
        first: table.first_date(),
        last: table.last_date(),
    })?;

    let labels: Vec<String> = table
        .column_labels()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let name = date.to_string();
    let trace = Scatter::new(labels, row.to_vec())
        .name(&name)
        .mode(Mode::LinesMarkers);

    let layout = Layout::new()
        .title(Title::with_text(format!("Yield Curve on {date}")))
        .x_axis(Axis::new().title(Title::with_text("Maturity")))
        .y_axis(Axis::new().title(Title::with_text("Yield")));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    Ok(plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curveview_core::{ObservationSeries, TreasuryTenor};
    use serde_json::Value;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_tenor_table() -> YieldTable {
        let d1 = date(2023, 1, 3);
        let d2 = date(2023, 1, 4);
        YieldTable::assemble(vec![
            (
                TreasuryTenor::OneMonth,
                ObservationSeries::new(vec![(d1, 5.0), (d2, 5.1)]).unwrap(),
            ),
            (
                TreasuryTenor::TenYear,
                ObservationSeries::new(vec![(d1, 3.8), (d2, 3.9)]).unwrap(),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_snapshot_points_match_row_in_column_order() {
        let table = two_tenor_table();
        let plot = curve_snapshot(&table, date(2023, 1, 4)).unwrap();

        let figure: Value = serde_json::from_str(&plot.to_json()).unwrap();
        let trace = &figure["data"][0];
        assert_eq!(trace["x"], serde_json::json!(["DGS1MO", "DGS10"]));
        assert_eq!(trace["y"], serde_json::json!([5.1, 3.9]));
    }

    #[test]
    fn test_snapshot_title_includes_date() {
        let table = two_tenor_table();
        let plot = curve_snapshot(&table, date(2023, 1, 3)).unwrap();
        let figure: Value = serde_json::from_str(&plot.to_json()).unwrap();
        assert_eq!(
            figure["layout"]["title"]["text"],
            serde_json::json!("Yield Curve on 2023-01-03")
        );
    }

    #[test]
    fn test_snapshot_rejects_non_member_date() {
        let table = two_tenor_table();
        // Present in neither series.
        // `unwrap_err` would require `Plot: Debug`, which plotly doesn't provide.
        let err = match curve_snapshot(&table, date(2023, 1, 5)) {
            Err(e) => e,
            Ok(_) => panic!("expected DateNotFound error"),
        };
        assert_eq!(
            err,
            ChartError::DateNotFound {
                date: date(2023, 1, 5),
                first: date(2023, 1, 3),
                last: date(2023, 1, 4),
            }
        );
    }
}
