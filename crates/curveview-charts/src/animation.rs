//! Animated yield curve figure.

use chrono::NaiveDate;
use plotly::common::{Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};
use serde_json::{json, Value};

use curveview_core::YieldTable;

/// Headroom multiplier for the fixed y-axis: the axis tops out at
/// 1.1 × the maximum yield found anywhere in the table.
const Y_AXIS_HEADROOM: f64 = 1.1;

/// The animated yield curve: a base figure plus one frame per date.
///
/// Frames are in chronological ascending order, each named by its date. The
/// y-axis range is fixed across all frames so the scale does not jump. The
/// plotly crate has no frame API, so frames are carried as figure-JSON
/// values and merged in by [`to_figure`](CurveAnimation::to_figure).
pub struct CurveAnimation {
    plot: Plot,
    frames: Vec<Value>,
    dates: Vec<NaiveDate>,
    y_upper: f64,
}

impl std::fmt::Debug for CurveAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveAnimation")
            .field("frames", &self.frames)
            .field("dates", &self.dates)
            .field("y_upper", &self.y_upper)
            .finish_non_exhaustive()
    }
}

impl CurveAnimation {
    /// Number of animation frames (= number of table rows).
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame dates in playback (chronological) order.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Upper bound of the fixed y-axis range.
    #[must_use]
    pub fn y_upper(&self) -> f64 {
        self.y_upper
    }

    /// Serializes the full Plotly figure: `{data, layout, frames, ...}`.
    ///
    /// The dashboard page hands `data`/`layout` to `Plotly.newPlot` and the
    /// `frames` array to `Plotly.addFrames`.
    #[must_use]
    pub fn to_figure(&self) -> Value {
        let mut figure: Value =
            serde_json::from_str(&self.plot.to_json()).unwrap_or_else(|_| json!({}));
        figure["frames"] = Value::Array(self.frames.clone());
        figure
    }
}

/// Builds the animated figure from the full table.
///
/// The table is reshaped to long form and each date's group of
/// (date, tenor, yield) triples becomes one frame, so the frames inherit
/// the reshape's chronological grouping. The base trace shows the first
/// date. A [`YieldTable`] always has at least one row, so this cannot fail.
#[must_use]
pub fn curve_animation(table: &YieldTable) -> CurveAnimation {
    let y_upper = table.max_yield() * Y_AXIS_HEADROOM;

    // The reshape emits exactly one triple per cell, grouped by date, so
    // every chunk of column-count triples is one date's curve.
    let long = table.long_form();
    let mut dates = Vec::with_capacity(table.num_rows());
    let mut frames = Vec::with_capacity(table.num_rows());
    for group in long.chunks(table.columns().len()) {
        let date = group[0].date;
        let x: Vec<&'static str> = group.iter().map(|o| o.tenor.series_id()).collect();
        let y: Vec<f64> = group.iter().map(|o| o.value).collect();
        frames.push(json!({
            "name": date.to_string(),
            "data": [{
                "type": "scatter",
                "mode": "lines+markers",
                "x": x,
                "y": y,
            }],
        }));
        dates.push(date);
    }

    let first = dates[0];
    let labels: Vec<String> = table
        .column_labels()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let first_row = table.row(first).unwrap_or(&[]);
    let first_name = first.to_string();
    let trace = Scatter::new(labels, first_row.to_vec())
        .name(&first_name)
        .mode(Mode::LinesMarkers);

    let layout = Layout::new()
        .title(Title::with_text(format!(
            "Yield Curve Animation ({} to {})",
            table.first_date(),
            table.last_date()
        )))
        .x_axis(Axis::new().title(Title::with_text("Maturity")))
        .y_axis(
            Axis::new()
                .title(Title::with_text("Yield"))
                .range(vec![0.0, y_upper]),
        );

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    CurveAnimation {
        plot,
        frames,
        dates,
        y_upper,
    }
}
