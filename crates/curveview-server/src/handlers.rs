//! Request handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

use curveview_charts::{curve_animation, curve_snapshot, ChartError};
use curveview_core::YieldTable;

use crate::dashboard;

/// Application state: the assembled table, immutable for the whole run.
pub struct AppState {
    /// The yield table built at startup.
    pub table: YieldTable,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Dashboard page: date slider plus the two chart panels.
pub async fn index() -> Html<&'static str> {
    Html(dashboard::PAGE)
}

/// Date index response: the slider domain and its default position.
#[derive(Serialize)]
pub struct DatesResponse {
    /// All dates in the table, ascending.
    pub dates: Vec<NaiveDate>,
    /// Default slider value: the latest date.
    pub default: NaiveDate,
}

/// Returns the table's date index. Drives the slider bounds.
pub async fn dates(State(state): State<Arc<AppState>>) -> Json<DatesResponse> {
    Json(DatesResponse {
        dates: state.table.dates().to_vec(),
        default: state.table.last_date(),
    })
}

/// Snapshot figure for one selected date.
pub async fn curve(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> (StatusCode, Json<Value>) {
    let date = match date.parse::<NaiveDate>() {
        Ok(d) => d,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("invalid date {date:?}: {e}") })),
            );
        }
    };

    match curve_snapshot(&state.table, date) {
        Ok(plot) => match serde_json::from_str::<Value>(&plot.to_json()) {
            Ok(figure) => (StatusCode::OK, Json(figure)),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("figure serialization failed: {e}") })),
            ),
        },
        Err(e @ ChartError::DateNotFound { .. }) => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() })))
        }
    }
}

/// Animated figure over the full table.
pub async fn animation(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(curve_animation(&state.table).to_figure())
}
