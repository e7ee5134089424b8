//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use curveview_core::YieldTable;

use crate::handlers::{self, AppState};

/// Create the API router around an assembled yield table.
///
/// # Arguments
/// * `table` - The table built at startup; served read-only
pub fn create_router(table: YieldTable) -> Router {
    let state = Arc::new(AppState { table });

    Router::new()
        // Dashboard
        .route("/", get(handlers::index))
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Table index (slider domain)
        .route("/api/v1/dates", get(handlers::dates))
        // Figures
        .route("/api/v1/curve/:date", get(handlers::curve))
        .route("/api/v1/animation", get(handlers::animation))
        .with_state(state)
}
