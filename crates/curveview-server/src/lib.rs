//! # Curveview Server
//!
//! Dashboard server for the Curveview Treasury yield curve charts.
//!
//! ## Features
//!
//! - Dashboard page with a date slider and two Plotly chart panels
//! - JSON API for the date index, the single-date snapshot figure, and the
//!   animated time-lapse figure
//! - Health endpoints
//! - Configuration via TOML file
//!
//! The yield table is fetched once at startup and served read-only; there
//! is no persistence and no mutable state across requests.
//!
//! ## Usage
//!
//! ```ignore
//! use curveview_server::{Server, ServerConfig};
//!
//! let server = Server::new(config, table);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dashboard;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;

use axum::Router;
use curveview_core::YieldTable;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use routes::create_router;

/// The Curveview server.
pub struct Server {
    config: ServerConfig,
    table: YieldTable,
}

impl Server {
    /// Create a new server around an assembled yield table.
    pub fn new(config: ServerConfig, table: YieldTable) -> Self {
        Self { config, table }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.table.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Curveview server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
