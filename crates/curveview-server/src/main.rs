//! Curveview dashboard server entry point.

use std::time::Duration;

use chrono::Local;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curveview_fred::FredClient;
use curveview_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,curveview=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Curveview Dashboard Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/curveview.toml".to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    // Fetch the full curve history up front. Any tenor failing aborts
    // startup; no partial dashboard is ever served.
    let client = FredClient::new(Duration::from_secs(config.request_timeout_secs))?
        .with_base_url(config.fred_base_url.clone());

    let end = Local::now().date_naive();
    info!(start = %config.start_date, end = %end, "fetching treasury yield series");
    let table = client.fetch_curve(config.start_date, end).await?;

    // Serve the table read-only
    let server = Server::new(config, table);
    server.start().await?;

    Ok(())
}
