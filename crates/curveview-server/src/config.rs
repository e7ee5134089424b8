//! Server configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// First date of the fetch window
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Base URL of the FRED CSV export endpoint
    #[serde(default = "default_fred_base_url")]
    pub fred_base_url: String,

    /// Per-request timeout in seconds for FRED fetches
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_start_date() -> NaiveDate {
    curveview_fred::FredClient::default_start()
}

fn default_fred_base_url() -> String {
    curveview_fred::FredClient::DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            start_date: default_start_date(),
            fred_base_url: default_fred_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
