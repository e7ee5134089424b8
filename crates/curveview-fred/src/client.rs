//! HTTP client for the FRED `fredgraph.csv` endpoint.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use tracing::info;

use curveview_core::{ObservationSeries, TreasuryTenor, YieldTable};

use crate::error::{FredError, FredResult};
use crate::parse::parse_fredgraph_csv;

const USER_AGENT: &str = concat!("curveview/", env!("CARGO_PKG_VERSION"));

/// Client for fetching Treasury yield series from FRED.
///
/// Uses the unauthenticated CSV export endpoint, parameterized by series
/// identifier and date window. Requests are issued one at a time; the first
/// failure aborts the whole fetch.
#[derive(Debug, Clone)]
pub struct FredClient {
    http: Client,
    base_url: String,
}

impl FredClient {
    /// Public FRED host serving the CSV export endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://fred.stlouisfed.org";

    /// Start of the fetch window: 2018-03-01.
    #[must_use]
    pub fn default_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 3, 1).unwrap()
    }

    /// Creates a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> FredResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .gzip(true)
            .build()?;
        Ok(Self {
            http,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL. Used to point tests at a local server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of the CSV export for one series over a date window.
    #[must_use]
    pub fn series_url(&self, series_id: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/graph/fredgraph.csv?id={}&cosd={}&coed={}",
            self.base_url, series_id, start, end
        )
    }

    /// Fetches one tenor's daily series over `[start, end]`.
    pub async fn fetch_series(
        &self,
        tenor: TreasuryTenor,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FredResult<ObservationSeries> {
        let series_id = tenor.series_id();
        let url = self.series_url(series_id, start, end);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FredError::Status {
                series_id: series_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let series = parse_fredgraph_csv(series_id, &body)?;
        info!(series = series_id, observations = series.len(), "fetched series");
        Ok(series)
    }

    /// Fetches all ten tenors sequentially and assembles the yield table.
    ///
    /// Tenors are fetched in [`TreasuryTenor::ALL`] order, which becomes the
    /// table's column order. The first failed fetch aborts the run with no
    /// partial result.
    pub async fn fetch_curve(&self, start: NaiveDate, end: NaiveDate) -> FredResult<YieldTable> {
        let mut series = Vec::with_capacity(TreasuryTenor::ALL.len());
        for tenor in TreasuryTenor::ALL {
            series.push((tenor, self.fetch_series(tenor, start, end).await?));
        }
        let table = YieldTable::assemble(series)?;
        info!(
            rows = table.num_rows(),
            first = %table.first_date(),
            last = %table.last_date(),
            "assembled yield table"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_url_shape() {
        let client = FredClient::new(Duration::from_secs(5)).unwrap();
        let url = client.series_url(
            "DGS10",
            NaiveDate::from_ymd_opt(2018, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
        );
        assert_eq!(
            url,
            "https://fred.stlouisfed.org/graph/fredgraph.csv?id=DGS10&cosd=2018-03-01&coed=2024-06-07"
        );
    }

    #[test]
    fn test_base_url_override() {
        let client = FredClient::new(Duration::from_secs(5))
            .unwrap()
            .with_base_url("http://127.0.0.1:9099");
        let url = client.series_url(
            "DGS1MO",
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
        );
        assert!(url.starts_with("http://127.0.0.1:9099/graph/fredgraph.csv?id=DGS1MO"));
    }

    #[test]
    fn test_default_start() {
        assert_eq!(
            FredClient::default_start(),
            NaiveDate::from_ymd_opt(2018, 3, 1).unwrap()
        );
    }
}
