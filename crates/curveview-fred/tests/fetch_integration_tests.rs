//! Integration tests for the fetch loop, against a local CSV fixture server.
//!
//! The fixture mimics the `fredgraph.csv` endpoint and records which series
//! were requested, so the tests can observe both the fetch order and where
//! the loop stops on failure.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;

use curveview_core::TreasuryTenor;
use curveview_fred::{FredClient, FredError};

#[derive(Clone, Default)]
struct Fixture {
    /// Series identifiers in request order.
    requested: Arc<Mutex<Vec<String>>>,
    /// Series that answers 500 instead of CSV.
    fail_series: Option<&'static str>,
}

async fn fredgraph(
    State(fixture): State<Fixture>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let id = params.get("id").cloned().unwrap_or_default();
    fixture.requested.lock().unwrap().push(id.clone());

    if fixture.fail_series == Some(id.as_str()) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "series unavailable").into_response();
    }

    let body = format!("DATE,{id}\n2023-01-03,4.00\n2023-01-04,4.10\n");
    ([(header::CONTENT_TYPE, "text/csv")], body).into_response()
}

async fn spawn_fixture(fixture: Fixture) -> SocketAddr {
    let router = Router::new()
        .route("/graph/fredgraph.csv", get(fredgraph))
        .with_state(fixture);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> FredClient {
    FredClient::new(Duration::from_secs(5))
        .unwrap()
        .with_base_url(format!("http://{addr}"))
}

fn window() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
    )
}

#[tokio::test]
async fn test_fetch_curve_requests_all_tenors_in_order() {
    let fixture = Fixture::default();
    let requested = fixture.requested.clone();
    let addr = spawn_fixture(fixture).await;

    let (start, end) = window();
    let table = client_for(addr).fetch_curve(start, end).await.unwrap();

    assert_eq!(table.columns().len(), 10);
    assert_eq!(table.num_rows(), 2);

    let expected: Vec<String> = TreasuryTenor::ALL
        .iter()
        .map(|t| t.series_id().to_string())
        .collect();
    assert_eq!(*requested.lock().unwrap(), expected);
}

#[tokio::test]
async fn test_fetch_curve_aborts_on_first_tenor_failure() {
    let fixture = Fixture {
        fail_series: Some("DGS5"),
        ..Fixture::default()
    };
    let requested = fixture.requested.clone();
    let addr = spawn_fixture(fixture).await;

    let (start, end) = window();
    let err = client_for(addr).fetch_curve(start, end).await.unwrap_err();

    match err {
        FredError::Status { series_id, status } => {
            assert_eq!(series_id, "DGS5");
            assert_eq!(status, 500);
        }
        other => panic!("unexpected error: {other}"),
    }

    // The loop stops at the failing tenor: nothing after DGS5 is requested,
    // and no partial table escapes the error path.
    assert_eq!(
        *requested.lock().unwrap(),
        vec!["DGS1MO", "DGS3MO", "DGS6MO", "DGS1", "DGS2", "DGS5"]
    );
}

#[tokio::test]
async fn test_fetch_series_parses_fixture_body() {
    let addr = spawn_fixture(Fixture::default()).await;

    let (start, end) = window();
    let series = client_for(addr)
        .fetch_series(TreasuryTenor::TenYear, start, end)
        .await
        .unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(
        series.get(NaiveDate::from_ymd_opt(2023, 1, 4).unwrap()),
        Some(4.10)
    );
}
