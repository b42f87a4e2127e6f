//! Alpha Vantage client against a mock HTTP server

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::fixtures;
use crate::common::logging::{init_test_logging, log_test_data, log_test_step};
use stock_health::api::{AlphaVantageClient, FundamentalsProvider, ProviderError};
use stock_health::models::Config;
use stock_health::{evaluate, Verdict};

fn config_for(server: &MockServer) -> Config {
    Config {
        alpha_vantage_api_key: Some("test-key".to_string()),
        alpha_vantage_base_url: format!("{}/query", server.uri()),
        rate_limit_per_minute: 600,
        ..Config::default()
    }
}

async fn mount_json(server: &MockServer, function: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", function))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_fundamentals_end_to_end() {
    init_test_logging();
    log_test_step("Fetching fundamentals from mock Alpha Vantage");

    let server = MockServer::start().await;
    mount_json(&server, "OVERVIEW", fixtures::overview("IBM")).await;
    mount_json(&server, "INCOME_STATEMENT", fixtures::income_statement("IBM")).await;
    mount_json(&server, "BALANCE_SHEET", fixtures::balance_sheet("IBM")).await;

    let client = AlphaVantageClient::new(&config_for(&server)).unwrap();
    let snapshot = client.fetch_fundamentals(" ibm ").await.unwrap();
    log_test_data("Snapshot", &snapshot);

    assert_eq!(snapshot.symbol, "IBM");
    assert_eq!(snapshot.fiscal_years, 3);

    let m = snapshot.metrics;
    assert!((m.roe - 20.0).abs() < 1e-9);
    assert_eq!(m.pe, 20.0);
    assert_eq!(m.pb, 2.0);
    assert_eq!(m.eps, 9.5);
    assert!((m.debt_equity - 0.3).abs() < 1e-9);
    assert!((m.sales_growth - 12.0).abs() < 1e-6);
    assert!((m.profit_growth - 12.0).abs() < 1e-6);

    let report = evaluate(&m);
    assert_eq!(report.score, 10);
    assert_eq!(report.verdict, Verdict::Good);

    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_symbol() {
    let server = MockServer::start().await;
    mount_json(&server, "OVERVIEW", serde_json::json!({})).await;

    let client = AlphaVantageClient::new(&config_for(&server)).unwrap();
    let result = client.fetch_fundamentals("NOPE").await;

    assert_matches!(result, Err(ProviderError::UnknownSymbol(ref s)) if s == "NOPE");
    // No statements requested once the overview comes back empty
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_rate_limit_notice() {
    let server = MockServer::start().await;
    mount_json(&server, "OVERVIEW", fixtures::rate_limit_note()).await;

    let client = AlphaVantageClient::new(&config_for(&server)).unwrap();
    let result = client.fetch_fundamentals("IBM").await;

    assert_matches!(result, Err(ProviderError::Notice(ref message)) if message.contains("5 calls per minute"));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = AlphaVantageClient::new(&config_for(&server)).unwrap();
    let result = client.get_overview("IBM").await;

    assert_matches!(result, Err(ProviderError::Status { status: 503 }));
}

#[tokio::test]
async fn test_missing_statements_use_defaults() {
    let server = MockServer::start().await;
    mount_json(&server, "OVERVIEW", serde_json::json!({ "Symbol": "TINY", "PERatio": "None" })).await;
    mount_json(&server, "INCOME_STATEMENT", serde_json::json!({ "symbol": "TINY" })).await;
    mount_json(&server, "BALANCE_SHEET", serde_json::json!({ "symbol": "TINY", "annualReports": [] })).await;

    let client = AlphaVantageClient::new(&config_for(&server)).unwrap();
    let snapshot = client.fetch_fundamentals("tiny").await.unwrap();

    assert_eq!(snapshot.metrics, stock_health::FinancialMetrics::default());
    assert_eq!(snapshot.fiscal_years, 0);
}

#[tokio::test]
async fn test_fiscal_years_counts_reports_with_gaps() {
    let server = MockServer::start().await;
    mount_json(&server, "OVERVIEW", fixtures::overview("GAP")).await;
    mount_json(
        &server,
        "INCOME_STATEMENT",
        serde_json::json!({
            "symbol": "GAP",
            "annualReports": [
                { "fiscalDateEnding": "2024-12-31", "totalRevenue": "121", "netIncome": "None" },
                { "fiscalDateEnding": "2023-12-31", "totalRevenue": "None", "netIncome": "None" },
                { "fiscalDateEnding": "2022-12-31", "totalRevenue": "100", "netIncome": "10" }
            ]
        }),
    )
    .await;
    mount_json(&server, "BALANCE_SHEET", fixtures::balance_sheet("GAP")).await;

    let client = AlphaVantageClient::new(&config_for(&server)).unwrap();
    let snapshot = client.fetch_fundamentals("GAP").await.unwrap();

    assert_eq!(snapshot.fiscal_years, 3);
    // The gap year is skipped, leaving one growth period between the endpoints
    assert!((snapshot.metrics.sales_growth - 21.0).abs() < 1e-6);
    // A single net income point has no growth period
    assert_eq!(snapshot.metrics.profit_growth, 0.0);
}

#[tokio::test]
async fn test_empty_symbol_is_rejected_without_request() {
    let server = MockServer::start().await;

    let client = AlphaVantageClient::new(&config_for(&server)).unwrap();
    let result = client.fetch_fundamentals("   ").await;

    assert_matches!(result, Err(ProviderError::EmptySymbol));
    assert!(server.received_requests().await.unwrap().is_empty());
}
