use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::fundamentals::metrics_from_statements;
use super::{ApiRateLimiter, FundamentalsProvider, ProviderError};
use crate::models::{Config, FundamentalsSnapshot};

/// Payload keys Alpha Vantage uses to report problems with a 200 status
const NOTICE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Alpha Vantage `OVERVIEW` response. All numbers arrive as strings.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyOverview {
    #[serde(rename = "Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "ReturnOnEquityTTM")]
    pub return_on_equity_ttm: Option<String>,
    #[serde(rename = "PERatio")]
    pub pe_ratio: Option<String>,
    #[serde(rename = "PriceToBookRatio")]
    pub price_to_book_ratio: Option<String>,
    #[serde(rename = "EPS")]
    pub eps: Option<String>,
}

/// Alpha Vantage `INCOME_STATEMENT` response
#[derive(Debug, Default, Deserialize)]
pub struct IncomeStatement {
    pub symbol: Option<String>,
    #[serde(rename = "annualReports", default)]
    pub annual_reports: Vec<IncomeReport>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IncomeReport {
    #[serde(rename = "fiscalDateEnding")]
    pub fiscal_date_ending: Option<String>,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: Option<String>,
    #[serde(rename = "netIncome")]
    pub net_income: Option<String>,
}

/// Alpha Vantage `BALANCE_SHEET` response
#[derive(Debug, Default, Deserialize)]
pub struct BalanceSheet {
    pub symbol: Option<String>,
    #[serde(rename = "annualReports", default)]
    pub annual_reports: Vec<BalanceReport>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BalanceReport {
    #[serde(rename = "fiscalDateEnding")]
    pub fiscal_date_ending: Option<String>,
    #[serde(rename = "totalShareholderEquity")]
    pub total_shareholder_equity: Option<String>,
    #[serde(rename = "shortLongTermDebtTotal")]
    pub short_long_term_debt_total: Option<String>,
}

/// Alpha Vantage API client
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
    rate_limiter: ApiRateLimiter,
}

impl AlphaVantageClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let api_key = config
            .alpha_vantage_api_key
            .clone()
            .ok_or(ProviderError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent("stock-health/0.1")
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: config.alpha_vantage_base_url.clone(),
            rate_limiter: ApiRateLimiter::new(config.rate_limit_per_minute),
        })
    }

    /// Fetch company overview ratios
    pub async fn get_overview(&self, symbol: &str) -> Result<CompanyOverview, ProviderError> {
        self.query("OVERVIEW", symbol).await
    }

    /// Fetch annual income statements, newest first
    pub async fn get_income_statement(&self, symbol: &str) -> Result<IncomeStatement, ProviderError> {
        self.query("INCOME_STATEMENT", symbol).await
    }

    /// Fetch annual balance sheets, newest first
    pub async fn get_balance_sheet(&self, symbol: &str) -> Result<BalanceSheet, ProviderError> {
        self.query("BALANCE_SHEET", symbol).await
    }

    fn query_url(&self, function: &str, symbol: &str) -> Result<Url, ProviderError> {
        let url = Url::parse_with_params(
            &self.base_url,
            &[("function", function), ("symbol", symbol), ("apikey", self.api_key.as_str())],
        )?;
        Ok(url)
    }

    async fn query<T: DeserializeOwned>(
        &self,
        function: &'static str,
        symbol: &str,
    ) -> Result<T, ProviderError> {
        let url = self.query_url(function, symbol)?;

        self.rate_limiter.wait().await;

        // The URL carries the API key, so only log the call itself
        debug!("Requesting {} for {}", function, symbol);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("{} for {} failed with HTTP {}", function, symbol, status);
            return Err(ProviderError::Status { status });
        }

        let body: Value = response.json().await?;

        if let Some(notice) = provider_notice(&body) {
            warn!("{} for {} returned notice: {}", function, symbol, notice);
            return Err(ProviderError::Notice(notice));
        }

        serde_json::from_value(body).map_err(|source| ProviderError::Parse { function, source })
    }
}

/// Extract the message from a notice payload, if the body is one
fn provider_notice(body: &Value) -> Option<String> {
    NOTICE_KEYS
        .iter()
        .find_map(|key| body.get(*key))
        .map(|message| match message.as_str() {
            Some(text) => text.to_string(),
            None => message.to_string(),
        })
}

#[async_trait]
impl FundamentalsProvider for AlphaVantageClient {
    async fn fetch_fundamentals(&self, symbol: &str) -> Result<FundamentalsSnapshot, ProviderError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ProviderError::EmptySymbol);
        }

        info!("Fetching fundamentals for {}", symbol);

        let overview = self.get_overview(&symbol).await?;
        if overview.symbol.is_none() {
            return Err(ProviderError::UnknownSymbol(symbol));
        }

        let income = self.get_income_statement(&symbol).await?;
        let balance = self.get_balance_sheet(&symbol).await?;

        let metrics = metrics_from_statements(&overview, &income, &balance);
        debug!("Derived metrics for {}: {:?}", symbol, metrics);

        Ok(FundamentalsSnapshot {
            fiscal_years: income.annual_reports.len(),
            symbol,
            metrics,
            fetched_at: Utc::now(),
        })
    }
}
