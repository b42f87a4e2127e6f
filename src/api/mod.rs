use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use thiserror::Error;
use tracing::debug;

use crate::models::FundamentalsSnapshot;

pub mod alpha_vantage_client;
pub mod fundamentals;

pub use alpha_vantage_client::AlphaVantageClient;
pub use fundamentals::metrics_from_statements;

/// Errors raised while fetching fundamentals from a provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("ALPHA_VANTAGE_API_KEY environment variable required for live data")]
    MissingApiKey,

    #[error("stock symbol must not be empty")]
    EmptySymbol,

    #[error("invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    /// Rate limit, premium-only endpoint, or invalid call reported in the payload
    #[error("provider notice: {0}")]
    Notice(String),

    #[error("failed to parse {function} response: {source}")]
    Parse {
        function: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("no fundamentals found for symbol {0}")]
    UnknownSymbol(String),
}

/// Rate limiter shared by every request a client makes
pub struct ApiRateLimiter {
    limiter: DefaultDirectRateLimiter,
}

impl ApiRateLimiter {
    pub fn new(requests_per_minute: u32) -> Self {
        // Zero would stall forever; treat it as one request a minute
        let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN);

        Self {
            limiter: RateLimiter::direct(Quota::per_minute(per_minute)),
        }
    }

    pub async fn wait(&self) {
        if self.limiter.check().is_err() {
            debug!("Rate limit reached, waiting for next slot");
            self.limiter.until_ready().await;
        }
    }
}

/// Source of live fundamentals for a stock symbol
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    async fn fetch_fundamentals(&self, symbol: &str) -> Result<FundamentalsSnapshot, ProviderError>;
}
