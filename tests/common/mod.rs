//! Common test utilities and helpers

pub mod fixtures;

/// Test data utilities
pub mod test_data {
    use chrono::Utc;
    use stock_health::models::{FinancialMetrics, FundamentalsSnapshot};

    /// Metrics that land in the top bucket everywhere
    pub fn strong_metrics() -> FinancialMetrics {
        FinancialMetrics {
            roe: 20.0,
            pe: 20.0,
            pb: 2.0,
            eps: 35.0,
            debt_equity: 0.3,
            sales_growth: 12.0,
            profit_growth: 12.0,
        }
    }

    /// Metrics that land in the bottom bucket everywhere
    pub fn weak_metrics() -> FinancialMetrics {
        FinancialMetrics {
            roe: 10.0,
            pe: 50.0,
            pb: 8.0,
            eps: 0.5,
            debt_equity: 2.0,
            sales_growth: 2.0,
            profit_growth: 2.0,
        }
    }

    pub fn snapshot(symbol: &str, metrics: FinancialMetrics) -> FundamentalsSnapshot {
        FundamentalsSnapshot {
            symbol: symbol.to_string(),
            metrics,
            fetched_at: Utc::now(),
            fiscal_years: 3,
        }
    }
}

/// Logging utilities for tests
pub mod logging {
    use std::sync::Once;
    use tracing::{debug, info};

    static INIT: Once = Once::new();

    /// Initialize test logging
    pub fn init_test_logging() {
        INIT.call_once(|| {
            // test-log may already have installed a subscriber
            let _ = tracing::subscriber::set_global_default(
                tracing_subscriber::fmt()
                    .with_env_filter("stock_health=debug,main=debug")
                    .with_test_writer()
                    .finish(),
            );
        });
    }

    /// Log test step
    pub fn log_test_step(step: &str) {
        info!("🧪 Test Step: {}", step);
    }

    /// Log test data
    pub fn log_test_data<T: std::fmt::Debug>(label: &str, data: &T) {
        debug!("📊 {}: {:?}", label, data);
    }
}
