use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw financial ratios for one stock, as entered or fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Return on equity, in percent
    pub roe: f64,
    pub pe: f64,
    pub pb: f64,
    pub eps: f64,
    pub debt_equity: f64,
    /// Average annual sales growth, in percent
    pub sales_growth: f64,
    /// Average annual profit growth, in percent
    pub profit_growth: f64,
}

/// Overall verdict derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Good,
    Average,
    Risky,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            Verdict::Good
        } else if score >= 5 {
            Verdict::Average
        } else {
            Verdict::Risky
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Good => "GOOD STOCK (Worth considering)",
            Verdict::Average => "AVERAGE (Wait & watch)",
            Verdict::Risky => "RISKY (Better avoid)",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Verdict::Good => "🟢",
            Verdict::Average => "🟡",
            Verdict::Risky => "🔴",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.label())
    }
}

/// How favourable a single finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Caution,
    Negative,
}

impl Tone {
    /// Tone for a bucket worth 0, 1 or 2 points
    pub fn from_points(points: u8) -> Self {
        match points {
            2 => Tone::Positive,
            1 => Tone::Caution,
            _ => Tone::Negative,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Tone::Positive => "✅",
            Tone::Caution => "⚠",
            Tone::Negative => "❌",
        }
    }
}

/// One plain-language finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub tone: Tone,
    pub message: String,
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tone.marker(), self.message)
    }
}

/// Bar heights for the strength chart, each on a 0-2 scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthOverview {
    pub profit: f64,
    pub valuation: f64,
    pub growth: f64,
    pub debt: f64,
}

impl StrengthOverview {
    pub const LABELS: [&'static str; 4] = ["Profit", "Valuation", "Growth", "Debt"];
    pub const MAX: f64 = 2.0;

    /// Values in chart order, paired with their labels
    pub fn bars(&self) -> [(&'static str, f64); 4] {
        [
            (Self::LABELS[0], self.profit),
            (Self::LABELS[1], self.valuation),
            (Self::LABELS[2], self.growth),
            (Self::LABELS[3], self.debt),
        ]
    }
}

/// Result of scoring one set of metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub score: u8,
    pub verdict: Verdict,
    pub explanations: Vec<Explanation>,
    pub chart: StrengthOverview,
}

impl HealthReport {
    pub const MAX_SCORE: u8 = 10;

    /// Explanations rendered with their tone markers
    pub fn explanation_lines(&self) -> Vec<String> {
        self.explanations.iter().map(|e| e.to_string()).collect()
    }
}

/// Metrics fetched from a market-data provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    pub symbol: String,
    pub metrics: FinancialMetrics,
    pub fetched_at: DateTime<Utc>,
    /// Number of annual income statements the provider returned, including
    /// years whose revenue or net income was missing
    pub fiscal_years: usize,
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub alpha_vantage_api_key: Option<String>,
    pub alpha_vantage_base_url: String,
    pub rate_limit_per_minute: u32,
    pub request_timeout_secs: u64,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha_vantage_api_key: None,
            alpha_vantage_base_url: "https://www.alphavantage.co/query".to_string(),
            rate_limit_per_minute: 5,
            request_timeout_secs: 30,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            alpha_vantage_api_key: lookup("ALPHA_VANTAGE_API_KEY")
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            alpha_vantage_base_url: lookup("ALPHA_VANTAGE_BASE_URL")
                .unwrap_or(defaults.alpha_vantage_base_url),
            rate_limit_per_minute: parse_var(&lookup, "RATE_LIMIT_PER_MINUTE")?
                .unwrap_or(defaults.rate_limit_per_minute),
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs),
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
        })
    }
}

/// Parse an optional numeric variable; unset or blank means "use the default"
fn parse_var<F, T>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| anyhow::anyhow!("{} must be a whole number, got '{}'", key, raw)),
        _ => Ok(None),
    }
}
