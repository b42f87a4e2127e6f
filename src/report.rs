use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

use crate::models::{FinancialMetrics, FundamentalsSnapshot, HealthReport, StrengthOverview};

pub const DISCLAIMER: &str = "⚠ Educational tool. Always combine with long-term thinking.";

/// Width of a full-strength bar in the text chart
const BAR_WIDTH: usize = 20;

/// A scored stock, ready for output
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    pub metrics: FinancialMetrics,
    #[serde(flatten)]
    pub report: HealthReport,
}

impl AnalysisOutput {
    pub fn manual(metrics: FinancialMetrics, report: HealthReport) -> Self {
        Self {
            symbol: None,
            fetched_at: None,
            metrics,
            report,
        }
    }

    pub fn fetched(snapshot: &FundamentalsSnapshot, report: HealthReport) -> Self {
        Self {
            symbol: Some(snapshot.symbol.clone()),
            fetched_at: Some(snapshot.fetched_at),
            metrics: snapshot.metrics,
            report,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text rendering for the terminal
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let m = &self.metrics;
        let report = &self.report;

        // Writing to a String cannot fail
        let _ = writeln!(out, "📊 Simple Stock Analyzer");
        if let Some(symbol) = &self.symbol {
            let _ = writeln!(out, "Stock: {}", symbol);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Profit efficiency (ROE %):      {:>10.2}", m.roe);
        let _ = writeln!(out, "Share price vs earnings (P/E):  {:>10.2}", m.pe);
        let _ = writeln!(out, "Share price vs value (P/B):     {:>10.2}", m.pb);
        let _ = writeln!(out, "Profit per share (EPS):         {:>10.2}", m.eps);
        let _ = writeln!(out, "Debt/Equity:                    {:>10.2}", m.debt_equity);
        let _ = writeln!(out, "Average sales growth (%):       {:>10.2}", m.sales_growth);
        let _ = writeln!(out, "Average profit growth (%):      {:>10.2}", m.profit_growth);
        let _ = writeln!(out);

        let _ = writeln!(out, "📌 Final Result");
        let _ = writeln!(out, "Score: {} / {}", report.score, HealthReport::MAX_SCORE);
        let _ = writeln!(out, "{}", report.verdict);
        let _ = writeln!(out);

        let _ = writeln!(out, "🧠 Explained in Simple Words");
        for line in report.explanation_lines() {
            let _ = writeln!(out, "• {}", line);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "📊 Strength Overview");
        for line in strength_bars(&report.chart) {
            let _ = writeln!(out, "{}", line);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", DISCLAIMER);

        out
    }
}

/// ASCII bars for the strength chart, one line per label
pub fn strength_bars(chart: &StrengthOverview) -> Vec<String> {
    chart
        .bars()
        .iter()
        .map(|(label, value)| {
            let filled = (value / StrengthOverview::MAX * BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(BAR_WIDTH);
            format!(
                "{:<10}|{}{}| {:.1}",
                label,
                "█".repeat(filled),
                " ".repeat(BAR_WIDTH - filled),
                value
            )
        })
        .collect()
}
