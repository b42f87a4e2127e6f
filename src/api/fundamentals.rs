//! Conversion from raw provider statements to scorer inputs

use super::alpha_vantage_client::{BalanceSheet, CompanyOverview, IncomeStatement};
use crate::analysis::cagr;
use crate::models::FinancialMetrics;

/// Parse a provider number. Alpha Vantage uses "None" and "-" for gaps.
pub fn parse_field(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") || value == "-" {
        return None;
    }
    value.parse().ok()
}

/// Build scorer inputs from the three statements.
///
/// Missing ratios default to zero. Missing equity defaults to one so the
/// debt/equity division stays defined.
pub fn metrics_from_statements(
    overview: &CompanyOverview,
    income: &IncomeStatement,
    balance: &BalanceSheet,
) -> FinancialMetrics {
    let roe = parse_field(overview.return_on_equity_ttm.as_deref()).unwrap_or(0.0) * 100.0;
    let pe = parse_field(overview.pe_ratio.as_deref()).unwrap_or(0.0);
    let pb = parse_field(overview.price_to_book_ratio.as_deref()).unwrap_or(0.0);
    let eps = parse_field(overview.eps.as_deref()).unwrap_or(0.0);

    let latest_balance = balance.annual_reports.first();
    let debt = latest_balance
        .and_then(|r| parse_field(r.short_long_term_debt_total.as_deref()))
        .unwrap_or(0.0);
    let equity = latest_balance
        .and_then(|r| parse_field(r.total_shareholder_equity.as_deref()))
        .unwrap_or(1.0);
    let debt_equity = if equity != 0.0 { debt / equity } else { 0.0 };

    let revenue: Vec<f64> = income
        .annual_reports
        .iter()
        .filter_map(|r| parse_field(r.total_revenue.as_deref()))
        .collect();
    let net_income: Vec<f64> = income
        .annual_reports
        .iter()
        .filter_map(|r| parse_field(r.net_income.as_deref()))
        .collect();

    FinancialMetrics {
        roe,
        pe,
        pb,
        eps,
        debt_equity,
        sales_growth: cagr(&revenue),
        profit_growth: cagr(&net_income),
    }
}
