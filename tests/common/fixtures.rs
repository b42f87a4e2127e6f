//! Canned Alpha Vantage payloads

use serde_json::{json, Value};

pub fn overview(symbol: &str) -> Value {
    json!({
        "Symbol": symbol,
        "Name": "International Business Machines",
        "ReturnOnEquityTTM": "0.2",
        "PERatio": "20.0",
        "PriceToBookRatio": "2.0",
        "EPS": "9.5",
        "DividendYield": "0.032"
    })
}

/// Revenue and net income both compound at 12% a year over two periods
pub fn income_statement(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "annualReports": [
            { "fiscalDateEnding": "2024-12-31", "totalRevenue": "125.44", "netIncome": "12.544" },
            { "fiscalDateEnding": "2023-12-31", "totalRevenue": "112", "netIncome": "11.2" },
            { "fiscalDateEnding": "2022-12-31", "totalRevenue": "100", "netIncome": "10" }
        ],
        "quarterlyReports": []
    })
}

pub fn balance_sheet(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "annualReports": [
            {
                "fiscalDateEnding": "2024-12-31",
                "totalShareholderEquity": "1000",
                "shortLongTermDebtTotal": "300"
            },
            {
                "fiscalDateEnding": "2023-12-31",
                "totalShareholderEquity": "900",
                "shortLongTermDebtTotal": "None"
            }
        ],
        "quarterlyReports": []
    })
}

pub fn rate_limit_note() -> Value {
    json!({
        "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."
    })
}
