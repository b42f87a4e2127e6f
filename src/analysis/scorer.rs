use crate::models::{Explanation, FinancialMetrics, HealthReport, StrengthOverview, Tone, Verdict};

// Bucket thresholds. Upper buckets are inclusive.
pub const ROE_STRONG: f64 = 18.0;
pub const ROE_FAIR: f64 = 12.0;
pub const PE_CHEAP: f64 = 25.0;
pub const PE_FAIR: f64 = 40.0;
pub const PB_CHEAP: f64 = 3.0;
pub const PB_FAIR: f64 = 6.0;
pub const GROWTH_STRONG: f64 = 10.0;
pub const GROWTH_SLOW: f64 = 5.0;
pub const DEBT_LOW: f64 = 0.5;
pub const DEBT_FAIR: f64 = 1.0;

/// Points awarded for return on equity
pub fn roe_points(roe: f64) -> u8 {
    if roe >= ROE_STRONG {
        2
    } else if roe >= ROE_FAIR {
        1
    } else {
        0
    }
}

/// Points awarded for the price/earnings ratio
pub fn pe_points(pe: f64) -> u8 {
    if pe <= PE_CHEAP {
        2
    } else if pe <= PE_FAIR {
        1
    } else {
        0
    }
}

/// Points awarded for the price/book ratio
pub fn pb_points(pb: f64) -> u8 {
    if pb <= PB_CHEAP {
        2
    } else if pb <= PB_FAIR {
        1
    } else {
        0
    }
}

/// Points awarded for growth. Full marks need both sales and profit growth;
/// the middle bucket only looks at sales.
pub fn growth_points(sales_growth: f64, profit_growth: f64) -> u8 {
    if sales_growth >= GROWTH_STRONG && profit_growth >= GROWTH_STRONG {
        2
    } else if sales_growth >= GROWTH_SLOW {
        1
    } else {
        0
    }
}

/// Points awarded for the debt/equity ratio
pub fn debt_points(debt_equity: f64) -> u8 {
    if debt_equity <= DEBT_LOW {
        2
    } else if debt_equity <= DEBT_FAIR {
        1
    } else {
        0
    }
}

/// Rule-based health scorer over five ratio buckets
#[derive(Debug, Clone)]
pub struct Scorer {
    currency: String,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new("₹")
    }
}

impl Scorer {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Score a set of metrics. Never fails; NaN lands in the lowest bucket.
    pub fn evaluate(&self, metrics: &FinancialMetrics) -> HealthReport {
        let roe = roe_points(metrics.roe);
        let pe = pe_points(metrics.pe);
        let pb = pb_points(metrics.pb);
        let growth = growth_points(metrics.sales_growth, metrics.profit_growth);
        let debt = debt_points(metrics.debt_equity);

        let score = roe + pe + pb + growth + debt;

        let explanations = vec![
            self.explain_roe(roe, metrics.roe),
            self.explain_pe(pe, metrics.pe),
            explain(pb, [
                "Share price is close to company's real value.",
                "Share price is much higher than company value.",
                "Share price is far above company's actual worth.",
            ]),
            explain(growth, [
                "Sales and profits are growing well year after year.",
                "Growth is present but slow.",
                "Business growth is weak.",
            ]),
            explain(debt, [
                "Company does not depend much on loans.",
                "Company uses some loans, manageable.",
                "Company depends heavily on borrowed money.",
            ]),
        ];

        HealthReport {
            score,
            verdict: Verdict::from_score(score),
            explanations,
            chart: strength_overview(metrics),
        }
    }

    fn explain_roe(&self, points: u8, roe: f64) -> Explanation {
        let c = &self.currency;
        let message = match points {
            2 => format!("The company earns about {c}{roe:.0} for every {c}100 invested. This is very good."),
            1 => format!("The company earns about {c}{roe:.0} for every {c}100 invested. Acceptable, not great."),
            _ => "The company earns very little from investors' money.".to_string(),
        };
        Explanation { tone: Tone::from_points(points), message }
    }

    fn explain_pe(&self, points: u8, pe: f64) -> Explanation {
        let c = &self.currency;
        let message = match points {
            2 => format!("You are paying {c}{pe:.0} to earn {c}1 today. This is reasonable."),
            1 => format!("You are paying {c}{pe:.0} to earn {c}1. Stock expects high future growth."),
            _ => format!("You are paying {c}{pe:.0} to earn {c}1. Very expensive."),
        };
        Explanation { tone: Tone::from_points(points), message }
    }
}

/// Pick the message for a bucket from `[two, one, zero]` point texts
fn explain(points: u8, messages: [&str; 3]) -> Explanation {
    let message = match points {
        2 => messages[0],
        1 => messages[1],
        _ => messages[2],
    };
    Explanation {
        tone: Tone::from_points(points),
        message: message.to_string(),
    }
}

/// Chart bar heights. Growth here looks at sales only.
pub fn strength_overview(metrics: &FinancialMetrics) -> StrengthOverview {
    let profit = metrics.roe / 10.0;
    let profit = if profit.is_nan() {
        0.0
    } else {
        profit.clamp(0.0, StrengthOverview::MAX)
    };

    let growth = if metrics.sales_growth >= GROWTH_STRONG {
        2
    } else if metrics.sales_growth >= GROWTH_SLOW {
        1
    } else {
        0
    };

    StrengthOverview {
        profit,
        valuation: f64::from(pe_points(metrics.pe)),
        growth: f64::from(growth),
        debt: f64::from(debt_points(metrics.debt_equity)),
    }
}

/// Score metrics with the default currency symbol
pub fn evaluate(metrics: &FinancialMetrics) -> HealthReport {
    Scorer::default().evaluate(metrics)
}
