use crate::models::FinancialMetrics;

/// Manual-entry fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    Roe,
    Pe,
    Pb,
    Eps,
    DebtEquity,
    SalesGrowth,
    ProfitGrowth,
}

impl MetricField {
    pub const ALL: [MetricField; 7] = [
        MetricField::Roe,
        MetricField::Pe,
        MetricField::Pb,
        MetricField::Eps,
        MetricField::DebtEquity,
        MetricField::SalesGrowth,
        MetricField::ProfitGrowth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricField::Roe => "Profit efficiency (ROE %)",
            MetricField::Pe => "Share Price vs Earnings (P/E)",
            MetricField::Pb => "Share Price vs Company Value (P/B)",
            MetricField::Eps => "Profit per share (EPS)",
            MetricField::DebtEquity => "Debt compared to own money (Debt/Equity)",
            MetricField::SalesGrowth => "Average sales growth (%)",
            MetricField::ProfitGrowth => "Average profit growth (%)",
        }
    }

    fn set(&self, metrics: &mut FinancialMetrics, value: f64) {
        match self {
            MetricField::Roe => metrics.roe = value,
            MetricField::Pe => metrics.pe = value,
            MetricField::Pb => metrics.pb = value,
            MetricField::Eps => metrics.eps = value,
            MetricField::DebtEquity => metrics.debt_equity = value,
            MetricField::SalesGrowth => metrics.sales_growth = value,
            MetricField::ProfitGrowth => metrics.profit_growth = value,
        }
    }
}

/// Text buffers behind the manual-entry form
#[derive(Debug, Clone, Default)]
pub struct MetricForm {
    values: [String; 7],
    selected: usize,
}

impl MetricForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_field(&self) -> MetricField {
        MetricField::ALL[self.selected]
    }

    pub fn value(&self, index: usize) -> &str {
        &self.values[index]
    }

    /// Fields paired with their current text
    pub fn entries(&self) -> impl Iterator<Item = (MetricField, &str)> {
        MetricField::ALL
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % self.values.len();
    }

    pub fn previous_field(&mut self) {
        self.selected = if self.selected == 0 {
            self.values.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Append a character to the selected field. Only number-like input is accepted.
    pub fn input_char(&mut self, c: char) -> bool {
        if c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E' | '+') {
            self.values[self.selected].push(c);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) {
        self.values[self.selected].pop();
    }

    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
        self.selected = 0;
    }

    /// Fill every field from existing metrics at full precision, so
    /// re-scoring the form gives the same buckets
    pub fn load(&mut self, metrics: &FinancialMetrics) {
        let values = [
            metrics.roe,
            metrics.pe,
            metrics.pb,
            metrics.eps,
            metrics.debt_equity,
            metrics.sales_growth,
            metrics.profit_growth,
        ];
        for (buffer, value) in self.values.iter_mut().zip(values) {
            *buffer = value.to_string();
        }
    }

    /// Parse the form. Empty fields count as zero; unparseable fields count
    /// as zero and are reported back by label.
    pub fn to_metrics(&self) -> (FinancialMetrics, Vec<&'static str>) {
        let mut metrics = FinancialMetrics::default();
        let mut invalid = Vec::new();

        for (field, text) in self.entries() {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            match text.parse::<f64>() {
                Ok(value) => field.set(&mut metrics, value),
                Err(_) => invalid.push(field.label()),
            }
        }

        (metrics, invalid)
    }
}
