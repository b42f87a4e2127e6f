use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use super::form::MetricForm;
use crate::analysis::Scorer;
use crate::api::{FundamentalsProvider, ProviderError};
use crate::models::FundamentalsSnapshot;
use crate::report::AnalysisOutput;

/// How the user supplies the numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Manual,
    Live,
}

impl InputMode {
    pub const TITLES: [&'static str; 2] = ["🔢 Enter values manually", "🌐 Fetch live data using stock name"];

    pub fn index(&self) -> usize {
        match self {
            InputMode::Manual => 0,
            InputMode::Live => 1,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            InputMode::Manual => InputMode::Live,
            InputMode::Live => InputMode::Manual,
        }
    }
}

/// Status line state
#[derive(Debug, Clone, PartialEq)]
pub enum AppStatus {
    Idle,
    Loading { operation: String },
    Success { message: String },
    Warning { message: String },
    Error { message: String },
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    None,
    Quit,
    Fetch(String),
}

/// Interactive analyzer state, independent of the terminal
pub struct StockHealthApp {
    pub mode: InputMode,
    pub form: MetricForm,
    pub ticker: String,
    pub status: AppStatus,
    pub output: Option<AnalysisOutput>,
    scorer: Scorer,
    live_enabled: bool,
}

impl StockHealthApp {
    pub fn new(scorer: Scorer, live_enabled: bool) -> Self {
        Self {
            mode: InputMode::Manual,
            form: MetricForm::new(),
            ticker: String::new(),
            status: AppStatus::Idle,
            output: None,
            scorer,
            live_enabled,
        }
    }

    pub fn live_enabled(&self) -> bool {
        self.live_enabled
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return AppAction::Quit;
        }

        if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            self.mode = self.mode.toggle();
            self.status = AppStatus::Idle;
            return AppAction::None;
        }

        match self.mode {
            InputMode::Manual => self.handle_manual_key(key.code),
            InputMode::Live => self.handle_live_key(key.code),
        }
    }

    fn handle_manual_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Up => self.form.previous_field(),
            KeyCode::Down => self.form.next_field(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Delete => {
                self.form.clear();
                self.output = None;
                self.status = AppStatus::Idle;
            }
            KeyCode::Enter => self.score_manual(),
            KeyCode::Char(c) => {
                self.form.input_char(c);
            }
            _ => {}
        }
        AppAction::None
    }

    fn handle_live_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Backspace => {
                self.ticker.pop();
            }
            KeyCode::Char(c) if !c.is_whitespace() => self.ticker.push(c),
            KeyCode::Enter => return self.request_fetch(),
            _ => {}
        }
        AppAction::None
    }

    /// Score whatever is in the manual form
    pub fn score_manual(&mut self) {
        let (metrics, invalid) = self.form.to_metrics();
        let report = self.scorer.evaluate(&metrics);
        let score = report.score;
        self.output = Some(AnalysisOutput::manual(metrics, report));

        self.status = if invalid.is_empty() {
            AppStatus::Success {
                message: format!("Scored manual entry: {} / 10", score),
            }
        } else {
            AppStatus::Warning {
                message: format!("Treated as 0 (not a number): {}", invalid.join(", ")),
            }
        };
    }

    fn request_fetch(&mut self) -> AppAction {
        let symbol = self.ticker.trim().to_string();
        if symbol.is_empty() {
            self.status = AppStatus::Warning {
                message: "Enter a stock name first, e.g. IBM or TCS.BSE".to_string(),
            };
            return AppAction::None;
        }
        if !self.live_enabled {
            self.status = AppStatus::Error {
                message: ProviderError::MissingApiKey.to_string(),
            };
            return AppAction::None;
        }

        self.status = AppStatus::Loading {
            operation: format!("Fetching live data for {}", symbol),
        };
        AppAction::Fetch(symbol)
    }

    /// Apply the outcome of a live fetch
    pub fn finish_fetch(&mut self, result: Result<FundamentalsSnapshot, ProviderError>) {
        match result {
            Ok(snapshot) => {
                let report = self.scorer.evaluate(&snapshot.metrics);
                info!("Scored {}: {} / 10", snapshot.symbol, report.score);
                // Keep the fetched values visible in the manual form too
                self.form.load(&snapshot.metrics);
                self.status = AppStatus::Success {
                    message: format!(
                        "Fetched {} ({} annual reports)",
                        snapshot.symbol, snapshot.fiscal_years
                    ),
                };
                self.output = Some(AnalysisOutput::fetched(&snapshot, report));
            }
            Err(e) => {
                warn!("Live fetch failed: {}", e);
                self.status = AppStatus::Error {
                    message: e.to_string(),
                };
            }
        }
    }

    /// Run a fetch against the provider and apply the result
    pub async fn fetch_with(&mut self, provider: &dyn FundamentalsProvider, symbol: &str) {
        let result = provider.fetch_fundamentals(symbol).await;
        self.finish_fetch(result);
    }
}
