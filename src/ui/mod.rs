use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{info, warn};

use crate::analysis::Scorer;
use crate::api::{AlphaVantageClient, FundamentalsProvider};
use crate::models::Config;

pub mod app;
pub mod components;
pub mod form;
pub mod layout;
pub mod view;

pub use app::{AppAction, AppStatus, InputMode, StockHealthApp};

/// Run the interactive analyzer until the user quits
pub async fn run_app(config: &Config) -> Result<()> {
    let provider = match AlphaVantageClient::new(config) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("Live data unavailable: {}", e);
            None
        }
    };

    let mut app = StockHealthApp::new(
        Scorer::new(config.currency_symbol.clone()),
        provider.is_some(),
    );

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(
        &mut terminal,
        &mut app,
        provider.as_ref().map(|p| p as &dyn FundamentalsProvider),
    )
    .await;

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut StockHealthApp,
    provider: Option<&dyn FundamentalsProvider>,
) -> Result<()> {
    loop {
        terminal.draw(|f| view::render(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key) {
            AppAction::None => {}
            AppAction::Quit => {
                info!("Leaving analyzer");
                return Ok(());
            }
            AppAction::Fetch(symbol) => {
                // Show the loading status before blocking on the network
                terminal.draw(|f| view::render(f, app))?;
                if let Some(provider) = provider {
                    app.fetch_with(provider, &symbol).await;
                }
            }
        }
    }
}
