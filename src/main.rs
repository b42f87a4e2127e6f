use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use stock_health::analysis::Scorer;
use stock_health::api::{AlphaVantageClient, FundamentalsProvider};
use stock_health::models::{Config, FinancialMetrics};
use stock_health::report::AnalysisOutput;
use stock_health::ui;

/// Simple stock health analyzer
#[derive(Parser)]
#[command(name = "stock-health")]
#[command(version)]
#[command(about = "Score a stock's financial health from five simple ratios")]
#[command(long_about = "
Scores a stock out of 10 using return on equity, P/E, P/B, sales and profit
growth, and debt/equity. Values can be entered by hand or fetched live from
Alpha Vantage (set ALPHA_VANTAGE_API_KEY). Educational tool, not advice.

Examples:
  stock-health manual --roe 20 --pe 20 --pb 2 --debt-equity 0.3 --sales-growth 12 --profit-growth 12
  stock-health fetch IBM --json
  stock-health tui
")]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Score values entered on the command line
    Manual(ManualArgs),

    /// Fetch live fundamentals for a stock and score them
    Fetch {
        /// Stock symbol, e.g. IBM or TCS.BSE
        symbol: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive terminal form (default)
    Tui,
}

#[derive(Args)]
struct ManualArgs {
    /// Profit efficiency (ROE %)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    roe: f64,

    /// Share price vs earnings (P/E)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pe: f64,

    /// Share price vs company value (P/B)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pb: f64,

    /// Profit per share (EPS)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    eps: f64,

    /// Debt compared to own money (Debt/Equity)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    debt_equity: f64,

    /// Average sales growth (%)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    sales_growth: f64,

    /// Average profit growth (%)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    profit_growth: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl ManualArgs {
    fn metrics(&self) -> FinancialMetrics {
        FinancialMetrics {
            roe: self.roe,
            pe: self.pe,
            pb: self.pb,
            eps: self.eps,
            debt_equity: self.debt_equity,
            sales_growth: self.sales_growth,
            profit_growth: self.profit_growth,
        }
    }
}

fn init_logging(verbose: bool, interactive: bool) -> Result<()> {
    // Keep the TUI quiet so log lines don't tear the alternate screen
    let default_level = match (interactive, verbose) {
        (true, _) => "stock_health=error",
        (false, true) => "stock_health=debug",
        (false, false) => "stock_health=warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;
    Ok(())
}

fn print_output(output: &AnalysisOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", output.to_json()?);
    } else {
        print!("{}", output.to_text());
    }
    Ok(())
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let scorer = Scorer::new(config.currency_symbol.clone());

    match cli.command.unwrap_or(Command::Tui) {
        Command::Manual(args) => {
            let metrics = args.metrics();
            debug!("Scoring manual metrics: {:?}", metrics);
            let output = AnalysisOutput::manual(metrics, scorer.evaluate(&metrics));
            print_output(&output, args.json)
        }
        Command::Fetch { symbol, json } => {
            let client = AlphaVantageClient::new(&config)?;
            let snapshot = client
                .fetch_fundamentals(&symbol)
                .await
                .with_context(|| format!("Failed to fetch live data for {}", symbol))?;
            let output = AnalysisOutput::fetched(&snapshot, scorer.evaluate(&snapshot.metrics));
            print_output(&output, json)
        }
        Command::Tui => {
            ui::run_app(&config).await?;
            println!("Thanks for using Simple Stock Analyzer!");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Command::Tui));

    if let Err(e) = init_logging(cli.verbose, interactive) {
        eprintln!("❌ Logging Error: {:#}", e);
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("❌ Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, config).await {
        error!("{:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
