//! Boletin CLI binary.
//!
//! Provides the command-line interface for the boletin market report.

mod cmd;

use std::{path::PathBuf, process};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boletin")]
#[command(about = "Market bulletin: top news, upcoming earnings and price performance", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where data comes from and which tickers to cover.
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Data provider (fmp, snapshot); unknown names fall back to fmp
    #[arg(short, long, global = true, default_value = "fmp")]
    provider: String,

    /// Snapshot file for the snapshot provider
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Ticker universe (sp100, sp50, sp20, sp10)
    #[arg(short, long, global = true, default_value = "sp100")]
    universe: String,

    /// Explicit tickers, overriding the universe
    #[arg(short, long, global = true, value_delimiter = ',')]
    tickers: Vec<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the most market-moving recent news
    News {
        /// Recency window in days
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        days_behind: i64,

        /// Number of items to keep
        #[arg(short = 'k', long, default_value_t = 10, allow_negative_numbers = true)]
        top_k: i64,

        /// Keyword vocabulary (hard-event, financial, product, management, important)
        #[arg(long, default_value = "hard-event")]
        keywords: String,
    },

    /// List the next upcoming earnings announcements
    Earnings {
        /// Look-ahead window in days
        #[arg(short, long, default_value_t = 30, allow_negative_numbers = true)]
        days_ahead: i64,

        /// Number of announcements
        #[arg(short = 'n', long, default_value_t = 5, allow_negative_numbers = true)]
        count: i64,
    },

    /// Show the biggest winners and losers
    Performance {
        /// Window length in days
        #[arg(short, long, default_value_t = 180, allow_negative_numbers = true)]
        window: i64,

        /// Number of winners and of losers
        #[arg(short = 'n', long, default_value_t = 3, allow_negative_numbers = true)]
        count: i64,
    },

    /// Build the full markdown report
    Report {
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// News recency window in days
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        days_behind: i64,

        /// Earnings look-ahead window in days
        #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
        days_ahead: i64,

        /// Price-performance window in days
        #[arg(long, default_value_t = 180, allow_negative_numbers = true)]
        window: i64,
    },

    /// List tickers and company names in a universe
    Universe {
        /// Universe name; defaults to --universe
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let source = cli.source;

    match cli.command {
        Commands::News {
            days_behind,
            top_k,
            keywords,
        } => {
            cmd::news::run(&source, days_behind, top_k, &keywords).await?;
        }
        Commands::Earnings { days_ahead, count } => {
            cmd::earnings::run(&source, days_ahead, count).await?;
        }
        Commands::Performance { window, count } => {
            cmd::performance::run(&source, window, count).await?;
        }
        Commands::Report {
            output,
            days_behind,
            days_ahead,
            window,
        } => {
            let windows = cmd::report::Windows {
                days_behind,
                days_ahead,
                window,
            };
            cmd::report::run(&source, windows, output.as_deref()).await?;
        }
        Commands::Universe { name } => {
            cmd::universe::run(name.as_deref().unwrap_or(&source.universe), source.format)?;
        }
    }

    Ok(())
}
