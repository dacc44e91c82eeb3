//! `boletin performance`

use anyhow::Result;
use boletin::{Performance, PerformanceManager, PricePerformanceRecord};

use super::{print_header, print_rule};
use crate::{Format, SourceArgs};

pub(crate) async fn run(source: &SourceArgs, window: i64, count: i64) -> Result<()> {
    let manager = PerformanceManager::new(source.build_source()?)
        .with_tickers(source.resolve_tickers()?)
        .with_window(window);

    let ranked = manager.select(count).await?;

    match source.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
        Format::Text => print_performance(&ranked, manager.window()),
    }
    Ok(())
}

fn print_performance(ranked: &Performance, window: u32) {
    print_header("Price Performance");

    if ranked.is_empty() {
        println!("No price data available.\n");
        return;
    }
    print_rule(&format!("WINNERS (last {window} days)"));
    print_table(&ranked.winners);
    print_rule(&format!("LOSERS (last {window} days)"));
    print_table(&ranked.losers);
}

fn print_table(records: &[PricePerformanceRecord]) {
    println!("{:<8} {:>12} {:>12} {:>12}", "Ticker", "First", "Last", "Change %");
    println!("{}", "─".repeat(47));
    for record in records {
        println!(
            "{:<8} {:>12.2} {:>12.2} {:>+12.2}",
            record.ticker,
            record.first_price().unwrap_or_default(),
            record.last_price().unwrap_or_default(),
            record.percent_change()
        );
    }
    println!();
}
