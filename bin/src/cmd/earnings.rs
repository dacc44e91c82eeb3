//! `boletin earnings`

use anyhow::Result;
use boletin::{EarningsManager, EarningsRecord};

use super::{print_header, print_rule};
use crate::{Format, SourceArgs};

pub(crate) async fn run(source: &SourceArgs, days_ahead: i64, count: i64) -> Result<()> {
    let manager = EarningsManager::new(source.build_source()?)
        .with_tickers(source.resolve_tickers()?)
        .with_days_ahead(days_ahead);

    let records = manager.select(count).await?;

    match source.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        Format::Text => print_earnings(&records, manager.days_ahead()),
    }
    Ok(())
}

fn print_earnings(records: &[EarningsRecord], days_ahead: u32) {
    print_header("Upcoming Earnings");
    print_rule(&format!("Next {days_ahead} day(s)"));

    if records.is_empty() {
        println!("No earnings announcements in the window.\n");
        return;
    }

    println!(
        "{:<8} {:<24} {:>12} {:>10} {:>10} {:>10}",
        "Ticker", "Company", "Date", "EPS avg", "EPS low", "EPS high"
    );
    println!("{}", "─".repeat(79));
    for record in records {
        let (avg, low, high) = record.eps_estimate.map_or_else(
            || ("-".to_string(), "-".to_string(), "-".to_string()),
            |eps| (format!("{:.2}", eps.avg), format!("{:.2}", eps.low), format!("{:.2}", eps.high)),
        );
        println!(
            "{:<8} {:<24} {:>12} {:>10} {:>10} {:>10}",
            record.ticker,
            record.company_name,
            record.announcement_date.format("%Y-%m-%d").to_string(),
            avg,
            low,
            high
        );
    }
    println!();
}
