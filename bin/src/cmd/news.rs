//! `boletin news`

use std::sync::Arc;

use anyhow::Result;
use boletin::{
    NewsItem, NewsManager,
    filter::{KeywordSet, Keywords},
    oracle::GroqClient,
};

use super::{print_header, print_rule};
use crate::{Format, SourceArgs};

pub(crate) async fn run(source: &SourceArgs, days_behind: i64, top_k: i64, keywords: &str) -> Result<()> {
    let keywords = Keywords::from_set(keywords.parse::<KeywordSet>()?);
    let oracle = Arc::new(GroqClient::from_env()?);
    let mut manager = NewsManager::new(source.build_source()?, oracle)
        .with_tickers(source.resolve_tickers()?)
        .with_days_behind(days_behind)
        .with_top_k(top_k)
        .with_keywords(keywords);

    let items = manager.select().await?;

    match source.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&items)?),
        Format::Text => print_news(&items, manager.days_behind()),
    }
    Ok(())
}

fn print_news(items: &[NewsItem], days_behind: u32) {
    print_header("Top News");
    print_rule(&format!("Selected from the last {days_behind} day(s)"));

    if items.is_empty() {
        println!("No relevant news found.\n");
        return;
    }
    for (i, item) in items.iter().enumerate() {
        let published = item
            .published_at()
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("{:>2}. [{}] {}", i + 1, item.ticker(), item.title());
        println!("    {published}  {}", item.url());
        if !item.summary().is_empty() {
            println!("    {}", item.summary());
        }
        println!();
    }
}
