//! End-to-end news selection through the public API.

use std::sync::Arc;

use boletin::{
    NewsItem, NewsManager, NewsProvider, RelevanceOracle, Result, Symbol,
    filter::{CompanyDirectory, Keywords},
    traits::Timestamp,
};
use chrono::{Duration, TimeZone, Utc};
use std::sync::Mutex;

struct StubProvider {
    items: Vec<NewsItem>,
}

impl NewsProvider for StubProvider {
    async fn fetch_news(&self, _tickers: &[Symbol], _days_behind: u32) -> Result<Vec<NewsItem>> {
        Ok(self.items.clone())
    }
}

/// Returns its input unchanged, truncated to `top_k`.
#[derive(Default)]
struct EchoOracle {
    seen: Mutex<Vec<NewsItem>>,
}

impl RelevanceOracle for EchoOracle {
    async fn select_top(&self, candidates: &[NewsItem], top_k: usize) -> Result<Vec<NewsItem>> {
        self.seen.lock().unwrap().extend_from_slice(candidates);
        Ok(candidates.iter().take(top_k).cloned().collect())
    }
}

fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap()
}

/// Two items per ticker: one recent with a keyword and a company mention,
/// one old without a keyword.
fn synthetic_news() -> Vec<NewsItem> {
    let companies = [
        ("AAPL", "Apple"),
        ("MSFT", "Microsoft"),
        ("NVDA", "Nvidia"),
        ("AMZN", "Amazon"),
        ("JPM", "JPMorgan"),
    ];
    companies
        .iter()
        .enumerate()
        .flat_map(|(i, (ticker, name))| {
            let hit = NewsItem::new(
                format!("{name} hit with antitrust lawsuit"),
                format!("{ticker} details"),
                Some(now() - Duration::days(1) - Duration::hours(i as i64)),
                format!("https://news.example/{ticker}/hit"),
                *ticker,
            );
            let miss = NewsItem::new(
                format!("{name} hosts annual picnic"),
                String::new(),
                Some(now() - Duration::days(9)),
                format!("https://news.example/{ticker}/miss"),
                *ticker,
            );
            [hit, miss]
        })
        .collect()
}

fn manager(oracle: Arc<EchoOracle>) -> NewsManager<StubProvider, EchoOracle> {
    let directory = CompanyDirectory::from_pairs([
        ("AAPL", "Apple"),
        ("MSFT", "Microsoft"),
        ("NVDA", "Nvidia"),
        ("AMZN", "Amazon"),
        ("JPM", "JPMorgan"),
    ]);
    NewsManager::new(Arc::new(StubProvider { items: synthetic_news() }), oracle)
        .with_days_behind(5)
        .with_top_k(2)
        .with_keywords(Keywords::default())
        .with_directory(directory)
}

#[tokio::test]
async fn pipeline_then_oracle_trims_to_top_k() {
    let oracle = Arc::new(EchoOracle::default());
    let mut news = manager(oracle.clone());

    let selected = news.select_at(now()).await.unwrap();

    let candidates = oracle.seen.lock().unwrap().clone();
    assert_eq!(candidates.len(), 5);
    assert!(candidates.iter().all(|item| item.url().ends_with("/hit")));

    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].url(), "https://news.example/AAPL/hit");
    assert_eq!(selected[1].url(), "https://news.example/MSFT/hit");
    assert_eq!(selected[1].summary(), "MSFT details");
}

#[tokio::test]
async fn repeated_polling_never_repeats_a_url() {
    let oracle = Arc::new(EchoOracle::default());
    let mut news = manager(oracle.clone());

    let first = news.select_at(now()).await.unwrap();
    let second = news.select_at(now() + Duration::hours(1)).await.unwrap();

    assert_eq!(first.len(), 2);
    assert!(second.is_empty());
    assert_eq!(oracle.seen.lock().unwrap().len(), 5);
}
