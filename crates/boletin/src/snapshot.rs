//! Offline provider serving a JSON snapshot from disk.
//!
//! The file holds all three categories:
//!
//! ```json
//! {
//!   "news": [{"title": "...", "summary": "...", "published_at": "2025-03-01T09:30:00Z", "url": "...", "ticker": "AAPL"}],
//!   "earnings": [{"ticker": "MSFT", "company_name": "Microsoft", "announcement_date": "2025-04-24", ...}],
//!   "prices": [{"ticker": "NVDA", "prices": [120.1, 121.4]}]
//! }
//! ```
//!
//! Missing sections are treated as empty.

use std::{fs, path::Path};

use boletin_traits::{
    EarningsProvider, EarningsRecord, NewsItem, NewsProvider, PricePerformanceProvider,
    PricePerformanceRecord, Result, Symbol,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything a report needs, captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Raw news items.
    #[serde(default)]
    pub news: Vec<NewsItem>,
    /// Scheduled earnings announcements.
    #[serde(default)]
    pub earnings: Vec<EarningsRecord>,
    /// Closing-price histories.
    #[serde(default)]
    pub prices: Vec<PricePerformanceRecord>,
}

/// Provider backed by an in-memory [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotProvider {
    snapshot: Snapshot,
}

impl SnapshotProvider {
    /// Serves `snapshot` as-is.
    #[must_use]
    pub const fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Loads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let snapshot: Snapshot = serde_json::from_str(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            news = snapshot.news.len(),
            earnings = snapshot.earnings.len(),
            prices = snapshot.prices.len(),
            "loaded snapshot"
        );
        Ok(Self::new(snapshot))
    }

    /// The underlying snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

fn wanted(tickers: &[Symbol], ticker: &str) -> bool {
    tickers.iter().any(|t| t.eq_ignore_ascii_case(ticker))
}

impl NewsProvider for SnapshotProvider {
    async fn fetch_news(&self, tickers: &[Symbol], _days_behind: u32) -> Result<Vec<NewsItem>> {
        Ok(self
            .snapshot
            .news
            .iter()
            .filter(|item| wanted(tickers, item.ticker()))
            .cloned()
            .collect())
    }
}

impl EarningsProvider for SnapshotProvider {
    async fn fetch_earnings(&self, tickers: &[Symbol], cutoff: NaiveDate) -> Result<Vec<EarningsRecord>> {
        Ok(self
            .snapshot
            .earnings
            .iter()
            .filter(|r| wanted(tickers, &r.ticker) && r.announcement_date <= cutoff)
            .cloned()
            .collect())
    }
}

impl PricePerformanceProvider for SnapshotProvider {
    async fn fetch_price_performance(
        &self,
        tickers: &[Symbol],
        window_days: u32,
    ) -> Result<Vec<PricePerformanceRecord>> {
        // One close per day; keep the trailing window.
        let keep = usize::try_from(window_days).unwrap_or(usize::MAX);
        Ok(self
            .snapshot
            .prices
            .iter()
            .filter(|r| wanted(tickers, &r.ticker))
            .map(|r| {
                let start = r.prices.len().saturating_sub(keep);
                PricePerformanceRecord::new(r.ticker.clone(), r.prices[start..].to_vec())
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use boletin_traits::BoletinError;

    const SNAPSHOT: &str = r#"{
        "news": [
            {"title": "Apple recall", "summary": "s", "published_at": "2025-03-01T09:30:00Z", "url": "u1", "ticker": "AAPL"},
            {"title": "Tesla probe", "summary": "s", "published_at": null, "url": "u2", "ticker": "TSLA"}
        ],
        "earnings": [
            {"ticker": "MSFT", "company_name": "Microsoft", "announcement_date": "2025-04-24",
             "eps_estimate": {"avg": 3.2, "low": 3.1, "high": 3.4}, "revenue_estimate": 68.4e9}
        ],
        "prices": [{"ticker": "NVDA", "prices": [100.0, 90.0, 110.0, 120.0]}]
    }"#;

    fn provider() -> SnapshotProvider {
        SnapshotProvider::new(serde_json::from_str(SNAPSHOT).unwrap())
    }

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_news_filtered_by_ticker() {
        let news = provider().fetch_news(&symbols(&["aapl"]), 1).await.unwrap();
        assert_eq!(news.len(), 1);
        assert_eq!(news[0].url(), "u1");
        assert!(news[0].published_at().is_some());
    }

    #[tokio::test]
    async fn test_earnings_respect_cutoff() {
        let tickers = symbols(&["MSFT"]);
        let before = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let p = provider();
        assert!(p.fetch_earnings(&tickers, before).await.unwrap().is_empty());
        let records = p.fetch_earnings(&tickers, after).await.unwrap();
        assert_eq!(records[0].company_name, "Microsoft");
        assert!(records[0].prior_earnings.is_empty());
    }

    #[tokio::test]
    async fn test_prices_trailing_window() {
        let records = provider()
            .fetch_price_performance(&symbols(&["NVDA"]), 2)
            .await
            .unwrap();
        assert_eq!(records[0].prices, vec![110.0, 120.0]);
        assert_relative_eq!(provider().snapshot().prices[0].percent_change(), 20.0);
    }

    #[test]
    fn test_missing_sections_default() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SnapshotProvider::load("/nonexistent/boletin-snapshot.json").unwrap_err();
        assert!(matches!(err, BoletinError::Io(_)));
    }
}
