//! Data provider traits.
//!
//! A provider supplies raw records for a set of tickers. Implementations may
//! fail for individual tickers; such failures must be logged and skipped so
//! that one bad ticker never aborts the batch. An `Err` from these methods
//! means the provider as a whole could not serve the request.

use std::future::Future;

use chrono::NaiveDate;

use crate::{EarningsRecord, NewsItem, PricePerformanceRecord, Result, Symbol};

/// Source of raw news items.
pub trait NewsProvider: Send + Sync {
    /// Returns the news published for `tickers` within roughly the last
    /// `days_behind` days. Exact recency filtering happens downstream.
    fn fetch_news(
        &self,
        tickers: &[Symbol],
        days_behind: u32,
    ) -> impl Future<Output = Result<Vec<NewsItem>>> + Send;
}

/// Source of upcoming earnings announcements.
pub trait EarningsProvider: Send + Sync {
    /// Returns the earnings announcements for `tickers` scheduled between
    /// today and `cutoff`, inclusive.
    fn fetch_earnings(
        &self,
        tickers: &[Symbol],
        cutoff: NaiveDate,
    ) -> impl Future<Output = Result<Vec<EarningsRecord>>> + Send;
}

/// Source of closing-price histories.
pub trait PricePerformanceProvider: Send + Sync {
    /// Returns one record per ticker covering the last `window_days` days.
    fn fetch_price_performance(
        &self,
        tickers: &[Symbol],
        window_days: u32,
    ) -> impl Future<Output = Result<Vec<PricePerformanceRecord>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct FixedProvider;

    impl NewsProvider for FixedProvider {
        async fn fetch_news(&self, tickers: &[Symbol], _days_behind: u32) -> Result<Vec<NewsItem>> {
            let ts = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
            Ok(tickers
                .iter()
                .map(|t| NewsItem::new(format!("{t} news"), "", Some(ts), format!("u/{t}"), t))
                .collect())
        }
    }

    impl PricePerformanceProvider for FixedProvider {
        async fn fetch_price_performance(
            &self,
            tickers: &[Symbol],
            window_days: u32,
        ) -> Result<Vec<PricePerformanceRecord>> {
            Ok(tickers
                .iter()
                .map(|t| PricePerformanceRecord::new(t, vec![1.0; window_days as usize]))
                .collect())
        }
    }

    #[tokio::test]
    async fn test_news_provider_one_item_per_ticker() {
        let tickers = vec!["AAPL".to_string(), "MSFT".to_string()];
        let news = FixedProvider.fetch_news(&tickers, 1).await.unwrap();
        assert_eq!(news.len(), 2);
        assert_eq!(news[1].ticker(), "MSFT");
    }

    #[tokio::test]
    async fn test_price_provider_window() {
        let tickers = vec!["NVDA".to_string()];
        let records = FixedProvider.fetch_price_performance(&tickers, 5).await.unwrap();
        assert_eq!(records[0].prices.len(), 5);
    }

    #[test]
    fn test_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FixedProvider>();
    }
}
