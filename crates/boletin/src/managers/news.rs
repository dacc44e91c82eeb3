//! News selection: fetch, filter, then ask the oracle.

use std::sync::Arc;

use boletin_filter::{CompanyDirectory, FilterPipeline, Keywords, Screened, SeenUrls};
use boletin_traits::{NewsItem, NewsProvider, RelevanceOracle, Result, Symbol, Timestamp};
use chrono::Utc;
use tracing::{debug, info};

use super::tickers_or_default;
use crate::defaults;

/// Orchestrates provider fetch, the four-stage filter and the oracle.
///
/// The manager owns one [`FilterPipeline`] for its whole lifetime, so a URL
/// selected by one [`select`](Self::select) call is never offered again by a
/// later one. Drive a single instance from one task at a time.
#[derive(Debug)]
pub struct NewsManager<P, O> {
    provider: Arc<P>,
    oracle: Arc<O>,
    tickers: Vec<Symbol>,
    days_behind: u32,
    top_k: usize,
    pipeline: FilterPipeline,
}

impl<P: NewsProvider, O: RelevanceOracle> NewsManager<P, O> {
    /// Creates a manager over the default universe with default settings.
    pub fn new(provider: Arc<P>, oracle: Arc<O>) -> Self {
        Self {
            provider,
            oracle,
            tickers: tickers_or_default(Vec::new()),
            days_behind: defaults::DAYS_BEHIND,
            top_k: defaults::TOP_K,
            pipeline: FilterPipeline::new(Keywords::default(), CompanyDirectory::sp100()),
        }
    }

    /// Sets the tickers to fetch; an empty list selects the default universe.
    #[must_use]
    pub fn with_tickers(mut self, tickers: Vec<Symbol>) -> Self {
        self.tickers = tickers_or_default(tickers);
        self
    }

    /// Sets the recency window; values `<= 0` fall back to one day.
    #[must_use]
    pub fn with_days_behind(mut self, days: i64) -> Self {
        self.days_behind = defaults::window(days, defaults::DAYS_BEHIND);
        self
    }

    /// Sets how many items the oracle keeps; values `<= 0` fall back to ten.
    #[must_use]
    pub fn with_top_k(mut self, top_k: i64) -> Self {
        self.top_k = defaults::count(top_k, defaults::TOP_K);
        self
    }

    /// Replaces the keyword vocabulary, keeping the seen-URL set.
    #[must_use]
    pub fn with_keywords(self, keywords: Keywords) -> Self {
        let directory = self.pipeline.directory().clone();
        self.with_pipeline(keywords, directory)
    }

    /// Replaces the company directory, keeping the seen-URL set.
    #[must_use]
    pub fn with_directory(self, directory: CompanyDirectory) -> Self {
        let keywords = self.pipeline.keywords().clone();
        self.with_pipeline(keywords, directory)
    }

    fn with_pipeline(mut self, keywords: Keywords, directory: CompanyDirectory) -> Self {
        let seen = self.pipeline.seen().clone();
        self.pipeline = FilterPipeline::with_seen(keywords, directory, seen);
        self
    }

    /// Selects the most impactful recent news.
    ///
    /// URLs are recorded as seen only once the oracle call succeeds.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the fetch fails as a whole, or an
    /// [`OracleSelection`](boletin_traits::BoletinError::OracleSelection)
    /// error if the oracle call fails. An empty `Ok` always means there was
    /// no relevant news.
    pub async fn select(&mut self) -> Result<Vec<NewsItem>> {
        self.select_at(Utc::now()).await
    }

    /// Like [`select`](Self::select) with the recency window anchored at `now`.
    ///
    /// # Errors
    ///
    /// See [`select`](Self::select).
    pub async fn select_at(&mut self, now: Timestamp) -> Result<Vec<NewsItem>> {
        let screened = self.screen_at(now).await?;
        if screened.candidates.is_empty() {
            info!("no news candidates after filtering");
            self.pipeline.commit(screened.pending);
            return Ok(Vec::new());
        }
        // Candidates stay unseen until the oracle succeeds, so a retry after
        // a failed call is offered them again.
        let selected = self
            .oracle
            .select_top(&screened.candidates, self.top_k)
            .await?;
        info!(
            candidates = screened.candidates.len(),
            selected = selected.len(),
            "news selection complete"
        );
        self.pipeline.commit(screened.pending);
        Ok(selected)
    }

    /// Fetches and filters without calling the oracle or recording anything.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the fetch fails as a whole.
    pub async fn candidates_at(&self, now: Timestamp) -> Result<Vec<NewsItem>> {
        Ok(self.screen_at(now).await?.candidates)
    }

    async fn screen_at(&self, now: Timestamp) -> Result<Screened> {
        let raw = self
            .provider
            .fetch_news(&self.tickers, self.days_behind)
            .await?;
        debug!(
            tickers = self.tickers.len(),
            raw = raw.len(),
            days_behind = self.days_behind,
            "fetched news"
        );
        Ok(self.pipeline.screen(raw, self.days_behind, now))
    }

    /// Recency window in days.
    pub const fn days_behind(&self) -> u32 {
        self.days_behind
    }

    /// Number of items the oracle is asked to keep.
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Tickers fetched on each call.
    pub fn tickers(&self) -> &[Symbol] {
        &self.tickers
    }

    /// URLs already emitted by this manager.
    pub const fn seen(&self) -> &SeenUrls {
        self.pipeline.seen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boletin_traits::{BoletinError, OracleFailure};
    use chrono::{Duration, TimeZone};
    use std::sync::Mutex;

    struct FixedNews(Vec<NewsItem>);

    impl NewsProvider for FixedNews {
        async fn fetch_news(&self, tickers: &[Symbol], _days_behind: u32) -> Result<Vec<NewsItem>> {
            Ok(self
                .0
                .iter()
                .filter(|item| tickers.iter().any(|t| t == item.ticker()))
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct RecordingOracle {
        calls: Mutex<Vec<usize>>,
    }

    impl RelevanceOracle for RecordingOracle {
        async fn select_top(&self, candidates: &[NewsItem], top_k: usize) -> Result<Vec<NewsItem>> {
            self.calls.lock().unwrap().push(candidates.len());
            Ok(candidates.iter().take(top_k).cloned().collect())
        }
    }

    /// Fails the first call, then echoes.
    #[derive(Default)]
    struct FlakyOracle {
        calls: Mutex<usize>,
    }

    impl RelevanceOracle for FlakyOracle {
        async fn select_top(&self, candidates: &[NewsItem], top_k: usize) -> Result<Vec<NewsItem>> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if *calls == 1 {
                return Err(BoletinError::oracle(OracleFailure::Unavailable, "timeout"));
            }
            Ok(candidates.iter().take(top_k).cloned().collect())
        }
    }

    struct FailingOracle;

    impl RelevanceOracle for FailingOracle {
        async fn select_top(&self, _: &[NewsItem], _: usize) -> Result<Vec<NewsItem>> {
            Err(BoletinError::oracle(OracleFailure::Malformed, "not a list"))
        }
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn item(title: &str, url: &str, ticker: &str, hours_ago: i64) -> NewsItem {
        NewsItem::new(title, "summary", Some(now() - Duration::hours(hours_ago)), url, ticker)
    }

    fn fixture() -> Vec<NewsItem> {
        vec![
            item("Apple faces lawsuit over patents", "u1", "AAPL", 2),
            item("Nvidia announces merger talks", "u2", "NVDA", 3),
            item("Microsoft picnic photos", "u3", "MSFT", 1),
            item("Tesla recall widens", "u4", "TSLA", 200),
        ]
    }

    fn manager<O: RelevanceOracle>(oracle: Arc<O>) -> NewsManager<FixedNews, O> {
        NewsManager::new(Arc::new(FixedNews(fixture())), oracle)
    }

    #[test]
    fn test_defaults_and_coercion() {
        let m = manager(Arc::new(RecordingOracle::default()));
        assert_eq!(m.days_behind(), 1);
        assert_eq!(m.top_k(), 10);
        assert_eq!(m.tickers().len(), 100);

        let m = m.with_days_behind(-5).with_top_k(0);
        assert_eq!(m.days_behind(), 1);
        assert_eq!(m.top_k(), 10);

        let m = m.with_days_behind(3).with_tickers(vec!["AAPL".into()]);
        assert_eq!(m.days_behind(), 3);
        assert_eq!(m.tickers(), ["AAPL"]);
    }

    #[tokio::test]
    async fn test_select_filters_then_calls_oracle() {
        let oracle = Arc::new(RecordingOracle::default());
        let mut m = manager(oracle.clone());
        let selected = m.select_at(now()).await.unwrap();

        let urls: Vec<&str> = selected.iter().map(NewsItem::url).collect();
        assert_eq!(urls, vec!["u1", "u2"]);
        assert_eq!(*oracle.calls.lock().unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn test_second_select_skips_seen_urls_and_oracle() {
        let oracle = Arc::new(RecordingOracle::default());
        let mut m = manager(oracle.clone());
        assert_eq!(m.select_at(now()).await.unwrap().len(), 2);

        let again = m.select_at(now()).await.unwrap();
        assert!(again.is_empty());
        assert_eq!(oracle.calls.lock().unwrap().len(), 1);
        assert!(m.seen().contains("u1"));
    }

    #[tokio::test]
    async fn test_oracle_failure_is_not_empty_news() {
        let mut m = manager(Arc::new(FailingOracle));
        let err = m.select_at(now()).await.unwrap_err();
        assert_eq!(err.oracle_failure(), Some(OracleFailure::Malformed));
    }

    #[tokio::test]
    async fn test_keywords_override() {
        let mut m = manager(Arc::new(RecordingOracle::default()))
            .with_keywords(Keywords::new(["picnic", "lawsuit"]));
        let selected = m.select_at(now()).await.unwrap();
        let urls: Vec<&str> = selected.iter().map(NewsItem::url).collect();
        assert_eq!(urls, vec!["u1", "u3"]);
    }

    #[tokio::test]
    async fn test_dropped_recent_items_are_still_seen() {
        let mut m = manager(Arc::new(RecordingOracle::default()));
        m.select_at(now()).await.unwrap();
        assert!(m.seen().contains("u3"));
        assert!(!m.seen().contains("u4"));
    }

    #[tokio::test]
    async fn test_retry_after_oracle_failure_offers_same_candidates() {
        let mut m = manager(Arc::new(FlakyOracle::default()));
        let err = m.select_at(now()).await.unwrap_err();
        assert_eq!(err.oracle_failure(), Some(OracleFailure::Unavailable));
        assert!(m.seen().is_empty());

        let retried = m.select_at(now()).await.unwrap();
        let urls: Vec<&str> = retried.iter().map(NewsItem::url).collect();
        assert_eq!(urls, vec!["u1", "u2"]);
        assert!(m.select_at(now()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_candidates_preview_records_nothing() {
        let m = manager(Arc::new(RecordingOracle::default()));
        assert_eq!(m.candidates_at(now()).await.unwrap().len(), 2);
        assert!(m.seen().is_empty());
    }
}
