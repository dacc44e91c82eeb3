//! Price-performance winners and losers.

use std::sync::Arc;

use boletin_traits::{PricePerformanceProvider, Result, Symbol};
use tracing::debug;

use super::tickers_or_default;
use crate::{
    defaults,
    ranking::{Performance, rank_performance},
};

/// Ranks every ticker by percent change over a trailing window.
#[derive(Debug)]
pub struct PerformanceManager<P> {
    provider: Arc<P>,
    tickers: Vec<Symbol>,
    window: u32,
}

impl<P: PricePerformanceProvider> PerformanceManager<P> {
    /// Creates a manager over the default universe and a 180-day window.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            tickers: tickers_or_default(Vec::new()),
            window: defaults::PERFORMANCE_WINDOW,
        }
    }

    /// Sets the tickers to fetch; an empty list selects the default universe.
    #[must_use]
    pub fn with_tickers(mut self, tickers: Vec<Symbol>) -> Self {
        self.tickers = tickers_or_default(tickers);
        self
    }

    /// Sets the window length; values `<= 0` fall back to 180 days.
    #[must_use]
    pub fn with_window(mut self, days: i64) -> Self {
        self.window = defaults::window(days, defaults::PERFORMANCE_WINDOW);
        self
    }

    /// Returns the top `n` winners and bottom `n` losers.
    ///
    /// `n <= 0` falls back to three. Small universes yield overlapping lists.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the fetch fails as a whole.
    pub async fn select(&self, n: i64) -> Result<Performance> {
        let n = defaults::count(n, defaults::PERFORMANCE_COUNT);
        let records = self
            .provider
            .fetch_price_performance(&self.tickers, self.window)
            .await?;
        debug!(records = records.len(), window = self.window, "fetched price performance");
        Ok(rank_performance(records, n))
    }

    /// Window length in days.
    pub const fn window(&self) -> u32 {
        self.window
    }

    /// Tickers fetched on each call.
    pub fn tickers(&self) -> &[Symbol] {
        &self.tickers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use boletin_traits::{BoletinError, PricePerformanceRecord};

    struct Quotes;

    impl PricePerformanceProvider for Quotes {
        async fn fetch_price_performance(
            &self,
            tickers: &[Symbol],
            _window_days: u32,
        ) -> Result<Vec<PricePerformanceRecord>> {
            Ok(tickers
                .iter()
                .enumerate()
                .map(|(i, t)| PricePerformanceRecord::new(t, vec![100.0, 100.0 + i as f64 * 10.0 - 15.0]))
                .collect())
        }
    }

    struct Offline;

    impl PricePerformanceProvider for Offline {
        async fn fetch_price_performance(&self, _: &[Symbol], _: u32) -> Result<Vec<PricePerformanceRecord>> {
            Err(BoletinError::Provider("connection reset".into()))
        }
    }

    fn tickers(n: usize) -> Vec<Symbol> {
        (0..n).map(|i| format!("T{i}")).collect()
    }

    #[test]
    fn test_window_coercion() {
        let m = PerformanceManager::new(Arc::new(Quotes));
        assert_eq!(m.window(), 180);
        assert_eq!(m.with_window(-1).window(), 180);
    }

    #[tokio::test]
    async fn test_select_winners_losers() {
        let m = PerformanceManager::new(Arc::new(Quotes)).with_tickers(tickers(5));
        let ranked = m.select(2).await.unwrap();
        assert_eq!(ranked.winners[0].ticker, "T4");
        assert_relative_eq!(ranked.winners[0].percent_change(), 25.0);
        assert_eq!(ranked.losers[1].ticker, "T0");
        assert_relative_eq!(ranked.losers[1].percent_change(), -15.0);
    }

    #[tokio::test]
    async fn test_select_coerces_n_and_overlaps() {
        let m = PerformanceManager::new(Arc::new(Quotes)).with_tickers(tickers(2));
        let ranked = m.select(-3).await.unwrap();
        assert_eq!(ranked.winners.len(), 2);
        assert_eq!(ranked.winners, ranked.losers);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let m = PerformanceManager::new(Arc::new(Offline));
        assert!(matches!(m.select(3).await, Err(BoletinError::Provider(_))));
    }
}
