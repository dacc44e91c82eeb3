//! Upcoming earnings, nearest announcement first.

use std::sync::Arc;

use boletin_traits::{EarningsProvider, EarningsRecord, Result, Symbol};
use chrono::{Days, NaiveDate, Utc};
use tracing::debug;

use super::tickers_or_default;
use crate::{defaults, ranking::rank_earnings};

/// Selects the next `n` earnings announcements within a look-ahead window.
#[derive(Debug)]
pub struct EarningsManager<P> {
    provider: Arc<P>,
    tickers: Vec<Symbol>,
    days_ahead: u32,
}

impl<P: EarningsProvider> EarningsManager<P> {
    /// Creates a manager over the default universe and a 30-day window.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            tickers: tickers_or_default(Vec::new()),
            days_ahead: defaults::DAYS_AHEAD,
        }
    }

    /// Sets the tickers to fetch; an empty list selects the default universe.
    #[must_use]
    pub fn with_tickers(mut self, tickers: Vec<Symbol>) -> Self {
        self.tickers = tickers_or_default(tickers);
        self
    }

    /// Sets the look-ahead window; values `<= 0` fall back to 30 days.
    #[must_use]
    pub fn with_days_ahead(mut self, days: i64) -> Self {
        self.days_ahead = defaults::window(days, defaults::DAYS_AHEAD);
        self
    }

    /// Returns up to `n` announcements from today on, soonest first.
    ///
    /// `n <= 0` falls back to five.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the fetch fails as a whole.
    pub async fn select(&self, n: i64) -> Result<Vec<EarningsRecord>> {
        self.select_as_of(Utc::now().date_naive(), n).await
    }

    /// Like [`select`](Self::select) with the window starting at `today`.
    ///
    /// # Errors
    ///
    /// See [`select`](Self::select).
    pub async fn select_as_of(&self, today: NaiveDate, n: i64) -> Result<Vec<EarningsRecord>> {
        let n = defaults::count(n, defaults::EARNINGS_COUNT);
        let cutoff = self.cutoff(today);
        let records = self.provider.fetch_earnings(&self.tickers, cutoff).await?;
        let fetched = records.len();
        let upcoming: Vec<_> = records
            .into_iter()
            .filter(|r| (today..=cutoff).contains(&r.announcement_date))
            .collect();
        debug!(fetched, upcoming = upcoming.len(), %cutoff, "fetched earnings");
        Ok(rank_earnings(upcoming, n))
    }

    /// Last day of the window that opens on `today`.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.days_ahead)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Look-ahead window in days.
    pub const fn days_ahead(&self) -> u32 {
        self.days_ahead
    }

    /// Tickers fetched on each call.
    pub fn tickers(&self) -> &[Symbol] {
        &self.tickers
    }
}
