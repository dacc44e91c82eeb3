//! Provider trait implementations on top of [`FmpClient`].

use std::collections::HashSet;

use boletin_traits::{
    EarningsProvider, EarningsRecord, EpsEstimate, NewsItem, NewsProvider,
    PricePerformanceProvider, PricePerformanceRecord, PriorEarnings, Symbol,
};
use chrono::{Days, Duration, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::{AnalystEstimate, EarningsReport, FmpClient, HistoricalPrice, StockNews};

/// Closing prices kept on an earnings record.
const RECENT_PRICE_POINTS: usize = 15;

/// Prior quarters kept on an earnings record.
const PRIOR_QUARTERS: usize = 4;

/// Days of history fetched to cover prior quarters and recent prices.
const EARNINGS_PRICE_HISTORY_DAYS: i64 = 400;

/// Days either side of a past report used for its price move.
const REPORT_MOVE_DAYS: i64 = 5;

/// Data provider backed by Financial Modeling Prep.
///
/// Failures for one ticker are logged and skipped.
#[derive(Debug, Clone)]
pub struct FmpProvider {
    client: FmpClient,
}

impl FmpProvider {
    /// Wrap an existing client.
    #[must_use]
    pub const fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Build from `FMP_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> crate::Result<Self> {
        Ok(Self::new(FmpClient::from_env()?))
    }

    async fn earnings_record(&self, entry: EarningsReport, date: NaiveDate, today: NaiveDate) -> EarningsRecord {
        let symbol = entry.symbol.to_uppercase();
        let history_from = today - Duration::days(EARNINGS_PRICE_HISTORY_DAYS);
        let (profile, estimates, history, prices) = tokio::join!(
            self.client.profile(&symbol),
            self.client.analyst_estimates(&symbol, 12),
            self.client.earnings_history(&symbol, 8),
            self.client.historical_prices(&symbol, history_from, today),
        );

        let profile = ok_or_warn(&symbol, "profile", profile);
        let estimates = ok_or_warn(&symbol, "analyst estimates", estimates).unwrap_or_default();
        let history = ok_or_warn(&symbol, "earnings history", history).unwrap_or_default();
        let prices = chronological(ok_or_warn(&symbol, "price history", prices).unwrap_or_default());

        let closes: Vec<f64> = prices.iter().map(|p| p.close).collect();
        let recent_prices = closes[closes.len().saturating_sub(RECENT_PRICE_POINTS)..].to_vec();

        EarningsRecord {
            company_name: profile
                .as_ref()
                .map(|p| p.company_name.clone())
                .unwrap_or_default(),
            market_cap: profile.and_then(|p| p.market_cap),
            announcement_date: date,
            eps_estimate: nearest_estimate(&estimates, date),
            revenue_estimate: entry.revenue_estimated,
            recent_prices,
            prior_earnings: prior_earnings(history, &prices, today),
            ticker: symbol,
        }
    }
}

impl NewsProvider for FmpProvider {
    async fn fetch_news(&self, tickers: &[Symbol], days_behind: u32) -> boletin_traits::Result<Vec<NewsItem>> {
        let to = Utc::now().date_naive();
        let from = days_before(to, days_behind);
        let limit = news_limit(days_behind);

        let mut items = Vec::new();
        for ticker in tickers {
            match self.client.stock_news(ticker, from, to, limit).await {
                Ok(news) => {
                    debug!(%ticker, count = news.len(), "fetched news");
                    items.extend(news.into_iter().map(|article| to_news_item(article, ticker)));
                }
                Err(e) => warn!(%ticker, error = %e, "failed to fetch news, skipping ticker"),
            }
        }
        Ok(items)
    }
}

impl EarningsProvider for FmpProvider {
    async fn fetch_earnings(
        &self,
        tickers: &[Symbol],
        cutoff: NaiveDate,
    ) -> boletin_traits::Result<Vec<EarningsRecord>> {
        let today = Utc::now().date_naive();
        if cutoff < today {
            return Ok(Vec::new());
        }

        let wanted: HashSet<String> = tickers.iter().map(|t| t.to_uppercase()).collect();
        let calendar = self.client.earnings_calendar(today, cutoff).await?;

        let mut emitted = HashSet::new();
        let mut records = Vec::new();
        for entry in calendar {
            let symbol = entry.symbol.to_uppercase();
            if !wanted.contains(&symbol) || emitted.contains(&symbol) {
                continue;
            }
            let Some(date) = entry.parsed_date().filter(|d| (today..=cutoff).contains(d)) else {
                continue;
            };
            emitted.insert(symbol);
            records.push(self.earnings_record(entry, date, today).await);
        }
        debug!(count = records.len(), %cutoff, "fetched upcoming earnings");
        Ok(records)
    }
}

impl PricePerformanceProvider for FmpProvider {
    async fn fetch_price_performance(
        &self,
        tickers: &[Symbol],
        window_days: u32,
    ) -> boletin_traits::Result<Vec<PricePerformanceRecord>> {
        let today = Utc::now().date_naive();
        let from = days_before(today, window_days);

        let mut records = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            match self.client.historical_prices(ticker, from, today).await {
                Ok(prices) if prices.is_empty() => debug!(%ticker, "no price history"),
                Ok(prices) => {
                    let closes = chronological(prices).into_iter().map(|p| p.close).collect();
                    records.push(PricePerformanceRecord::new(ticker.clone(), closes));
                }
                Err(e) => warn!(%ticker, error = %e, "failed to fetch prices, skipping ticker"),
            }
        }
        Ok(records)
    }
}

fn ok_or_warn<T>(symbol: &str, what: &str, result: crate::Result<T>) -> Option<T> {
    result
        .map_err(|e| warn!(%symbol, error = %e, "failed to fetch {what}"))
        .ok()
}

/// Start of a `days`-long range ending at `date`, clamped to the earliest date.
fn days_before(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Article limit by window, since the endpoint pages by count.
const fn news_limit(days_behind: u32) -> u32 {
    match days_behind {
        0 | 1 => 150,
        2 => 300,
        _ => 1000,
    }
}

fn to_news_item(article: StockNews, ticker: &str) -> NewsItem {
    let published_at = article.parsed_published();
    NewsItem::new(article.title, article.text, published_at, article.url, ticker)
}

/// Sorts oldest first and drops rows without a parseable date.
fn chronological(mut prices: Vec<HistoricalPrice>) -> Vec<HistoricalPrice> {
    prices.retain(|p| p.parsed_date().is_some());
    prices.sort_by_key(HistoricalPrice::parsed_date);
    prices
}

/// Percent move from the first to the last close within a few days of `date`.
fn price_move(prices: &[HistoricalPrice], date: NaiveDate) -> f64 {
    let window = (date - Duration::days(REPORT_MOVE_DAYS))..=(date + Duration::days(REPORT_MOVE_DAYS));
    let closes: Vec<f64> = prices
        .iter()
        .filter(|p| p.parsed_date().is_some_and(|d| window.contains(&d)))
        .map(|p| p.close)
        .collect();
    match (closes.first(), closes.last()) {
        (Some(&before), Some(&after)) if closes.len() >= 2 && before != 0.0 => {
            round2((after - before) / before * 100.0)
        }
        _ => 0.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The estimate whose fiscal period ends closest to the report date.
fn nearest_estimate(estimates: &[AnalystEstimate], date: NaiveDate) -> Option<EpsEstimate> {
    estimates
        .iter()
        .filter_map(|e| {
            let period = e.parsed_date()?;
            let eps = EpsEstimate {
                avg: e.eps_avg?,
                low: e.eps_low?,
                high: e.eps_high?,
            };
            Some(((period - date).num_days().abs(), eps))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, eps)| eps)
}

/// Reported quarters before `today`, most recent first.
fn prior_earnings(mut history: Vec<EarningsReport>, prices: &[HistoricalPrice], today: NaiveDate) -> Vec<PriorEarnings> {
    history.sort_by_key(|r| std::cmp::Reverse(r.parsed_date()));
    history
        .into_iter()
        .filter_map(|report| {
            let date = report.parsed_date().filter(|d| *d < today)?;
            let actual_eps = report.eps_actual?;
            Some(PriorEarnings {
                expected_eps: report.eps_estimated.unwrap_or(0.0),
                actual_eps,
                price_move_percent: price_move(prices, date),
            })
        })
        .take(PRIOR_QUARTERS)
        .collect()
}
