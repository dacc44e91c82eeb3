//! Records flowing through the selection pipeline.
//!
//! Providers build these wholesale; everything downstream reads them. Filter
//! and ranking stages produce new vectors instead of mutating records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A market symbol identifier, e.g. `"AAPL"`.
pub type Symbol = String;

/// Timezone-aware timestamp used for news publication times.
pub type Timestamp = DateTime<Utc>;

/// A news article about a single ticker.
///
/// The `url` is the identity key: dedup and oracle summary restoration are
/// both keyed on it. A missing publication time is kept as `None` so the
/// recency filter can exclude the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    title: String,
    summary: String,
    published_at: Option<Timestamp>,
    url: String,
    ticker: Symbol,
}

impl NewsItem {
    /// Creates a news item.
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        published_at: Option<Timestamp>,
        url: impl Into<String>,
        ticker: impl Into<Symbol>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            published_at,
            url: url.into(),
            ticker: ticker.into(),
        }
    }

    /// Headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Publication time, if the provider supplied a parseable one.
    pub const fn published_at(&self) -> Option<Timestamp> {
        self.published_at
    }

    /// Canonical article URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Ticker the article was fetched for.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }
}

/// Analyst EPS estimate for an upcoming report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsEstimate {
    /// Consensus average.
    pub avg: f64,
    /// Lowest estimate.
    pub low: f64,
    /// Highest estimate.
    pub high: f64,
}

/// Outcome of a previously reported quarter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorEarnings {
    /// EPS consensus before the report.
    pub expected_eps: f64,
    /// Reported EPS.
    pub actual_eps: f64,
    /// Price move in percent from a few days before to a few days after.
    pub price_move_percent: f64,
}

impl PriorEarnings {
    /// Returns `true` if reported EPS met or exceeded the estimate.
    #[must_use]
    pub fn beat(&self) -> bool {
        self.actual_eps >= self.expected_eps
    }
}

/// An upcoming earnings announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsRecord {
    /// Ticker symbol.
    pub ticker: Symbol,
    /// Company name as reported by the provider.
    pub company_name: String,
    /// Scheduled announcement date.
    pub announcement_date: NaiveDate,
    /// EPS estimate, when analysts publish one.
    pub eps_estimate: Option<EpsEstimate>,
    /// Revenue estimate.
    pub revenue_estimate: Option<f64>,
    /// Market capitalization.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Recent closing prices, most recent last.
    #[serde(default)]
    pub recent_prices: Vec<f64>,
    /// Previously reported quarters, most recent first.
    #[serde(default)]
    pub prior_earnings: Vec<PriorEarnings>,
}

/// Closing-price history of one ticker over the performance window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePerformanceRecord {
    /// Ticker symbol.
    pub ticker: Symbol,
    /// Closing prices in chronological order.
    pub prices: Vec<f64>,
}

impl PricePerformanceRecord {
    /// Creates a record from a ticker and its chronological closes.
    pub fn new(ticker: impl Into<Symbol>, prices: Vec<f64>) -> Self {
        Self {
            ticker: ticker.into(),
            prices,
        }
    }

    /// Percent change from the first to the last price.
    ///
    /// Defined as `0.0` when fewer than two prices exist or the first price
    /// is zero.
    #[must_use]
    pub fn percent_change(&self) -> f64 {
        match (self.prices.first(), self.prices.last()) {
            (Some(&first), Some(&last)) if self.prices.len() >= 2 && first != 0.0 => {
                (last - first) / first * 100.0
            }
            _ => 0.0,
        }
    }

    /// First price of the window.
    #[must_use]
    pub fn first_price(&self) -> Option<f64> {
        self.prices.first().copied()
    }

    /// Most recent price.
    #[must_use]
    pub fn last_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }
}
