//! Data types for FMP API responses.

use boletin_traits::Timestamp;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

fn parse_day(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Stock news article from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockNews {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Publication time, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default)]
    pub published_date: String,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Article body excerpt.
    #[serde(default)]
    pub text: String,
    /// Article URL.
    #[serde(default)]
    pub url: String,
    /// Source site.
    #[serde(default)]
    pub site: String,
}

impl StockNews {
    /// Parse the publication time as UTC.
    ///
    /// Accepts the FMP `YYYY-MM-DD HH:MM:SS` form and RFC 3339. The FMP form
    /// carries no offset and is taken to be UTC as-is, with no conversion
    /// from exchange-local time. An offset-bearing RFC 3339 value is
    /// converted to UTC.
    #[must_use]
    pub fn parsed_published(&self) -> Option<Timestamp> {
        NaiveDateTime::parse_from_str(&self.published_date, "%Y-%m-%d %H:%M:%S")
            .map(|naive| naive.and_utc())
            .or_else(|_| DateTime::parse_from_rfc3339(&self.published_date).map(|ts| ts.with_timezone(&Utc)))
            .ok()
    }
}

/// Earnings report entry, either scheduled (calendar) or historical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsReport {
    /// Ticker symbol.
    pub symbol: String,
    /// Report date.
    pub date: String,
    /// Reported EPS (absent for upcoming reports).
    #[serde(default)]
    pub eps_actual: Option<f64>,
    /// Consensus EPS estimate.
    #[serde(default)]
    pub eps_estimated: Option<f64>,
    /// Reported revenue.
    #[serde(default)]
    pub revenue_actual: Option<f64>,
    /// Consensus revenue estimate.
    #[serde(default)]
    pub revenue_estimated: Option<f64>,
}

impl EarningsReport {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

/// Company profile from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub company_name: String,
    /// Market cap.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Last price.
    #[serde(default)]
    pub price: Option<f64>,
}

/// Analyst consensus estimate for a fiscal period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystEstimate {
    /// Ticker symbol.
    pub symbol: String,
    /// Fiscal period end.
    pub date: String,
    /// Average EPS estimate.
    #[serde(default)]
    pub eps_avg: Option<f64>,
    /// Lowest EPS estimate.
    #[serde(default)]
    pub eps_low: Option<f64>,
    /// Highest EPS estimate.
    #[serde(default)]
    pub eps_high: Option<f64>,
    /// Average revenue estimate.
    #[serde(default)]
    pub revenue_avg: Option<f64>,
}

impl AnalystEstimate {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

/// Historical price data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Date.
    pub date: String,
    /// Open price.
    #[serde(default)]
    pub open: f64,
    /// High price.
    #[serde(default)]
    pub high: f64,
    /// Low price.
    #[serde(default)]
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Volume.
    #[serde(default)]
    pub volume: f64,
}

impl HistoricalPrice {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_news_deserialize_and_timestamp() {
        let json = r#"{
            "symbol": "AAPL",
            "publishedDate": "2025-02-03 21:05:14",
            "publisher": "Zacks",
            "title": "Apple earnings preview",
            "image": "https://img",
            "site": "zacks.com",
            "text": "Apple reports on Thursday.",
            "url": "https://zacks.com/a"
        }"#;
        let news: StockNews = serde_json::from_str(json).unwrap();
        assert_eq!(news.text, "Apple reports on Thursday.");
        assert_eq!(
            news.parsed_published(),
            Some(Utc.with_ymd_and_hms(2025, 2, 3, 21, 5, 14).unwrap())
        );
    }

    #[test]
    fn test_news_rfc3339_and_garbage_timestamps() {
        let mut news: StockNews = serde_json::from_str(r#"{"publishedDate": "2025-02-03T21:05:14Z"}"#).unwrap();
        assert!(news.parsed_published().is_some());
        news.published_date = "2025-02-03T16:05:14-05:00".to_string();
        assert_eq!(
            news.parsed_published(),
            Some(Utc.with_ymd_and_hms(2025, 2, 3, 21, 5, 14).unwrap())
        );
        news.published_date = "last tuesday".to_string();
        assert!(news.parsed_published().is_none());
    }

    #[test]
    fn test_earnings_report_optional_fields() {
        let json = r#"{"symbol":"MSFT","date":"2025-04-24","epsActual":null,"epsEstimated":3.22,"revenueActual":null,"revenueEstimated":68400000000}"#;
        let report: EarningsReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.eps_actual, None);
        assert_eq!(report.eps_estimated, Some(3.22));
        assert_eq!(report.parsed_date(), NaiveDate::from_ymd_opt(2025, 4, 24));
    }
}
