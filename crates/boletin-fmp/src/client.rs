//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{AnalystEstimate, CompanyProfile, EarningsReport, HistoricalPrice, StockNews},
};
use chrono::NaiveDate;
use reqwest::Client;
use std::env;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

fn day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Check for error responses
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        serde_json::from_str(&text).map_err(|e| {
            FmpError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse: {e}. Response: {text}"),
            )))
        })
    }

    /// Get news articles for a symbol published between `from` and `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn stock_news(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
        limit: u32,
    ) -> Result<Vec<StockNews>> {
        let endpoint = format!(
            "news/stock?symbols={}&from={}&to={}&limit={limit}",
            symbol.to_uppercase(),
            day(from),
            day(to),
        );
        self.get(&endpoint).await
    }

    /// Get the earnings calendar for every company reporting in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn earnings_calendar(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<EarningsReport>> {
        let endpoint = format!("earnings-calendar?from={}&to={}", day(from), day(to));
        self.get(&endpoint).await
    }

    /// Get past and scheduled earnings reports for a symbol, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn earnings_history(&self, symbol: &str, limit: u32) -> Result<Vec<EarningsReport>> {
        let endpoint = format!("earnings?symbol={}&limit={limit}", symbol.to_uppercase());
        self.get(&endpoint).await
    }

    /// Get the company profile for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let endpoint = format!("profile?symbol={}", symbol.to_uppercase());
        let profiles: Vec<CompanyProfile> = self.get(&endpoint).await?;
        profiles
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get quarterly analyst estimates for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn analyst_estimates(&self, symbol: &str, limit: u32) -> Result<Vec<AnalystEstimate>> {
        let endpoint = format!(
            "analyst-estimates?symbol={}&period=quarter&page=0&limit={limit}",
            symbol.to_uppercase()
        );
        self.get(&endpoint).await
    }

    /// Get historical daily prices for a symbol, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn historical_prices(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<HistoricalPrice>> {
        let endpoint = format!(
            "historical-price-eod/full?symbol={}&from={}&to={}",
            symbol.to_uppercase(),
            day(from),
            day(to),
        );
        // The stable API returns a flat array, not a wrapped response
        self.get(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("profile?symbol=AAPL"),
            "https://financialmodelingprep.com/stable/profile?symbol=AAPL&apikey=test_key"
        );
        assert_eq!(
            client.url("earnings-calendar"),
            "https://financialmodelingprep.com/stable/earnings-calendar?apikey=test_key"
        );
    }

    #[test]
    fn test_day_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(day(date), "2025-03-07");
    }
}
