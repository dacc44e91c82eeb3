//! Error types for FMP API client.

use boletin_traits::BoletinError;
use thiserror::Error;

/// Errors that can occur when using the FMP API.
#[derive(Debug, Error)]
pub enum FmpError {
    /// Missing API key.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("FMP API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Free tier allows 250 requests/day.")]
    RateLimitExceeded,

    /// Symbol not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),
}

impl From<FmpError> for BoletinError {
    fn from(err: FmpError) -> Self {
        match err {
            FmpError::MissingApiKey => Self::Configuration(err.to_string()),
            other => Self::Provider(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() {
        let err: BoletinError = FmpError::MissingApiKey.into();
        assert!(matches!(err, BoletinError::Configuration(_)));

        let err: BoletinError = FmpError::RateLimitExceeded.into();
        assert!(matches!(err, BoletinError::Provider(_)));
        assert!(err.to_string().contains("Rate limit"));
    }
}
