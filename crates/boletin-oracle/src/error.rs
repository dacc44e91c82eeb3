//! Error types for the oracle client.

use boletin_traits::{BoletinError, OracleFailure};
use thiserror::Error;

/// Errors that can occur when asking the oracle for a selection.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Missing API key.
    #[error("GROQ_API_KEY environment variable not set")]
    MissingApiKey,

    /// A setting could not be parsed.
    #[error("Invalid oracle configuration: {0}")]
    InvalidConfig(String),

    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status other than auth or rate limiting.
    #[error("Oracle HTTP {status}: {body}")]
    Http {
        /// Status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The credential was refused.
    #[error("Oracle authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded.
    #[error("Oracle rate limit exceeded: {0}")]
    RateLimited(String),

    /// Response did not match the expected shape.
    #[error("Malformed oracle response: {reason}. Response: {raw}")]
    Malformed {
        /// What was wrong.
        reason: String,
        /// The raw text received.
        raw: String,
    },
}

impl OracleError {
    /// Shorthand for [`OracleError::Malformed`].
    pub fn malformed(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    /// Oracle failure category, or `None` for configuration problems.
    #[must_use]
    pub const fn failure(&self) -> Option<OracleFailure> {
        match self {
            Self::MissingApiKey | Self::InvalidConfig(_) => None,
            Self::Request(_) | Self::Http { .. } => Some(OracleFailure::Unavailable),
            Self::Authentication(_) | Self::RateLimited(_) => Some(OracleFailure::Rejected),
            Self::Malformed { .. } => Some(OracleFailure::Malformed),
        }
    }
}

impl From<OracleError> for BoletinError {
    fn from(err: OracleError) -> Self {
        match err.failure() {
            Some(kind) => Self::oracle(kind, err.to_string()),
            None => Self::Configuration(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_categories() {
        assert_eq!(OracleError::MissingApiKey.failure(), None);
        assert_eq!(
            OracleError::Http {
                status: 503,
                body: String::new()
            }
            .failure(),
            Some(OracleFailure::Unavailable)
        );
        assert_eq!(
            OracleError::RateLimited("slow down".into()).failure(),
            Some(OracleFailure::Rejected)
        );
        assert_eq!(
            OracleError::malformed("not a list", "{}").failure(),
            Some(OracleFailure::Malformed)
        );
    }

    #[test]
    fn test_into_boletin_error_keeps_raw_text() {
        let err: BoletinError = OracleError::malformed("not a list", "{\"a\":1}").into();
        assert_eq!(err.oracle_failure(), Some(OracleFailure::Malformed));
        assert!(err.to_string().contains("{\"a\":1}"));
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let err: BoletinError = OracleError::MissingApiKey.into();
        assert!(matches!(err, BoletinError::Configuration(_)));
    }
}
