//! Error types for the boletin workspace.
//!
//! Every crate reports failures through [`BoletinError`]. Oracle failures are
//! collapsed into a single distinguishable variant,
//! [`BoletinError::OracleSelection`], so that callers can tell a failed news
//! selection apart from a selection that legitimately found nothing.

use std::fmt;

use thiserror::Error;

/// Why a relevance oracle call did not produce a usable selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleFailure {
    /// Network error, timeout, or a non-success HTTP status.
    Unavailable,
    /// The service refused the request (authentication or rate limit).
    Rejected,
    /// The response could not be parsed into a selection.
    Malformed,
}

impl fmt::Display for OracleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unavailable => "unavailable",
            Self::Rejected => "rejected",
            Self::Malformed => "malformed response",
        };
        f.write_str(label)
    }
}

/// The main error type for boletin operations.
#[derive(Debug, Error)]
pub enum BoletinError {
    /// A required setting is missing or invalid. Fatal at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A data provider failed as a whole (per-ticker failures are swallowed).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The relevance oracle did not return a usable selection.
    ///
    /// `detail` carries the raw response body or transport error.
    #[error("Oracle selection failed ({kind}): {detail}")]
    OracleSelection {
        /// Failure category.
        kind: OracleFailure,
        /// Raw response or error text for diagnostics.
        detail: String,
    },

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoletinError {
    /// Shorthand for an oracle failure.
    pub fn oracle(kind: OracleFailure, detail: impl Into<String>) -> Self {
        Self::OracleSelection {
            kind,
            detail: detail.into(),
        }
    }

    /// Returns `true` if this error is an oracle selection failure.
    #[must_use]
    pub const fn is_oracle_failure(&self) -> bool {
        matches!(self, Self::OracleSelection { .. })
    }

    /// Returns the oracle failure category, if any.
    #[must_use]
    pub const fn oracle_failure(&self) -> Option<OracleFailure> {
        match self {
            Self::OracleSelection { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// A specialized Result type for boletin operations.
pub type Result<T> = std::result::Result<T, BoletinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoletinError::Configuration("GROQ_API_KEY not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: GROQ_API_KEY not set");

        let err = BoletinError::oracle(OracleFailure::Malformed, "not a list");
        assert_eq!(
            err.to_string(),
            "Oracle selection failed (malformed response): not a list"
        );
    }

    #[test]
    fn test_oracle_failure_is_distinguishable() {
        let err = BoletinError::oracle(OracleFailure::Unavailable, "timeout");
        assert!(err.is_oracle_failure());
        assert_eq!(err.oracle_failure(), Some(OracleFailure::Unavailable));

        let err = BoletinError::Provider("down".to_string());
        assert!(!err.is_oracle_failure());
        assert_eq!(err.oracle_failure(), None);
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: BoletinError = json_err.into();
        assert!(matches!(err, BoletinError::Json(_)));
    }
}
