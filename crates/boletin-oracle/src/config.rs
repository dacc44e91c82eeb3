//! Oracle client configuration.

use std::{env, fmt, time::Duration};

use crate::{Result, error::OracleError};

/// Default chat-completions endpoint.
pub(crate) const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model.
pub(crate) const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default request timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the relevance oracle.
#[derive(Clone)]
pub struct OracleConfig {
    /// Bearer credential.
    pub api_key: String,
    /// Model identifier sent in the request body.
    pub model: String,
    /// Chat-completions endpoint.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl OracleConfig {
    /// Config with defaults for everything but the key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: GROQ_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads `GROQ_API_KEY`, `GROQ_MODEL`, `GROQ_API_URL` and
    /// `ORACLE_TIMEOUT_SECS`.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unset or empty, or the timeout is not a
    /// positive integer.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(OracleError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(model) = env::var("GROQ_MODEL") {
            config.model = model;
        }
        if let Ok(endpoint) = env::var("GROQ_API_URL") {
            config.endpoint = endpoint;
        }
        if let Ok(secs) = env::var("ORACLE_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&secs)?;
        }
        Ok(config)
    }
}

fn parse_timeout(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(OracleError::InvalidConfig(format!(
            "ORACLE_TIMEOUT_SECS must be a positive integer, got '{value}'"
        ))),
    }
}

impl fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
