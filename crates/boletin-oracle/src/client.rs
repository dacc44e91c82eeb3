//! Chat-completion client implementation.

use boletin_traits::{NewsItem, RelevanceOracle};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::{
    ChatRequest, OracleConfig, Result, build_prompt, error::OracleError, extract_content,
    parse_selection,
};

/// Relevance oracle backed by a Groq (OpenAI-compatible) chat endpoint.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    config: OracleConfig,
}

impl GroqClient {
    /// Create a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: OracleConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Create a client from the environment (see [`OracleConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `GROQ_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(OracleConfig::from_env()?)
    }

    /// Settings in use.
    #[must_use]
    pub const fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Send one prompt and return the first choice's content.
    async fn complete(&self, prompt: String) -> Result<String> {
        let request = ChatRequest::new(&self.config.model, prompt);
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if let Some(err) = status_error(status, &body) {
            return Err(err);
        }
        extract_content(&body)
    }

    /// Ask the oracle for the `top_k` most impactful of `candidates`.
    ///
    /// Empty input, or `top_k == 0`, returns an empty selection without a
    /// network call.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport failure, non-success status, or
    /// malformed response. There is no retry.
    pub async fn select(&self, candidates: &[NewsItem], top_k: usize) -> Result<Vec<NewsItem>> {
        if candidates.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        debug!(
            candidates = candidates.len(),
            top_k,
            model = %self.config.model,
            "calling relevance oracle"
        );
        let content = self.complete(build_prompt(candidates, top_k)).await?;
        let selected = parse_selection(&content, candidates, top_k)?;
        info!(selected = selected.len(), "relevance oracle selection");
        Ok(selected)
    }
}

/// Maps a non-success status to the matching error.
fn status_error(status: StatusCode, body: &str) -> Option<OracleError> {
    if status.is_success() {
        return None;
    }
    let body = body.to_string();
    Some(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => OracleError::Authentication(body),
        StatusCode::TOO_MANY_REQUESTS => OracleError::RateLimited(body),
        _ => OracleError::Http {
            status: status.as_u16(),
            body,
        },
    })
}

impl RelevanceOracle for GroqClient {
    async fn select_top(
        &self,
        candidates: &[NewsItem],
        top_k: usize,
    ) -> boletin_traits::Result<Vec<NewsItem>> {
        Ok(self.select(candidates, top_k).await?)
    }
}
