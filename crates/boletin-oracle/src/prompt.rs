//! Prompt and request construction.

use boletin_traits::NewsItem;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `"user"`, `"assistant"` or `"system"`.
    pub role: String,
    /// Message text.
    pub content: String,
}

/// Chat-completion request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation; a single user message for selection.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature. Always zero for selection.
    pub temperature: f32,
}

impl ChatRequest {
    /// Single-message, zero-temperature request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.into(),
            }],
            temperature: 0.0,
        }
    }
}

/// Candidate as shown to the oracle. The summary is left out on purpose.
fn prompt_article(item: &NewsItem) -> Value {
    json!({
        "pubTime": item
            .published_at()
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
        "title": item.title(),
        "url": item.url(),
        "ticker": item.ticker(),
    })
}

/// Builds the selection prompt for `candidates`.
#[must_use]
pub fn build_prompt(candidates: &[NewsItem], top_k: usize) -> String {
    let articles = Value::Array(candidates.iter().map(prompt_article).collect());
    format!(
        "You are a financial markets AI.

You will receive a list of recent financial news articles.
Each article has:
- pubTime
- title
- url
- ticker

Your task:
Select the {top_k} articles that are MOST LIKELY to significantly impact stock prices in the upcoming days/weeks.

Return ONLY a JSON array of article objects, most impactful first.
Each object MUST contain exactly:
pubTime, title, url, ticker

Copy url values exactly as given.
DO NOT add explanations.
DO NOT add extra fields.
DO NOT return text outside JSON.

Articles:
{articles:#}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn candidates() -> Vec<NewsItem> {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        vec![
            NewsItem::new("Apple recall", "secret summary one", Some(ts), "a", "AAPL"),
            NewsItem::new("Nvidia lawsuit", "secret summary two", None, "b", "NVDA"),
        ]
    }

    #[test]
    fn test_prompt_omits_summaries() {
        let prompt = build_prompt(&candidates(), 1);
        assert!(!prompt.contains("secret summary"));
        assert!(!prompt.contains("\"summary\""));
    }

    #[test]
    fn test_prompt_carries_candidates_and_top_k() {
        let prompt = build_prompt(&candidates(), 7);
        assert!(prompt.contains("Select the 7 articles"));
        assert!(prompt.contains("\"pubTime\": \"2025-01-01T00:00:00Z\""));
        assert!(prompt.contains("\"url\": \"b\""));
        assert!(prompt.contains("\"ticker\": \"NVDA\""));
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest::new("llama-3.1-8b-instant", "hello");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "llama-3.1-8b-instant",
                "messages": [{"role": "user", "content": "hello"}],
                "temperature": 0.0,
            })
        );
    }
}
