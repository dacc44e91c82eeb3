//! Response parsing.
//!
//! Nothing from the oracle is partially trusted: either every element parses
//! and maps back onto a candidate, or the whole response is rejected.

use std::collections::{HashMap, HashSet};

use boletin_traits::{NewsItem, Timestamp};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{ChatMessage, Result, error::OracleError};

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Pulls the first choice's message content out of a chat-completion body.
///
/// # Errors
///
/// Returns [`OracleError::Malformed`] if the body is not a chat-completion
/// response or has no choices.
pub fn extract_content(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| OracleError::malformed(format!("not a chat completion ({e})"), body))?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| OracleError::malformed("response has no choices", body))
}

/// Maps the oracle's selection back onto `candidates`.
///
/// Title, ticker, url and timestamp come from the oracle; the summary is
/// restored from the candidate with the same url. Repeated urls keep their
/// first occurrence and the result is cut to `top_k`.
///
/// # Errors
///
/// Returns [`OracleError::Malformed`] if the content is not a JSON array of
/// objects, an object lacks `pubTime`/`publishedAt`, `title`, `url` or
/// `ticker`, a timestamp does not parse, or a url is not among the
/// candidates.
pub fn parse_selection(content: &str, candidates: &[NewsItem], top_k: usize) -> Result<Vec<NewsItem>> {
    let summaries: HashMap<&str, &str> = candidates
        .iter()
        .map(|item| (item.url(), item.summary()))
        .collect();

    let value: Value = serde_json::from_str(strip_code_fence(content))
        .map_err(|e| OracleError::malformed(format!("not JSON ({e})"), content))?;
    let Value::Array(elements) = value else {
        return Err(OracleError::malformed("response is not a list", content));
    };

    let mut selected = Vec::with_capacity(elements.len().min(top_k));
    let mut emitted = HashSet::new();
    for (index, element) in elements.iter().enumerate() {
        let Value::Object(fields) = element else {
            return Err(OracleError::malformed(
                format!("element {index} is not an object"),
                content,
            ));
        };

        let field = |name: &str| required_str(fields, &[name], index, content);
        let url = field("url")?;
        let title = field("title")?;
        let ticker = field("ticker")?;
        let published_at = parse_timestamp(
            required_str(fields, &["pubTime", "publishedAt"], index, content)?,
            index,
            content,
        )?;

        let Some(summary) = summaries.get(url) else {
            return Err(OracleError::malformed(
                format!("element {index} names unknown url '{url}'"),
                content,
            ));
        };

        if emitted.insert(url) {
            selected.push(NewsItem::new(title, *summary, Some(published_at), url, ticker));
        }
    }

    selected.truncate(top_k);
    Ok(selected)
}

fn required_str<'a>(
    fields: &'a Map<String, Value>,
    names: &[&str],
    index: usize,
    raw: &str,
) -> Result<&'a str> {
    names
        .iter()
        .find_map(|name| fields.get(*name).and_then(Value::as_str))
        .ok_or_else(|| {
            OracleError::malformed(
                format!("element {index} is missing '{}'", names.join("' or '")),
                raw,
            )
        })
}

fn parse_timestamp(value: &str, index: usize, raw: &str) -> Result<Timestamp> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            OracleError::malformed(
                format!("element {index} has unparseable timestamp '{value}' ({e})"),
                raw,
            )
        })
}

/// Models often wrap JSON in a markdown fence despite being told not to.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
