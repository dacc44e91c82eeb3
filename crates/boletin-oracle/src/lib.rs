//! Relevance oracle client for boletin.
//!
//! The oracle is a chat-completion LLM endpoint (Groq by default) asked to pick
//! the news items most likely to move prices. The client keeps the oracle on a
//! short leash:
//!
//! - the outbound prompt carries only `pubTime`, `title`, `url` and `ticker`;
//!   summaries are stripped to keep the payload small;
//! - the response must be a JSON array of objects naming candidate URLs, and
//!   summaries are restored from the candidates by URL;
//! - anything else fails the whole call with a single error.
//!
//! Prompt construction ([`build_prompt`], [`ChatRequest`]) and response
//! parsing ([`extract_content`], [`parse_selection`]) are pure functions so
//! they can be tested without a network.
//!
//! # Usage
//!
//! ```rust,ignore
//! use boletin_oracle::GroqClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let oracle = GroqClient::from_env()?;
//!     let top = oracle.select(&candidates, 10).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! ```bash
//! GROQ_API_KEY=your_api_key_here
//! GROQ_MODEL=llama-3.1-8b-instant      # optional
//! GROQ_API_URL=https://...             # optional
//! ORACLE_TIMEOUT_SECS=30               # optional
//! ```

mod client;
mod config;
mod error;
mod prompt;
mod response;

pub use client::GroqClient;
pub use config::OracleConfig;
pub use error::OracleError;
pub use prompt::{ChatMessage, ChatRequest, build_prompt};
pub use response::{extract_content, parse_selection};

/// Result type for oracle operations.
pub type Result<T> = std::result::Result<T, OracleError>;
