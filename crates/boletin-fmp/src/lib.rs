//! Financial Modeling Prep (FMP) data provider for boletin.
//!
//! This crate provides a client for the [Financial Modeling
//! Prep](https://financialmodelingprep.com/) API and [`FmpProvider`], which
//! serves news, upcoming earnings and price histories through the boletin
//! provider traits.
//!
//! # Usage
//!
//! ```rust,ignore
//! use boletin_fmp::FmpProvider;
//! use boletin_traits::NewsProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = FmpProvider::from_env()?;
//!     let news = provider.fetch_news(&["AAPL".to_string()], 1).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod provider;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use provider::FmpProvider;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
