#![doc(issue_tracker_base_url = "https://github.com/factordynamics/boletin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # boletin
//!
//! Market bulletin generator for a universe of equities.
//!
//! boletin reduces raw market data to a short, report-ready selection in
//! three categories:
//!
//! - **News**: provider fetch, the deterministic [`filter`] pipeline, then a
//!   [`RelevanceOracle`] picks the most market-moving items.
//! - **Earnings**: upcoming announcements, nearest first.
//! - **Price performance**: biggest winners and losers over a window.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use boletin::{DataSource, NewsManager, ProviderKind};
//! use boletin::oracle::GroqClient;
//!
//! # async fn run() -> boletin::Result<()> {
//! let source = Arc::new(DataSource::build(ProviderKind::from_name("fmp"), None)?);
//! let oracle = Arc::new(GroqClient::from_env()?);
//!
//! let mut news = NewsManager::new(source, oracle).with_days_behind(2);
//! for item in news.select().await? {
//!     println!("{} {}", item.ticker(), item.title());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Domain records, errors, provider and oracle seams
//! - [`filter`] - News filter stages and reference data
//! - [`oracle`] - Chat-completion relevance oracle client
//! - [`fmp`] - Financial Modeling Prep data provider
//! - [`managers`] - Per-category selection managers
//! - [`ranking`] - Deterministic earnings and performance ranking
//! - [`report`] - Markdown report assembly

pub mod defaults;
pub mod managers;
pub mod ranking;
pub mod report;
pub mod snapshot;
pub mod source;

/// Version information for the boletin crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Re-exported sub-crates
// ============================================================================

/// Domain records, error taxonomy and the provider/oracle traits.
pub mod traits {
    pub use boletin_traits::*;
}

/// Deterministic news filter pipeline and reference data.
pub mod filter {
    pub use boletin_filter::*;
}

/// Relevance oracle client.
pub mod oracle {
    pub use boletin_oracle::*;
}

/// Financial Modeling Prep provider.
pub mod fmp {
    pub use boletin_fmp::*;
}

pub use boletin_traits::{
    BoletinError, EarningsProvider, EarningsRecord, NewsItem, NewsProvider, OracleFailure,
    PricePerformanceProvider, PricePerformanceRecord, RelevanceOracle, Result, Symbol,
};

pub use managers::{EarningsManager, NewsManager, PerformanceManager};
pub use ranking::{Performance, rank_earnings, rank_performance};
pub use report::{NewsSection, Report};
pub use snapshot::{Snapshot, SnapshotProvider};
pub use source::{DataSource, ProviderKind};
