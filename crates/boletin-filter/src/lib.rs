//! Deterministic news filtering for boletin.
//!
//! The pipeline shrinks a raw news list to a small candidate set before it is
//! handed to the relevance oracle. It runs four order-preserving stages:
//!
//! 1. recency ([`stages::published_since`])
//! 2. dedup against a long-lived [`SeenUrls`] set
//! 3. hard-event keywords in the title ([`stages::with_keywords`])
//! 4. ticker or company name in the title ([`stages::mentioning_company`])
//!
//! The crate also carries the static reference data the stages consult:
//! ticker universes, the ticker to company-name directory, and keyword
//! vocabularies.
//!
//! # Example
//!
//! ```rust,ignore
//! use boletin_filter::{CompanyDirectory, FilterPipeline, KeywordSet, Keywords};
//!
//! let mut pipeline = FilterPipeline::new(
//!     Keywords::from_set(KeywordSet::HardEvent),
//!     CompanyDirectory::sp100(),
//! );
//! let candidates = pipeline.run(raw_news, 1, chrono::Utc::now());
//! ```

pub mod keywords;
pub mod pipeline;
pub mod seen;
pub mod stages;
pub mod universe;

pub use keywords::{KeywordSet, Keywords};
pub use pipeline::{FilterPipeline, Screened};
pub use seen::SeenUrls;
pub use universe::{CompanyDirectory, Universe};
