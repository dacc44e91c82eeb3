#![doc(issue_tracker_base_url = "https://github.com/factordynamics/boletin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait seams for the boletin market bulletin.
//!
//! This crate defines the records that flow through the selection pipeline
//! (news, upcoming earnings, price performance), the error taxonomy shared by
//! every crate in the workspace, and the traits behind which data providers
//! and the relevance oracle are plugged in.

pub mod error;
pub mod oracle;
pub mod provider;
pub mod types;

pub use error::{BoletinError, OracleFailure, Result};
pub use oracle::RelevanceOracle;
pub use provider::{EarningsProvider, NewsProvider, PricePerformanceProvider};
pub use types::{
    EarningsRecord, EpsEstimate, NewsItem, PricePerformanceRecord, PriorEarnings, Symbol,
    Timestamp,
};
