//! Deterministic ranking for the categories that skip the oracle.
//!
//! Both functions are total: empty or short input yields a short result.
//! Sorting is stable, so ties keep their input order.

use boletin_traits::{EarningsRecord, PricePerformanceRecord};
use serde::{Deserialize, Serialize};

/// Sorts ascending by announcement date and keeps the first `n`.
#[must_use]
pub fn rank_earnings(mut records: Vec<EarningsRecord>, n: usize) -> Vec<EarningsRecord> {
    records.sort_by_key(|r| r.announcement_date);
    records.truncate(n);
    records
}

/// Best and worst performers over a window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Highest percent change first.
    pub winners: Vec<PricePerformanceRecord>,
    /// The tail of the descending ranking, worst last.
    pub losers: Vec<PricePerformanceRecord>,
}

impl Performance {
    /// True when there is nothing to report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.winners.is_empty() && self.losers.is_empty()
    }
}

/// Sorts descending by percent change and splits off both ends.
///
/// With fewer than `2 * n` records the two lists overlap; with fewer than
/// `n` they are identical.
#[must_use]
pub fn rank_performance(mut records: Vec<PricePerformanceRecord>, n: usize) -> Performance {
    records.sort_by(|a, b| b.percent_change().total_cmp(&a.percent_change()));
    let winners = records.iter().take(n).cloned().collect();
    let losers = records[records.len().saturating_sub(n)..].to_vec();
    Performance { winners, losers }
}
