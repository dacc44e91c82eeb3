//! Pure filter stages.
//!
//! Each stage takes an ordered list of news items and returns the subsequence
//! that passes, preserving order. The dedup stage lives on
//! [`SeenUrls`](crate::SeenUrls) since it owns state.

use boletin_traits::{NewsItem, Timestamp};
use chrono::{DateTime, Duration, Utc};

use crate::{CompanyDirectory, Keywords};

/// Oldest publication time kept for a `days_behind` window ending at `now`.
///
/// Windows reaching past the earliest representable time clamp to it.
#[must_use]
pub fn recency_cutoff(now: Timestamp, days_behind: u32) -> Timestamp {
    now.checked_sub_signed(Duration::days(i64::from(days_behind)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Keeps items published at or after `now - days_behind`.
///
/// Items without a publication time are dropped.
#[must_use]
pub fn published_since(items: Vec<NewsItem>, days_behind: u32, now: Timestamp) -> Vec<NewsItem> {
    let cutoff = recency_cutoff(now, days_behind);
    items
        .into_iter()
        .filter(|item| item.published_at().is_some_and(|ts| ts >= cutoff))
        .collect()
}

/// Keeps items whose lowercased title contains at least one keyword.
#[must_use]
pub fn with_keywords(items: Vec<NewsItem>, keywords: &Keywords) -> Vec<NewsItem> {
    items
        .into_iter()
        .filter(|item| keywords.matches(&item.title().to_lowercase()))
        .collect()
}

/// Keeps items whose title mentions their own ticker or company name.
///
/// An item whose ticker has no directory entry never matches.
#[must_use]
pub fn mentioning_company(items: Vec<NewsItem>, directory: &CompanyDirectory) -> Vec<NewsItem> {
    items
        .into_iter()
        .filter(|item| mentions_company(item, directory))
        .collect()
}

fn mentions_company(item: &NewsItem, directory: &CompanyDirectory) -> bool {
    let Some(company) = directory.company_name(item.ticker()) else {
        return false;
    };
    let title = item.title().to_lowercase();
    title.contains(&item.ticker().to_lowercase()) || title.contains(&company.to_lowercase())
}
