//! The four-stage news filter pipeline.

use boletin_traits::{NewsItem, Timestamp};
use tracing::debug;

use crate::{CompanyDirectory, Keywords, SeenUrls, stages};

/// Output of [`FilterPipeline::screen`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screened {
    /// Items that passed every stage, in input order.
    pub candidates: Vec<NewsItem>,
    /// URLs of every recent, unseen item, including ones later stages dropped.
    pub pending: Vec<String>,
}

/// Recency, dedup, keyword and company-mention stages run in that order.
///
/// The pipeline owns its [`SeenUrls`], so running it repeatedly never emits
/// the same URL twice.
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    keywords: Keywords,
    directory: CompanyDirectory,
    seen: SeenUrls,
}

impl FilterPipeline {
    /// Creates a pipeline with an empty seen-URL set.
    #[must_use]
    pub fn new(keywords: Keywords, directory: CompanyDirectory) -> Self {
        Self::with_seen(keywords, directory, SeenUrls::new())
    }

    /// Creates a pipeline that starts from an existing seen-URL set.
    #[must_use]
    pub const fn with_seen(keywords: Keywords, directory: CompanyDirectory, seen: SeenUrls) -> Self {
        Self {
            keywords,
            directory,
            seen,
        }
    }

    /// Runs all four stages over `items` and records the new URLs.
    ///
    /// `now` anchors the recency window; pass `Utc::now()` in production.
    pub fn run(&mut self, items: Vec<NewsItem>, days_behind: u32, now: Timestamp) -> Vec<NewsItem> {
        let screened = self.screen(items, days_behind, now);
        self.commit(screened.pending);
        screened.candidates
    }

    /// Runs all four stages over `items` without touching the seen set.
    ///
    /// The returned [`Screened::pending`] URLs must be passed to
    /// [`commit`](Self::commit) once the candidates have been consumed;
    /// until then a repeat call offers the same candidates again.
    #[must_use]
    pub fn screen(&self, items: Vec<NewsItem>, days_behind: u32, now: Timestamp) -> Screened {
        let raw = items.len();
        let recent = stages::published_since(items, days_behind, now);
        let recent_count = recent.len();
        let unseen = self.seen.unseen(recent);
        let pending = unseen.iter().map(|item| item.url().to_string()).collect();
        let unseen_count = unseen.len();
        let eventful = stages::with_keywords(unseen, &self.keywords);
        let eventful_count = eventful.len();
        let candidates = stages::mentioning_company(eventful, &self.directory);

        debug!(
            raw,
            recent = recent_count,
            unseen = unseen_count,
            keyword = eventful_count,
            mention = candidates.len(),
            "news filter pipeline"
        );
        Screened {
            candidates,
            pending,
        }
    }

    /// Records URLs returned by [`screen`](Self::screen) as seen.
    pub fn commit(&mut self, pending: Vec<String>) {
        self.seen.record(pending);
    }

    /// URLs recorded so far.
    #[must_use]
    pub const fn seen(&self) -> &SeenUrls {
        &self.seen
    }

    /// Keyword list used by the title stage.
    #[must_use]
    pub const fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Company directory used by the mention stage.
    #[must_use]
    pub const fn directory(&self) -> &CompanyDirectory {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeywordSet;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
    }

    fn pipeline() -> FilterPipeline {
        FilterPipeline::new(
            Keywords::from_set(KeywordSet::HardEvent),
            CompanyDirectory::from_pairs([("AAPL", "Apple"), ("NVDA", "Nvidia")]),
        )
    }

    fn item(title: &str, url: &str, ticker: &str, age_hours: i64) -> NewsItem {
        NewsItem::new(
            title,
            "s",
            Some(now() - Duration::hours(age_hours)),
            url,
            ticker,
        )
    }

    #[test]
    fn test_run_applies_all_stages() {
        let items = vec![
            item("Apple earnings beat", "u1", "AAPL", 2),
            item("Apple earnings beat (old)", "u2", "AAPL", 72),
            item("Apple earnings beat", "u1", "AAPL", 1),
            item("Apple unveils new phone", "u3", "AAPL", 2),
            item("Chipmaker faces lawsuit", "u4", "NVDA", 2),
            item("Nvidia lawsuit filed", "u5", "NVDA", 2),
            item("Unknown Co merger", "u6", "ZZZZ", 2),
        ];
        let kept = pipeline().run(items, 1, now());
        let urls: Vec<_> = kept.iter().map(NewsItem::url).collect();
        assert_eq!(urls, vec!["u1", "u5"]);
    }

    #[test]
    fn test_run_deduplicates_across_calls() {
        let mut pipeline = pipeline();
        let batch = vec![item("Apple recall announced", "same", "AAPL", 1)];

        assert_eq!(pipeline.run(batch.clone(), 1, now()).len(), 1);
        assert!(pipeline.run(batch, 1, now()).is_empty());
        assert!(pipeline.seen().contains("same"));
    }

    #[test]
    fn test_screen_defers_recording_until_commit() {
        let mut pipeline = pipeline();
        let batch = vec![
            item("Apple recall announced", "hit", "AAPL", 1),
            item("Apple picnic", "dropped", "AAPL", 1),
        ];

        let first = pipeline.screen(batch.clone(), 1, now());
        assert_eq!(first.candidates.len(), 1);
        assert_eq!(first.pending, vec!["hit", "dropped"]);
        assert!(pipeline.seen().is_empty());

        let again = pipeline.screen(batch.clone(), 1, now());
        assert_eq!(again, first);

        pipeline.commit(again.pending);
        assert!(pipeline.seen().contains("dropped"));
        assert!(pipeline.screen(batch, 1, now()).candidates.is_empty());
    }

    #[test]
    fn test_stale_items_are_not_marked_seen() {
        let mut pipeline = pipeline();
        let stale = vec![item("Apple recall announced", "late", "AAPL", 48)];
        assert!(pipeline.run(stale, 1, now()).is_empty());
        assert!(!pipeline.seen().contains("late"));
    }
}
