//! Set of already-emitted news URLs.

use std::collections::HashSet;

use boletin_traits::NewsItem;

/// URLs already passed through the dedup stage.
///
/// The set only grows: there is no way to remove a URL, so an item is emitted
/// at most once over the lifetime of the set. Owned by one pipeline; callers
/// that want persistence across processes can seed it with
/// [`FromIterator`] and read it back with [`SeenUrls::iter`].
#[derive(Debug, Clone, Default)]
pub struct SeenUrls {
    urls: HashSet<String>,
}

impl SeenUrls {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops items whose URL was seen before and records the rest.
    ///
    /// A URL repeated within `items` is kept on its first occurrence only.
    #[must_use]
    pub fn retain_unseen(&mut self, items: Vec<NewsItem>) -> Vec<NewsItem> {
        items
            .into_iter()
            .filter(|item| self.urls.insert(item.url().to_string()))
            .collect()
    }

    /// Drops items whose URL was seen before, without recording anything.
    ///
    /// A URL repeated within `items` is kept on its first occurrence only.
    #[must_use]
    pub fn unseen(&self, items: Vec<NewsItem>) -> Vec<NewsItem> {
        let mut batch = HashSet::new();
        items
            .into_iter()
            .filter(|item| !self.contains(item.url()) && batch.insert(item.url().to_string()))
            .collect()
    }

    /// Records `urls` as seen.
    pub fn record<I, S>(&mut self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls.extend(urls.into_iter().map(Into::into));
    }

    /// Returns `true` if `url` has been recorded.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Number of recorded URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Iterates over the recorded URLs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SeenUrls {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().map(Into::into).collect(),
        }
    }
}
