//! Relevance oracle trait.

use std::future::Future;

use crate::{NewsItem, Result};

/// External semantic ranker that picks the most market-moving news.
///
/// Contract:
/// - the output holds at most `top_k` items, each corresponding to exactly one
///   candidate (matched by `url`);
/// - any field the oracle cannot reproduce verbatim (the summary) comes from
///   the candidate, not from the oracle;
/// - every non-success condition is reported as
///   [`BoletinError::OracleSelection`](crate::BoletinError::OracleSelection).
pub trait RelevanceOracle: Send + Sync {
    /// Selects up to `top_k` of `candidates`, most impactful first.
    fn select_top(
        &self,
        candidates: &[NewsItem],
        top_k: usize,
    ) -> impl Future<Output = Result<Vec<NewsItem>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoletinError, OracleFailure};

    struct EchoOracle;

    impl RelevanceOracle for EchoOracle {
        async fn select_top(&self, candidates: &[NewsItem], top_k: usize) -> Result<Vec<NewsItem>> {
            Ok(candidates.iter().take(top_k).cloned().collect())
        }
    }

    struct DownOracle;

    impl RelevanceOracle for DownOracle {
        async fn select_top(&self, _: &[NewsItem], _: usize) -> Result<Vec<NewsItem>> {
            Err(BoletinError::oracle(OracleFailure::Unavailable, "connection refused"))
        }
    }

    fn items(n: usize) -> Vec<NewsItem> {
        (0..n)
            .map(|i| NewsItem::new(format!("t{i}"), "", None, format!("u{i}"), "AAPL"))
            .collect()
    }

    #[tokio::test]
    async fn test_echo_oracle_truncates() {
        let picked = EchoOracle.select_top(&items(5), 2).await.unwrap();
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].url(), "u0");
    }

    #[tokio::test]
    async fn test_failing_oracle_reports_oracle_error() {
        let err = DownOracle.select_top(&items(1), 1).await.unwrap_err();
        assert!(err.is_oracle_failure());
    }
}
