//! Provider strategy selection by name.

use std::{fmt, path::Path};

use boletin_fmp::FmpProvider;
use boletin_traits::{
    BoletinError, EarningsProvider, EarningsRecord, NewsItem, NewsProvider,
    PricePerformanceProvider, PricePerformanceRecord, Result, Symbol,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::snapshot::SnapshotProvider;

/// Known provider strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Financial Modeling Prep over HTTP.
    #[default]
    Fmp,
    /// A JSON snapshot on disk.
    Snapshot,
}

impl ProviderKind {
    /// Every strategy, default first.
    pub const ALL: [Self; 2] = [Self::Fmp, Self::Snapshot];

    /// Resolves a strategy name.
    ///
    /// Matching ignores case and surrounding whitespace. An unknown name
    /// logs a warning and resolves to the default, [`ProviderKind::Fmp`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "fmp" | "financialmodelingprep" => Self::Fmp,
            "snapshot" | "file" => Self::Snapshot,
            other => {
                let fallback = Self::default();
                warn!(provider = other, %fallback, "unknown provider, using default");
                fallback
            }
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fmp => "fmp",
            Self::Snapshot => "snapshot",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete provider chosen at runtime.
///
/// Implements all three provider traits by delegating to the wrapped
/// provider, so managers stay generic over a single type.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Financial Modeling Prep.
    Fmp(FmpProvider),
    /// Snapshot file.
    Snapshot(SnapshotProvider),
}

impl DataSource {
    /// Builds the provider for `kind`.
    ///
    /// `snapshot` is the file to load for [`ProviderKind::Snapshot`] and is
    /// ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `FMP_API_KEY` is missing for the FMP
    /// provider or no snapshot path is given, and an I/O or JSON error if the
    /// snapshot cannot be loaded.
    pub fn build(kind: ProviderKind, snapshot: Option<&Path>) -> Result<Self> {
        match kind {
            ProviderKind::Fmp => Ok(Self::Fmp(FmpProvider::from_env()?)),
            ProviderKind::Snapshot => {
                let path = snapshot.ok_or_else(|| {
                    BoletinError::Configuration("snapshot provider requires a snapshot path".into())
                })?;
                Ok(Self::Snapshot(SnapshotProvider::load(path)?))
            }
        }
    }

    /// Strategy this source was built from.
    #[must_use]
    pub const fn kind(&self) -> ProviderKind {
        match self {
            Self::Fmp(_) => ProviderKind::Fmp,
            Self::Snapshot(_) => ProviderKind::Snapshot,
        }
    }
}

impl From<FmpProvider> for DataSource {
    fn from(provider: FmpProvider) -> Self {
        Self::Fmp(provider)
    }
}

impl From<SnapshotProvider> for DataSource {
    fn from(provider: SnapshotProvider) -> Self {
        Self::Snapshot(provider)
    }
}

impl NewsProvider for DataSource {
    async fn fetch_news(&self, tickers: &[Symbol], days_behind: u32) -> Result<Vec<NewsItem>> {
        match self {
            Self::Fmp(p) => p.fetch_news(tickers, days_behind).await,
            Self::Snapshot(p) => p.fetch_news(tickers, days_behind).await,
        }
    }
}

impl EarningsProvider for DataSource {
    async fn fetch_earnings(&self, tickers: &[Symbol], cutoff: NaiveDate) -> Result<Vec<EarningsRecord>> {
        match self {
            Self::Fmp(p) => p.fetch_earnings(tickers, cutoff).await,
            Self::Snapshot(p) => p.fetch_earnings(tickers, cutoff).await,
        }
    }
}

impl PricePerformanceProvider for DataSource {
    async fn fetch_price_performance(
        &self,
        tickers: &[Symbol],
        window_days: u32,
    ) -> Result<Vec<PricePerformanceRecord>> {
        match self {
            Self::Fmp(p) => p.fetch_price_performance(tickers, window_days).await,
            Self::Snapshot(p) => p.fetch_price_performance(tickers, window_days).await,
        }
    }
}
