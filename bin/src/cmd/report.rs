//! `boletin report`

use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use boletin::{
    EarningsManager, NewsManager, NewsSection, PerformanceManager, Report, defaults,
    oracle::GroqClient,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::{Format, SourceArgs};

/// Window lengths for the three categories, before coercion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Windows {
    pub(crate) days_behind: i64,
    pub(crate) days_ahead: i64,
    pub(crate) window: i64,
}

pub(crate) async fn run(source: &SourceArgs, windows: Windows, output: Option<&Path>) -> Result<()> {
    let tickers = source.resolve_tickers()?;
    let data = source.build_source()?;
    let oracle = Arc::new(GroqClient::from_env()?);

    let mut news = NewsManager::new(Arc::clone(&data), oracle)
        .with_tickers(tickers.clone())
        .with_days_behind(windows.days_behind);
    let earnings = EarningsManager::new(Arc::clone(&data))
        .with_tickers(tickers.clone())
        .with_days_ahead(windows.days_ahead);
    let performance = PerformanceManager::new(data)
        .with_tickers(tickers)
        .with_window(windows.window);

    info!("building report");
    let (news_result, earnings_result, performance_result) = tokio::join!(
        news.select(),
        earnings.select(defaults::EARNINGS_COUNT as i64),
        performance.select(defaults::PERFORMANCE_COUNT as i64),
    );

    let news = NewsSection::from_result(news_result);
    if let NewsSection::Unavailable(reason) = &news {
        warn!(%reason, "news selection failed, report will omit news");
    }

    let report = Report {
        generated_on: Utc::now().date_naive(),
        earnings: earnings_result.context("earnings selection failed")?,
        news,
        performance: performance_result.context("price-performance selection failed")?,
    };

    let rendered = match source.format {
        Format::Json => serde_json::to_string_pretty(&report)?,
        Format::Text => report.to_markdown(),
    };

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
