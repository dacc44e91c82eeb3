//! Markdown report assembly.
//!
//! A [`Report`] renders through [`fmt::Display`]; [`Report::to_markdown`] is
//! a convenience wrapper.

use std::fmt;

use boletin_traits::{BoletinError, EarningsRecord, NewsItem, PricePerformanceRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ranking::Performance;

/// Outcome of the news selection for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum NewsSection {
    /// Selection succeeded; may legitimately be empty.
    Selected(Vec<NewsItem>),
    /// Selection failed with the given reason.
    Unavailable(String),
}

impl NewsSection {
    /// Converts a selection result, keeping the failure reason.
    #[must_use]
    pub fn from_result(result: Result<Vec<NewsItem>, BoletinError>) -> Self {
        match result {
            Ok(items) => Self::Selected(items),
            Err(e) => Self::Unavailable(e.to_string()),
        }
    }

    /// Returns `true` if the selection failed.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// The full periodic report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Day the report covers.
    pub generated_on: NaiveDate,
    /// Upcoming earnings, nearest first.
    pub earnings: Vec<EarningsRecord>,
    /// Selected news, or why there is none.
    pub news: NewsSection,
    /// Winners and losers.
    pub performance: Performance,
}

impl Report {
    /// Renders the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Market report for {}", self.generated_on.format("%d.%m.%Y"))?;
        writeln!(f)?;
        write_earnings(f, &self.earnings)?;
        write_news(f, &self.news)?;
        write_performance(f, &self.performance)
    }
}

fn write_earnings(f: &mut fmt::Formatter<'_>, earnings: &[EarningsRecord]) -> fmt::Result {
    writeln!(f, "## Upcoming earnings")?;
    writeln!(f)?;
    if earnings.is_empty() {
        writeln!(f, "No earnings announcements in the window.")?;
        return writeln!(f);
    }

    for record in earnings {
        writeln!(f, "### {} - {}", company_label(record), record.ticker)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Announcement:** {}",
            record.announcement_date.format("%d.%m.%Y")
        )?;
        match &record.eps_estimate {
            Some(eps) => {
                writeln!(f, "- **EPS estimate (avg):** {:.2}", eps.avg)?;
                writeln!(f, "- **EPS estimate (low):** {:.2}", eps.low)?;
                writeln!(f, "- **EPS estimate (high):** {:.2}", eps.high)?;
            }
            None => writeln!(f, "- **EPS estimate:** n/a")?,
        }
        writeln!(f, "- **Market cap:** {}", dollars(record.market_cap))?;
        writeln!(f, "- **Revenue estimate:** {}", dollars(record.revenue_estimate))?;
        writeln!(f)?;

        if !record.prior_earnings.is_empty() {
            writeln!(f, "**Prior earnings** (most recent first)")?;
            writeln!(f)?;
            write!(f, "| |")?;
            for i in 1..=record.prior_earnings.len() {
                write!(f, " Q-{i} |")?;
            }
            writeln!(f)?;
            writeln!(f, "|---|{}", "---|".repeat(record.prior_earnings.len()))?;
            write!(f, "| **Expected** |")?;
            for prior in &record.prior_earnings {
                write!(f, " {:.2} |", prior.expected_eps)?;
            }
            writeln!(f)?;
            write!(f, "| **Actual** |")?;
            for prior in &record.prior_earnings {
                write!(f, " {:.2} |", prior.actual_eps)?;
            }
            writeln!(f)?;
            write!(f, "| **Price move (%)** |")?;
            for prior in &record.prior_earnings {
                write!(f, " {:+.2} |", prior.price_move_percent)?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }

        if let (Some(first), Some(last)) = (record.recent_prices.first(), record.recent_prices.last()) {
            writeln!(
                f,
                "- **Last {} closes:** {first:.2} to {last:.2}",
                record.recent_prices.len()
            )?;
            writeln!(f)?;
        }
    }
    Ok(())
}

fn write_news(f: &mut fmt::Formatter<'_>, news: &NewsSection) -> fmt::Result {
    writeln!(f, "## Top news")?;
    writeln!(f)?;
    match news {
        NewsSection::Unavailable(reason) => {
            writeln!(f, "> News section unavailable: {reason}")?;
            writeln!(f)
        }
        NewsSection::Selected(items) if items.is_empty() => {
            writeln!(f, "No relevant news found.")?;
            writeln!(f)
        }
        NewsSection::Selected(items) => {
            for item in items {
                writeln!(
                    f,
                    "### [{}]({}) - {}",
                    escape_link_text(item.title()),
                    item.url(),
                    item.ticker()
                )?;
                writeln!(f)?;
                if let Some(ts) = item.published_at() {
                    writeln!(f, "Published: {}", ts.format("%d.%m.%Y %H:%M UTC"))?;
                    writeln!(f)?;
                }
                if !item.summary().is_empty() {
                    writeln!(f, "{}", item.summary())?;
                    writeln!(f)?;
                }
                writeln!(f, "---")?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Backslash-escapes characters that would end a Markdown link label early.
fn escape_link_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn write_performance(f: &mut fmt::Formatter<'_>, performance: &Performance) -> fmt::Result {
    writeln!(f, "## Price performance")?;
    writeln!(f)?;
    if performance.is_empty() {
        return writeln!(f, "No price data available.");
    }
    write_performance_table(f, "Winners", &performance.winners)?;
    write_performance_table(f, "Losers", &performance.losers)
}

fn write_performance_table(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    records: &[PricePerformanceRecord],
) -> fmt::Result {
    writeln!(f, "### {title}")?;
    writeln!(f)?;
    writeln!(f, "| Ticker | First | Last | Change (%) |")?;
    writeln!(f, "|---|---|---|---|")?;
    for record in records {
        writeln!(
            f,
            "| {} | {} | {} | {:+.2} |",
            record.ticker,
            price(record.first_price()),
            price(record.last_price()),
            record.percent_change()
        )?;
    }
    writeln!(f)
}

fn company_label(record: &EarningsRecord) -> &str {
    if record.company_name.is_empty() {
        &record.ticker
    } else {
        &record.company_name
    }
}

fn price(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

/// Whole dollars with thousands separators, e.g. `$3,120,000,000`.
fn dollars(value: Option<f64>) -> String {
    let Some(value) = value else {
        return "n/a".to_string();
    };
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}")
}
