//! Subcommand implementations.

pub(crate) mod earnings;
pub(crate) mod news;
pub(crate) mod performance;
pub(crate) mod report;
pub(crate) mod universe;

use std::sync::Arc;

use anyhow::Result;
use boletin::{DataSource, ProviderKind, Symbol, filter::Universe};
use tracing::debug;

use crate::SourceArgs;

const RULE_WIDTH: usize = 62;

impl SourceArgs {
    /// Explicit tickers if any were given, otherwise the named universe.
    pub(crate) fn resolve_tickers(&self) -> Result<Vec<Symbol>> {
        if !self.tickers.is_empty() {
            return Ok(self
                .tickers
                .iter()
                .map(|t| t.trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .collect());
        }
        let universe: Universe = self.universe.parse()?;
        Ok(universe.tickers())
    }

    /// Builds the selected provider.
    pub(crate) fn build_source(&self) -> Result<Arc<DataSource>> {
        let kind = ProviderKind::from_name(&self.provider);
        debug!(provider = %kind, "building data source");
        Ok(Arc::new(DataSource::build(kind, self.snapshot.as_deref())?))
    }
}

/// Prints a boxed section title.
pub(crate) fn print_header(title: &str) {
    println!("\n╔{}╗", "═".repeat(RULE_WIDTH));
    println!("║{title:^RULE_WIDTH$}║");
    println!("╚{}╝\n", "═".repeat(RULE_WIDTH));
}

/// Prints a heavy rule under a subsection title.
pub(crate) fn print_rule(title: &str) {
    println!("{}", "━".repeat(RULE_WIDTH));
    println!("{title}");
    println!("{}\n", "━".repeat(RULE_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Format;

    fn args(universe: &str, tickers: &[&str]) -> SourceArgs {
        SourceArgs {
            provider: "fmp".to_string(),
            snapshot: None,
            universe: universe.to_string(),
            tickers: tickers.iter().map(|t| (*t).to_string()).collect(),
            format: Format::Text,
        }
    }

    #[test]
    fn test_explicit_tickers_win() {
        let tickers = args("sp10", &[" aapl", "", "Msft"]).resolve_tickers().unwrap();
        assert_eq!(tickers, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_universe_tickers() {
        assert_eq!(args("sp10", &[]).resolve_tickers().unwrap().len(), 10);
        assert!(args("nasdaq", &[]).resolve_tickers().is_err());
    }

    #[test]
    fn test_snapshot_without_path_fails() {
        let mut source = args("sp10", &[]);
        source.provider = "snapshot".to_string();
        assert!(source.build_source().is_err());
    }
}
