//! Selection managers, one per report category.
//!
//! Each manager is built from explicitly injected collaborators (a provider,
//! and for news an oracle) held behind [`Arc`](std::sync::Arc), so several
//! managers can share one provider. Managers never share mutable state.
//!
//! Tickers default to [`Universe::default`](boletin_filter::Universe) when
//! none are given.

mod earnings;
mod news;
mod performance;

pub use earnings::EarningsManager;
pub use news::NewsManager;
pub use performance::PerformanceManager;

use boletin_filter::Universe;
use boletin_traits::Symbol;

fn tickers_or_default(tickers: Vec<Symbol>) -> Vec<Symbol> {
    if tickers.is_empty() {
        Universe::default().tickers()
    } else {
        tickers
    }
}
