//! Ticker universes and the ticker to company-name directory.

use std::collections::HashMap;
use std::str::FromStr;

use boletin_traits::{BoletinError, Symbol};
use serde::{Deserialize, Serialize};

/// S&P 100 constituents with short company names, largest weights first.
///
/// The short names are the forms headlines actually use ("Apple", not
/// "Apple Inc."), since the mention filter does substring matching.
const SP100: &[(&str, &str)] = &[
    ("AAPL", "Apple"),
    ("MSFT", "Microsoft"),
    ("NVDA", "Nvidia"),
    ("AMZN", "Amazon"),
    ("GOOGL", "Alphabet"),
    ("META", "Meta"),
    ("BRK.B", "Berkshire Hathaway"),
    ("AVGO", "Broadcom"),
    ("TSLA", "Tesla"),
    ("LLY", "Eli Lilly"),
    ("JPM", "JPMorgan"),
    ("V", "Visa"),
    ("UNH", "UnitedHealth"),
    ("XOM", "Exxon"),
    ("MA", "Mastercard"),
    ("COST", "Costco"),
    ("HD", "Home Depot"),
    ("PG", "Procter & Gamble"),
    ("JNJ", "Johnson & Johnson"),
    ("WMT", "Walmart"),
    ("NFLX", "Netflix"),
    ("ABBV", "AbbVie"),
    ("BAC", "Bank of America"),
    ("CRM", "Salesforce"),
    ("ORCL", "Oracle"),
    ("CVX", "Chevron"),
    ("KO", "Coca-Cola"),
    ("MRK", "Merck"),
    ("AMD", "Advanced Micro Devices"),
    ("PEP", "PepsiCo"),
    ("ADBE", "Adobe"),
    ("LIN", "Linde"),
    ("TMO", "Thermo Fisher"),
    ("ACN", "Accenture"),
    ("MCD", "McDonald's"),
    ("CSCO", "Cisco"),
    ("ABT", "Abbott"),
    ("WFC", "Wells Fargo"),
    ("GE", "General Electric"),
    ("IBM", "IBM"),
    ("PM", "Philip Morris"),
    ("DHR", "Danaher"),
    ("TXN", "Texas Instruments"),
    ("INTU", "Intuit"),
    ("QCOM", "Qualcomm"),
    ("DIS", "Disney"),
    ("VZ", "Verizon"),
    ("CAT", "Caterpillar"),
    ("AMGN", "Amgen"),
    ("NEE", "NextEra"),
    ("PFE", "Pfizer"),
    ("T", "AT&T"),
    ("GS", "Goldman Sachs"),
    ("RTX", "Raytheon"),
    ("LOW", "Lowe's"),
    ("SPGI", "S&P Global"),
    ("CMCSA", "Comcast"),
    ("UNP", "Union Pacific"),
    ("BKNG", "Booking"),
    ("HON", "Honeywell"),
    ("AXP", "American Express"),
    ("MS", "Morgan Stanley"),
    ("BLK", "BlackRock"),
    ("COP", "ConocoPhillips"),
    ("UBER", "Uber"),
    ("LMT", "Lockheed Martin"),
    ("PYPL", "PayPal"),
    ("C", "Citigroup"),
    ("BA", "Boeing"),
    ("DE", "Deere"),
    ("NKE", "Nike"),
    ("SBUX", "Starbucks"),
    ("MDT", "Medtronic"),
    ("GILD", "Gilead"),
    ("BMY", "Bristol Myers"),
    ("SCHW", "Charles Schwab"),
    ("MO", "Altria"),
    ("INTC", "Intel"),
    ("UPS", "UPS"),
    ("MMM", "3M"),
    ("AMT", "American Tower"),
    ("CVS", "CVS"),
    ("TGT", "Target"),
    ("MDLZ", "Mondelez"),
    ("USB", "U.S. Bancorp"),
    ("DUK", "Duke Energy"),
    ("SO", "Southern Company"),
    ("CL", "Colgate-Palmolive"),
    ("GD", "General Dynamics"),
    ("EMR", "Emerson"),
    ("COF", "Capital One"),
    ("MET", "MetLife"),
    ("AIG", "AIG"),
    ("BK", "BNY Mellon"),
    ("F", "Ford"),
    ("GM", "General Motors"),
    ("KHC", "Kraft Heinz"),
    ("FDX", "FedEx"),
    ("TMUS", "T-Mobile"),
    ("PLTR", "Palantir"),
];

/// Named ticker universe.
///
/// Smaller universes are prefixes of the S&P 100 list, so `Sp10` holds the
/// ten largest constituents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Universe {
    /// Full S&P 100.
    #[default]
    Sp100,
    /// Top 50 constituents.
    Sp50,
    /// Top 20 constituents.
    Sp20,
    /// Top 10 constituents.
    Sp10,
}

impl Universe {
    /// All universes, largest first.
    pub const ALL: [Self; 4] = [Self::Sp100, Self::Sp50, Self::Sp20, Self::Sp10];

    /// Number of tickers in this universe.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Sp100 => 100,
            Self::Sp50 => 50,
            Self::Sp20 => 20,
            Self::Sp10 => 10,
        }
    }

    /// CLI-facing name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sp100 => "sp100",
            Self::Sp50 => "sp50",
            Self::Sp20 => "sp20",
            Self::Sp10 => "sp10",
        }
    }

    /// Tickers in this universe, largest weight first.
    #[must_use]
    pub fn tickers(&self) -> Vec<Symbol> {
        SP100
            .iter()
            .take(self.size())
            .map(|(ticker, _)| (*ticker).to_string())
            .collect()
    }
}

impl FromStr for Universe {
    type Err = BoletinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|u| u.as_str() == normalized)
            .ok_or_else(|| BoletinError::InvalidData(format!("Unknown universe: '{s}'")))
    }
}

/// Read-only ticker to company-name lookup.
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    names: HashMap<Symbol, String>,
}

impl CompanyDirectory {
    /// Builds a directory from `(ticker, name)` pairs.
    pub fn from_pairs<I, T, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, N)>,
        T: AsRef<str>,
        N: Into<String>,
    {
        let names = pairs
            .into_iter()
            .map(|(ticker, name)| (ticker.as_ref().to_uppercase(), name.into()))
            .collect();
        Self { names }
    }

    /// Directory covering every S&P 100 ticker.
    #[must_use]
    pub fn sp100() -> Self {
        Self::from_pairs(SP100.iter().copied())
    }

    /// Company name for `ticker`, case-insensitive on the ticker.
    #[must_use]
    pub fn company_name(&self, ticker: &str) -> Option<&str> {
        self.names
            .get(&ticker.to_uppercase())
            .map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the directory has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
