//! Keyword vocabularies for the title filter.

use std::str::FromStr;

use boletin_traits::BoletinError;
use serde::{Deserialize, Serialize};

/// Discrete corporate events that move prices.
const HARD_EVENT: &[&str] = &[
    "earnings",
    "merger",
    "acquisition",
    "acquire",
    "buyout",
    "takeover",
    "lawsuit",
    "sued",
    "settlement",
    "recall",
    "bankruptcy",
    "investigation",
    "antitrust",
    "probe",
    "fda",
    "approval",
    "layoff",
    "strike",
    "breach",
    "guidance",
    "downgrade",
    "upgrade",
];

const FINANCIAL: &[&str] = &[
    "revenue",
    "profit",
    "loss",
    "dividend",
    "buyback",
    "forecast",
    "outlook",
    "beats",
    "misses",
    "quarter",
];

const PRODUCT: &[&str] = &[
    "launch",
    "unveil",
    "release",
    "product",
    "partnership",
    "contract",
    "deal",
];

const MANAGEMENT: &[&str] = &[
    "ceo",
    "cfo",
    "resign",
    "steps down",
    "appoint",
    "board",
    "executive",
];

/// Named keyword vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeywordSet {
    /// Hard corporate events. Default for the title filter.
    #[default]
    HardEvent,
    /// Results and capital-return vocabulary.
    Financial,
    /// Product and deal vocabulary.
    Product,
    /// Leadership changes.
    Management,
    /// Union of every vocabulary.
    Important,
}

impl KeywordSet {
    /// All sets.
    pub const ALL: [Self; 5] = [
        Self::HardEvent,
        Self::Financial,
        Self::Product,
        Self::Management,
        Self::Important,
    ];

    /// CLI-facing name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HardEvent => "hard-event",
            Self::Financial => "financial",
            Self::Product => "product",
            Self::Management => "management",
            Self::Important => "important",
        }
    }

    /// Words in this vocabulary.
    #[must_use]
    pub fn words(&self) -> Vec<&'static str> {
        match self {
            Self::HardEvent => HARD_EVENT.to_vec(),
            Self::Financial => FINANCIAL.to_vec(),
            Self::Product => PRODUCT.to_vec(),
            Self::Management => MANAGEMENT.to_vec(),
            Self::Important => [HARD_EVENT, FINANCIAL, PRODUCT, MANAGEMENT].concat(),
        }
    }
}

impl FromStr for KeywordSet {
    type Err = BoletinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|set| set.as_str() == normalized)
            .ok_or_else(|| BoletinError::InvalidData(format!("Unknown keyword set: '{s}'")))
    }
}

/// Lowercased keyword list used by the title filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    words: Vec<String>,
}

impl Keywords {
    /// Builds a keyword list. Words are lowercased; blanks are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Keyword list for a named vocabulary.
    #[must_use]
    pub fn from_set(set: KeywordSet) -> Self {
        Self::new(set.words())
    }

    /// Returns `true` if the already-lowercased `text` contains any keyword.
    #[must_use]
    pub fn matches(&self, lowercase_text: &str) -> bool {
        self.words.iter().any(|w| lowercase_text.contains(w.as_str()))
    }

    /// The normalized words.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::from_set(KeywordSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_lowercased() {
        let keywords = Keywords::new(["Merger", " LAWSUIT ", ""]);
        assert_eq!(keywords.words(), &["merger".to_string(), "lawsuit".to_string()]);
    }

    #[test]
    fn test_matches_substring() {
        let keywords = Keywords::from_set(KeywordSet::HardEvent);
        assert!(keywords.matches("apple faces antitrust lawsuit in eu"));
        assert!(keywords.matches("q3 earnings preview"));
        assert!(!keywords.matches("five stocks to watch this week"));
    }

    #[test]
    fn test_important_is_union() {
        let all = KeywordSet::Important.words();
        for set in [
            KeywordSet::HardEvent,
            KeywordSet::Financial,
            KeywordSet::Product,
            KeywordSet::Management,
        ] {
            for word in set.words() {
                assert!(all.contains(&word));
            }
        }
    }

    #[test]
    fn test_keyword_set_from_str() {
        assert_eq!("hard_event".parse::<KeywordSet>().unwrap(), KeywordSet::HardEvent);
        assert_eq!("Financial".parse::<KeywordSet>().unwrap(), KeywordSet::Financial);
        assert!("gossip".parse::<KeywordSet>().is_err());
    }

    #[test]
    fn test_default_is_hard_event() {
        assert_eq!(Keywords::default(), Keywords::from_set(KeywordSet::HardEvent));
    }
}
