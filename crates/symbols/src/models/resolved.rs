use serde::{Deserialize, Serialize};

/// Which resolution step produced a broker symbol.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum MatchStrategy {
    /// Served from the resolution memo without searching.
    Memo,
    /// A universe entry equals the key, ignoring case.
    Exact,
    /// The key plus a plausible broker suffix (e.g. "EURUSD" -> "EURUSD.c").
    Suffix,
    /// Matched through an alias candidate (e.g. "GOLD" -> "XAUUSD.iux").
    Alias {
        /// The alias candidate that matched
        via: String,
    },
    /// Last resort: the key is a prefix or suffix of a universe entry.
    Substring,
}

/// Result of a successful resolution.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSymbol {
    /// Broker-native symbol name, exactly as listed by the broker.
    pub symbol: String,
    /// How the symbol was found.
    pub strategy: MatchStrategy,
}

impl ResolvedSymbol {
    pub fn new(symbol: impl Into<String>, strategy: MatchStrategy) -> Self {
        Self {
            symbol: symbol.into(),
            strategy,
        }
    }
}
