//! Alias table for cross-broker naming divergences.
//!
//! Maps a canonical key to an ordered list of alternate keys to try when the
//! key itself does not match the broker universe. "GOLD" is "XAUUSD" at most
//! brokers, "US30" is "DOW" at some, and so on.
//!
//! Entries are plain data. The table does not enforce symmetry: the built-in
//! entries for crypto map "BTCUSD" to "BITCOIN" but not the reverse.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Built-in aliases: metals, crypto majors, energy and stock indices.
pub const DEFAULT_ALIASES: &[(&str, &[&str])] = &[
    // Metals
    ("XAUUSD", &["GOLD", "XAUUSD", "GOLD."]),
    ("GOLD", &["XAUUSD", "GOLD", "XAUUSD."]),
    ("XAGUSD", &["SILVER", "XAGUSD", "SILVER."]),
    ("SILVER", &["XAGUSD", "SILVER", "XAGUSD."]),
    // Crypto
    ("BTCUSD", &["BITCOIN", "BTCUSD", "BTC"]),
    ("ETHUSD", &["ETHEREUM", "ETHUSD", "ETH"]),
    // Energy
    ("USOIL", &["CL", "WTI", "USOIL", "CRUDE"]),
    ("UKOIL", &["BRENT", "UKOIL"]),
    // Indices
    ("US30", &["DOW", "US30", "DOWJONES"]),
    ("NAS100", &["NASDAQ", "NAS100", "NDX"]),
    ("SPX500", &["SP500", "SPX500", "US500"]),
    ("GER40", &["DAX", "GER40", "DE40"]),
];

/// Canonical key -> ordered alias candidates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// Table pre-seeded with [`DEFAULT_ALIASES`].
    pub fn new() -> Self {
        let entries = DEFAULT_ALIASES
            .iter()
            .map(|(key, candidates)| {
                (
                    key.to_string(),
                    candidates.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect();

        Self { entries }
    }

    /// Table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Candidates for `key`, in the order they should be tried.
    /// Returns an empty slice for unknown keys.
    pub fn lookup(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Overwrite the entry for `key`. The key is upper-cased; candidates are
    /// stored as given and are expected to be canonical already.
    pub fn set<I, S>(&mut self, key: &str, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            key.trim().to_uppercase(),
            candidates.into_iter().map(Into::into).collect(),
        );
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys with an entry, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Same as [`AliasTable::new`]: the built-in entries are part of the default.
impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_seeded() {
        let table = AliasTable::new();
        assert_eq!(table.len(), DEFAULT_ALIASES.len());
        assert_eq!(table.lookup("GOLD"), ["XAUUSD", "GOLD", "XAUUSD."]);
        assert_eq!(table.lookup("US30"), ["DOW", "US30", "DOWJONES"]);
    }

    #[test]
    fn test_default_matches_seeded_table() {
        let table = AliasTable::default();
        assert_eq!(table, AliasTable::new());
        assert_eq!(table.lookup("GOLD"), ["XAUUSD", "GOLD", "XAUUSD."]);
        assert!(AliasTable::empty().is_empty());
    }

    #[test]
    fn test_unknown_key_yields_no_candidates() {
        let table = AliasTable::new();
        assert!(table.lookup("EURUSD").is_empty());
        assert!(AliasTable::empty().lookup("GOLD").is_empty());
    }

    #[test]
    fn test_metals_are_symmetric() {
        let table = AliasTable::new();
        assert!(table.lookup("XAUUSD").iter().any(|c| c == "GOLD"));
        assert!(table.lookup("GOLD").iter().any(|c| c == "XAUUSD"));
        assert!(table.lookup("XAGUSD").iter().any(|c| c == "SILVER"));
        assert!(table.lookup("SILVER").iter().any(|c| c == "XAGUSD"));
    }

    #[test]
    fn test_crypto_aliases_are_one_directional() {
        // Intentionally not symmetrized; "BITCOIN" and "ETH" have no entry.
        let table = AliasTable::new();
        assert!(table.lookup("BTCUSD").iter().any(|c| c == "BITCOIN"));
        assert!(!table.contains("BITCOIN"));
        assert!(!table.contains("BTC"));
        assert!(!table.contains("ETH"));
        assert!(!table.contains("DOW"));
    }

    #[test]
    fn test_set_overwrites_and_uppercases_key() {
        let mut table = AliasTable::new();
        table.set("gold", ["XAUUSD.PRO"]);
        assert_eq!(table.lookup("GOLD"), ["XAUUSD.PRO"]);
        assert!(!table.contains("gold"));

        table.set("NatGas", vec!["XNGUSD".to_string()]);
        assert_eq!(table.lookup("NATGAS"), ["XNGUSD"]);
        assert_eq!(table.len(), DEFAULT_ALIASES.len() + 1);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut table = AliasTable::empty();
        table.set("COPPER", ["XCUUSD"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"COPPER":["XCUUSD"]}"#);

        let back: AliasTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
