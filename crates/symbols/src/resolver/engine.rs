use log::debug;

use crate::alias::AliasTable;
use crate::errors::SymbolError;
use crate::models::{MatchStrategy, ResolvedSymbol};
use crate::suffix::is_plausible_suffix;

/// Resolve a canonical key to a broker-native symbol.
///
/// `key` must already be canonical (trimmed and upper-cased). The result is
/// deterministic for a given `universe` and `aliases`.
///
/// # Errors
/// * [`SymbolError::EmptyInput`] - `key` is empty
/// * [`SymbolError::NotFound`] - no strategy matched
pub fn resolve(
    key: &str,
    universe: &[String],
    aliases: &AliasTable,
) -> Result<ResolvedSymbol, SymbolError> {
    if key.is_empty() {
        return Err(SymbolError::EmptyInput);
    }

    if let Some(symbol) = exact_match(key, universe) {
        debug!("Resolved '{}' -> '{}' (exact)", key, symbol);
        return Ok(ResolvedSymbol::new(symbol, MatchStrategy::Exact));
    }

    if let Some(symbol) = shortest_suffix_match(key, universe) {
        debug!("Resolved '{}' -> '{}' (suffix)", key, symbol);
        return Ok(ResolvedSymbol::new(symbol, MatchStrategy::Suffix));
    }

    for candidate in aliases.lookup(key) {
        let candidate = candidate.to_uppercase();
        let found =
            exact_match(&candidate, universe).or_else(|| first_suffix_match(&candidate, universe));

        if let Some(symbol) = found.map(str::to_string) {
            debug!("Resolved '{}' -> '{}' (alias '{}')", key, symbol, candidate);
            return Ok(ResolvedSymbol::new(
                symbol,
                MatchStrategy::Alias { via: candidate },
            ));
        }
    }

    if let Some(symbol) = substring_match(key, universe) {
        debug!("Resolved '{}' -> '{}' (substring)", key, symbol);
        return Ok(ResolvedSymbol::new(symbol, MatchStrategy::Substring));
    }

    Err(SymbolError::NotFound {
        input: key.to_string(),
    })
}

fn exact_match<'a>(key: &str, universe: &'a [String]) -> Option<&'a str> {
    universe
        .iter()
        .find(|symbol| symbol.to_uppercase() == key)
        .map(String::as_str)
}

/// Universe entries that are `key` followed by a plausible broker suffix.
fn suffix_matches<'a>(key: &'a str, universe: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
    universe
        .iter()
        .filter(move |symbol| {
            symbol
                .to_uppercase()
                .strip_prefix(key)
                .is_some_and(is_plausible_suffix)
        })
        .map(String::as_str)
}

/// Shortest suffix match; on equal length the earliest listed entry wins.
fn shortest_suffix_match<'a>(key: &'a str, universe: &'a [String]) -> Option<&'a str> {
    suffix_matches(key, universe).fold(None::<&'a str>, |best, symbol| match best {
        Some(current) if current.len() <= symbol.len() => Some(current),
        _ => Some(symbol),
    })
}

fn first_suffix_match<'a>(key: &'a str, universe: &'a [String]) -> Option<&'a str> {
    suffix_matches(key, universe).next()
}

/// Entries that start or end with `key`. Interior occurrences don't count.
fn substring_match<'a>(key: &str, universe: &'a [String]) -> Option<&'a str> {
    universe
        .iter()
        .find(|symbol| {
            let upper = symbol.to_uppercase();
            upper.starts_with(key) || upper.ends_with(key)
        })
        .map(String::as_str)
}
