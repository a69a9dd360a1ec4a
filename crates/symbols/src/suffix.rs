//! Broker suffix heuristic.
//!
//! Brokers decorate base instrument names in unbounded ways ("EURUSD.c",
//! "US30#", "XAUUSD_ecn", "GBPUSDpro"). This module decides whether the
//! fragment left after stripping a base name looks like such a decoration,
//! as opposed to the tail of a different instrument ("EURUSD" vs "EURUSDT").

/// Characters that introduce a broker suffix.
pub const SUFFIX_SEPARATORS: &[char] = &['.', '#', '_', '-'];

/// Bare suffix tokens seen across brokers, matched case-insensitively.
pub const KNOWN_SUFFIXES: &[&str] = &["c", "pro", "ecn", "raw", "std", "prime", "iux", "uk", "us"];

/// Returns true if `fragment` is plausibly a broker-added suffix.
///
/// A fragment qualifies when it is non-empty and either starts with one of
/// [`SUFFIX_SEPARATORS`] or equals one of [`KNOWN_SUFFIXES`] ignoring case.
pub fn is_plausible_suffix(fragment: &str) -> bool {
    let Some(first) = fragment.chars().next() else {
        return false;
    };

    if SUFFIX_SEPARATORS.contains(&first) {
        return true;
    }

    KNOWN_SUFFIXES
        .iter()
        .any(|suffix| fragment.eq_ignore_ascii_case(suffix))
}
