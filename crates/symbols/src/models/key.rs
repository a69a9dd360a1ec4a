use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SymbolError;

/// Upper-cased, whitespace-trimmed form of a user-supplied symbol.
///
/// All memo, alias and universe lookups go through this type, so two inputs
/// that differ only by case or surrounding whitespace always share a key.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Canonicalize `input`, rejecting inputs that are empty after trimming.
    pub fn new(input: &str) -> Result<Self, SymbolError> {
        let key = input.trim().to_uppercase();
        if key.is_empty() {
            return Err(SymbolError::EmptyInput);
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_uppercases() {
        let key = CanonicalKey::new("  eurusd\t").unwrap();
        assert_eq!(key.as_str(), "EURUSD");
    }

    #[test]
    fn test_case_and_whitespace_variants_share_a_key() {
        let a = CanonicalKey::new("Gold").unwrap();
        let b = CanonicalKey::new(" GOLD ").unwrap();
        let c = CanonicalKey::new("gold").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_empty_and_blank_inputs_are_rejected() {
        assert!(matches!(CanonicalKey::new(""), Err(SymbolError::EmptyInput)));
        assert!(matches!(
            CanonicalKey::new("   \n"),
            Err(SymbolError::EmptyInput)
        ));
    }

    #[test]
    fn test_keeps_broker_punctuation() {
        let key = CanonicalKey::new("us30#").unwrap();
        assert_eq!(key.to_string(), "US30#");
    }
}
