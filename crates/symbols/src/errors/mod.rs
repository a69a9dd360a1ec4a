//! Error types and retry classification for symbol normalization.
//!
//! This module provides:
//! - [`SymbolError`]: The error enum for every normalizer operation
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while normalizing broker symbols.
///
/// Three outcomes matter to callers:
/// - empty input, reported before the cache is touched
/// - not found, an expected result for instruments the broker does not list
/// - universe unavailable, any failure of the symbol listing call
///
/// Use [`is_not_found`](Self::is_not_found) and
/// [`is_universe_unavailable`](Self::is_universe_unavailable) to tell them apart.
#[derive(Error, Debug)]
pub enum SymbolError {
    /// The input was empty after trimming whitespace.
    #[error("Input symbol is empty")]
    EmptyInput,

    /// Every resolution strategy was exhausted without a match.
    #[error("Symbol '{input}' not found in broker universe")]
    NotFound {
        /// The canonical form of the requested symbol
        input: String,
    },

    /// The broker universe could not be obtained or was unusable.
    #[error("Symbol universe unavailable: {0}")]
    UniverseUnavailable(String),

    /// The gateway client has no session token.
    #[error("Not connected")]
    NotConnected,

    /// A network error occurred while talking to the gateway.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("Gateway returned status {status}: {body}")]
    Gateway {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The gateway response could not be decoded.
    #[error("Failed to decode gateway response: {0}")]
    Decode(String),
}

impl SymbolError {
    /// True when all strategies ran and nothing matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for any failure to obtain the broker universe.
    pub fn is_universe_unavailable(&self) -> bool {
        matches!(
            self,
            Self::UniverseUnavailable(_)
                | Self::NotConnected
                | Self::Network(_)
                | Self::Gateway { .. }
                | Self::Decode(_)
        )
    }

    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtgate_symbols::errors::{RetryClass, SymbolError};
    ///
    /// let error = SymbolError::NotFound { input: "ZZZ".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    ///
    /// let error = SymbolError::NotConnected;
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::EmptyInput | Self::NotFound { .. } => RetryClass::Never,

            Self::UniverseUnavailable(_)
            | Self::NotConnected
            | Self::Network(_)
            | Self::Gateway { .. }
            | Self::Decode(_) => RetryClass::WithBackoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_never_retries() {
        let error = SymbolError::NotFound {
            input: "GBPUSD".to_string(),
        };
        assert!(error.is_not_found());
        assert!(!error.is_universe_unavailable());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_empty_input_never_retries() {
        let error = SymbolError::EmptyInput;
        assert!(!error.is_not_found());
        assert!(!error.is_universe_unavailable());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_listing_failures_are_universe_unavailable() {
        let errors = [
            SymbolError::UniverseUnavailable("empty symbol list".to_string()),
            SymbolError::NotConnected,
            SymbolError::Gateway {
                status: 500,
                body: "boom".to_string(),
            },
            SymbolError::Decode("expected array".to_string()),
        ];

        for error in errors {
            assert!(error.is_universe_unavailable(), "{error}");
            assert!(!error.is_not_found());
            assert_eq!(error.retry_class(), RetryClass::WithBackoff);
        }
    }

    #[test]
    fn test_error_display() {
        let error = SymbolError::NotFound {
            input: "GBPUSD".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Symbol 'GBPUSD' not found in broker universe"
        );

        assert_eq!(format!("{}", SymbolError::EmptyInput), "Input symbol is empty");

        let error = SymbolError::Gateway {
            status: 401,
            body: "invalid id".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Gateway returned status 401: invalid id"
        );
    }
}
