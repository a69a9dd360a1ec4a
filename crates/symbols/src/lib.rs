//! MT5 Gateway Symbol Normalization
//!
//! Resolves user-supplied instrument names ("GOLD", "eurusd", "US30") into
//! the exact broker-native symbols a given broker trades ("XAUUSD.iux",
//! "EURUSD.c", "US30#"), without knowing the broker's naming in advance.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! | SymbolNormalizer |  normalize / normalize_many / available_symbols
//! +------------------+
//!     |         |
//!     |         v
//!     |   +---------------------+     +---------------+
//!     |   | SymbolUniverseCache | --> | SymbolSource  |  (GatewayClient)
//!     |   +---------------------+     +---------------+
//!     v
//! +------------------+
//! |     resolver     |  exact -> suffix -> alias -> substring
//! +------------------+
//!     |         |
//!     v         v
//! +--------+ +------------+
//! | suffix | | AliasTable |
//! +--------+ +------------+
//! ```
//!
//! # Core Types
//!
//! - [`SymbolNormalizer`] - Entry point, safe to share across tasks
//! - [`SymbolSource`] - Supplies the broker's tradable symbol list
//! - [`GatewayClient`] - `SymbolSource` over the gateway REST API
//! - [`AliasTable`] - Alternate names tried when direct matching fails
//! - [`SymbolError`] - Empty input, not found, or universe unavailable

pub mod alias;
pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalizer;
pub mod resolver;
pub mod source;
pub mod suffix;

pub use alias::{AliasTable, DEFAULT_ALIASES};
pub use cache::SymbolUniverseCache;
pub use config::{GatewayConfig, NormalizerConfig, DEFAULT_CACHE_DURATION};
pub use errors::{RetryClass, SymbolError};
pub use models::{CanonicalKey, MatchStrategy, ResolvedSymbol, UniverseSnapshot};
pub use normalizer::SymbolNormalizer;
pub use source::{GatewayClient, SymbolSource};
pub use suffix::{is_plausible_suffix, KNOWN_SUFFIXES};
