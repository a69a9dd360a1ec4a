//! Symbol normalization models
//!
//! - `key` - Canonical lookup key (CanonicalKey)
//! - `resolved` - Resolution outcome and the strategy that produced it
//! - `snapshot` - Copy of the broker symbol universe (UniverseSnapshot)

mod key;
mod resolved;
mod snapshot;

pub use key::CanonicalKey;
pub use resolved::{MatchStrategy, ResolvedSymbol};
pub use snapshot::UniverseSnapshot;
