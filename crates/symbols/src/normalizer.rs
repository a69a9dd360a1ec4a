//! Entry point for symbol normalization.
//!
//! [`SymbolNormalizer`] ties together the universe cache, the alias table and
//! the resolver:
//!
//! ```text
//! input ─► canonicalize ─► memo hit? ──yes──► symbol
//!                              │ no
//!                              ▼
//!                     cache valid? ──no──► refresh (SymbolSource)
//!                              │
//!                              ▼
//!                 resolve(key, snapshot, aliases) ─► memoize ─► symbol
//! ```
//!
//! Failed resolutions are not memoized, so an instrument the broker adds
//! later resolves on the next refresh without clearing anything.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use log::debug;

use crate::alias::AliasTable;
use crate::cache::SymbolUniverseCache;
use crate::config::NormalizerConfig;
use crate::errors::SymbolError;
use crate::models::{CanonicalKey, MatchStrategy, ResolvedSymbol, UniverseSnapshot};
use crate::resolver;
use crate::source::SymbolSource;

/// Resolves informal instrument names to broker-native symbols.
///
/// Safe to share between tasks behind an `Arc`. No background work is
/// spawned; a stale universe is refreshed inline by whichever call needs it.
///
/// # Example
///
/// ```ignore
/// let normalizer = SymbolNormalizer::new(gateway_client);
///
/// assert_eq!(normalizer.normalize("gold").await?, "XAUUSD.iux");
/// assert_eq!(normalizer.normalize(" eurusd ").await?, "EURUSD.c");
/// ```
pub struct SymbolNormalizer {
    source: Box<dyn SymbolSource>,
    cache: SymbolUniverseCache,
    aliases: RwLock<AliasTable>,
}

impl SymbolNormalizer {
    /// Normalizer with the built-in alias table and a one-hour cache.
    pub fn new(source: impl SymbolSource + 'static) -> Self {
        Self::with_config(source, NormalizerConfig::default())
    }

    pub fn with_config(source: impl SymbolSource + 'static, config: NormalizerConfig) -> Self {
        let mut aliases = AliasTable::new();
        for (key, candidates) in &config.aliases {
            aliases.set(key, candidates.iter().cloned());
        }

        Self {
            source: Box::new(source),
            cache: SymbolUniverseCache::with_duration(config.cache_duration()),
            aliases: RwLock::new(aliases),
        }
    }

    /// Broker-native symbol for `input`.
    ///
    /// # Errors
    /// * [`SymbolError::EmptyInput`] - `input` is blank; the cache is not touched
    /// * [`SymbolError::NotFound`] - the broker lists nothing matching
    /// * any listing failure from the [`SymbolSource`], unchanged
    pub async fn normalize(&self, input: &str) -> Result<String, SymbolError> {
        self.resolve_detailed(input).await.map(|r| r.symbol)
    }

    /// Like [`normalize`](Self::normalize), also reporting which strategy matched.
    pub async fn resolve_detailed(&self, input: &str) -> Result<ResolvedSymbol, SymbolError> {
        let key = CanonicalKey::new(input)?;

        if let Some(symbol) = self.cache.memo_get(key.as_str()) {
            return Ok(ResolvedSymbol::new(symbol, MatchStrategy::Memo));
        }

        self.ensure_fresh().await?;

        let snapshot = self.cache.snapshot();
        let resolved = self.resolve_in(&key, &snapshot)?;

        self.cache.memoize(key.as_str(), &resolved.symbol, snapshot.epoch);
        Ok(resolved)
    }

    /// Resolve against one snapshot. A concurrent `clear_cache` can empty the
    /// cache after the freshness check; that is reported as unavailable,
    /// never as not found.
    fn resolve_in(
        &self,
        key: &CanonicalKey,
        snapshot: &UniverseSnapshot,
    ) -> Result<ResolvedSymbol, SymbolError> {
        if snapshot.is_empty() {
            return Err(SymbolError::UniverseUnavailable(format!(
                "symbol cache was cleared before '{}' could be resolved",
                key
            )));
        }

        let aliases = self.aliases.read().unwrap_or_else(PoisonError::into_inner);
        resolver::resolve(key.as_str(), &snapshot.symbols, &aliases)
    }

    /// Resolve each input independently.
    ///
    /// The map is keyed by the inputs exactly as given. Inputs that are blank
    /// or not found map to `None`. A universe failure aborts the whole batch,
    /// since no input could resolve without one.
    pub async fn normalize_many<S: AsRef<str>>(
        &self,
        inputs: &[S],
    ) -> Result<HashMap<String, Option<String>>, SymbolError> {
        let mut result = HashMap::with_capacity(inputs.len());

        for input in inputs {
            let input = input.as_ref();
            let resolved = match self.normalize(input).await {
                Ok(symbol) => Some(symbol),
                Err(e) if e.is_universe_unavailable() => return Err(e),
                Err(e) => {
                    debug!("Unresolved '{}': {}", input, e);
                    None
                }
            };
            result.insert(input.to_string(), resolved);
        }

        Ok(result)
    }

    /// Every symbol in the current universe, refreshing first if stale.
    pub async fn available_symbols(&self) -> Result<Vec<String>, SymbolError> {
        self.ensure_fresh().await?;
        Ok(self.cache.snapshot().symbols)
    }

    /// Refresh the universe now, regardless of validity.
    pub async fn refresh(&self) -> Result<usize, SymbolError> {
        self.cache.refresh(self.source.as_ref()).await
    }

    /// Drop the universe snapshot and every memoized resolution.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Replace the alias candidates for `key` (upper-cased).
    ///
    /// Existing memo entries are kept; the new aliases apply to keys that
    /// have not been resolved yet in this cache epoch.
    pub fn add_alias<I, S>(&self, key: &str, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(key, candidates);
    }

    /// Change how long a universe snapshot stays valid.
    pub fn set_cache_duration(&self, duration: Duration) {
        self.cache.set_duration(duration);
    }

    pub fn cache_duration(&self) -> Duration {
        self.cache.duration()
    }

    /// Copy of the current alias table.
    pub fn aliases(&self) -> AliasTable {
        self.aliases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn ensure_fresh(&self) -> Result<(), SymbolError> {
        if !self.cache.is_valid() {
            debug!("Symbol cache stale, refreshing from '{}'", self.source.id());
            self.refresh().await?;
        }
        Ok(())
    }
}
