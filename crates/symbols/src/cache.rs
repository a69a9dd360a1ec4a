//! Time-bounded cache of the broker symbol universe.
//!
//! The snapshot, its capture time and the resolution memo form one
//! consistency group behind a single `RwLock`. Replacing or clearing the
//! snapshot clears the memo in the same write section.
//!
//! The lock is never held while the symbol source is being called: a refresh
//! fetches first, then takes the write lock only to swap the snapshot in.
//! Concurrent refreshes are not deduplicated; the last one to finish wins.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::DEFAULT_CACHE_DURATION;
use crate::errors::SymbolError;
use crate::models::UniverseSnapshot;
use crate::source::SymbolSource;

#[derive(Debug)]
struct CacheState {
    symbols: Vec<String>,
    captured_at: Option<Instant>,
    /// Bumped on every replacement or clear.
    epoch: u64,
    memo: HashMap<String, String>,
    duration: Duration,
}

impl CacheState {
    fn reset(&mut self) {
        self.symbols = Vec::new();
        self.captured_at = None;
        self.epoch += 1;
        self.memo.clear();
    }
}

/// Broker universe snapshot with expiry and a per-epoch resolution memo.
pub struct SymbolUniverseCache {
    state: RwLock<CacheState>,
}

impl SymbolUniverseCache {
    /// Empty cache with the default one-hour lifetime.
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_CACHE_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            state: RwLock::new(CacheState {
                symbols: Vec::new(),
                captured_at: None,
                epoch: 0,
                memo: HashMap::new(),
                duration,
            }),
        }
    }

    /// Poisoning only means another caller panicked mid-section; every
    /// write section leaves the state consistent, so keep going.
    fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(|poisoned| {
            warn!("Symbol cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(|poisoned| {
            warn!("Symbol cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Fetch the universe from `source` and swap it in.
    ///
    /// Returns the number of symbols in the new snapshot. On any failure,
    /// including an empty listing, the previous snapshot and memo are kept.
    pub async fn refresh(&self, source: &dyn SymbolSource) -> Result<usize, SymbolError> {
        let symbols = source
            .list_symbols()
            .await
            .inspect_err(|e| warn!("Symbol list from '{}' failed: {}", source.id(), e))?;

        if symbols.is_empty() {
            warn!("Symbol list from '{}' was empty", source.id());
            return Err(SymbolError::UniverseUnavailable(format!(
                "'{}' returned an empty symbol list",
                source.id()
            )));
        }

        let count = symbols.len();
        let mut state = self.write();
        state.symbols = symbols;
        state.captured_at = Some(Instant::now());
        state.epoch += 1;
        state.memo.clear();

        info!(
            "Symbol universe refreshed from '{}': {} symbols (epoch {})",
            source.id(),
            count,
            state.epoch
        );
        Ok(count)
    }

    /// True if a non-empty snapshot exists and is younger than the duration.
    pub fn is_valid(&self) -> bool {
        let state = self.read();
        match state.captured_at {
            Some(at) if !state.symbols.is_empty() => at.elapsed() < state.duration,
            _ => false,
        }
    }

    /// Copy of the current universe and its epoch.
    pub fn snapshot(&self) -> UniverseSnapshot {
        let state = self.read();
        UniverseSnapshot {
            symbols: state.symbols.clone(),
            epoch: state.epoch,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.read().epoch
    }

    pub fn duration(&self) -> Duration {
        self.read().duration
    }

    /// Change the expiry window. An already captured snapshot is kept and
    /// judged against the new window on the next validity check.
    pub fn set_duration(&self, duration: Duration) {
        self.write().duration = duration;
    }

    /// Drop snapshot, capture time and memo unconditionally.
    pub fn clear(&self) {
        let mut state = self.write();
        state.reset();
        debug!("Symbol cache cleared (epoch {})", state.epoch);
    }

    pub fn memo_get(&self, key: &str) -> Option<String> {
        self.read().memo.get(key).cloned()
    }

    /// Store a resolution computed against `epoch`.
    ///
    /// Returns false and stores nothing if the snapshot was replaced or
    /// cleared since, so the memo only ever points into the live snapshot.
    pub fn memoize(&self, key: &str, symbol: &str, epoch: u64) -> bool {
        let mut state = self.write();
        if state.epoch != epoch {
            debug!(
                "Skipping memo for '{}': epoch {} is stale (now {})",
                key, epoch, state.epoch
            );
            return false;
        }
        state.memo.insert(key.to_string(), symbol.to_string());
        true
    }

    pub fn memo_len(&self) -> usize {
        self.read().memo.len()
    }
}

impl Default for SymbolUniverseCache {
    fn default() -> Self {
        Self::new()
    }
}
