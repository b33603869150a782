//! Shared, versioned market state for concurrent quoting.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::MarketSnapshot;
use crate::error::Result;

struct Versioned {
    version: u64,
    snapshot: Arc<MarketSnapshot>,
}

/// A [`MarketSnapshot`] shared between quoting threads and a writer.
///
/// Readers take an `Arc` under a short read lock and quote against it
/// without holding the lock.  Writers clone the current snapshot, mutate
/// the clone and swap it in, so a reader never sees a half-applied update.
///
/// # Examples
///
/// ```
/// use oracle_amm::domain::{Amount, AssetId};
/// use oracle_amm::state::{MarketSnapshot, OracleSnapshot, PoolSnapshot, SharedMarket};
///
/// let quote = AssetId::from_bytes([0; 32]);
/// let market = SharedMarket::new(MarketSnapshot::new(
///     PoolSnapshot::new(quote, Amount::ZERO),
///     OracleSnapshot::new(),
/// ));
///
/// let before = market.load();
/// market
///     .update(|m| {
///         m.pool_mut().set_quote_reserve(Amount::from_whole(10));
///         Ok(())
///     })
///     .expect("update applies");
///
/// assert_eq!(before.pool().quote().reserve(), Amount::ZERO);
/// assert_eq!(market.load().pool().quote().reserve(), Amount::from_whole(10));
/// assert_eq!(market.version(), 1);
/// ```
pub struct SharedMarket {
    inner: RwLock<Versioned>,
}

impl SharedMarket {
    /// Wraps an initial snapshot at version 0.
    pub fn new(snapshot: MarketSnapshot) -> Self {
        Self {
            inner: RwLock::new(Versioned {
                version: 0,
                snapshot: Arc::new(snapshot),
            }),
        }
    }

    /// Current snapshot.
    pub fn load(&self) -> Arc<MarketSnapshot> {
        Arc::clone(&self.inner.read().snapshot)
    }

    /// Current snapshot together with its version.
    pub fn load_versioned(&self) -> (u64, Arc<MarketSnapshot>) {
        let guard = self.inner.read();
        (guard.version, Arc::clone(&guard.snapshot))
    }

    /// Number of updates applied so far.
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Applies `f` to a copy of the current snapshot and publishes it.
    ///
    /// If `f` fails, the published snapshot and version are unchanged.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns.
    pub fn update<F>(&self, f: F) -> Result<u64>
    where
        F: FnOnce(&mut MarketSnapshot) -> Result<()>,
    {
        let mut guard = self.inner.write();
        let mut next = MarketSnapshot::clone(&guard.snapshot);
        f(&mut next)?;
        guard.snapshot = Arc::new(next);
        guard.version += 1;
        debug!(version = guard.version, "published market snapshot");
        Ok(guard.version)
    }

    /// Replaces the snapshot outright.
    pub fn replace(&self, snapshot: MarketSnapshot) -> u64 {
        let mut guard = self.inner.write();
        guard.snapshot = Arc::new(snapshot);
        guard.version += 1;
        guard.version
    }
}

impl std::fmt::Debug for SharedMarket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedMarket")
            .field("version", &self.version())
            .finish_non_exhaustive()
    }
}
