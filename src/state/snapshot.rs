//! Immutable pool and market snapshots.
//!
//! A [`MarketSnapshot`] is the single argument every quote reads.  It is
//! never mutated by the engine; callers replace it wholesale (see
//! [`SharedMarket`](super::SharedMarket)).

use std::collections::BTreeMap;

use super::{OracleSnapshot, PoolAssetState};
use crate::domain::{Amount, AssetId};
use crate::error::{AmmError, Result};

/// Pool ledger view: the quote asset plus every registered base asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSnapshot {
    quote_asset: AssetId,
    quote: PoolAssetState,
    bases: BTreeMap<AssetId, PoolAssetState>,
}

impl PoolSnapshot {
    /// Creates a pool holding `quote_reserve` of `quote_asset` and no bases.
    pub fn new(quote_asset: AssetId, quote_reserve: Amount) -> Self {
        Self {
            quote_asset,
            quote: PoolAssetState::quote(quote_reserve),
            bases: BTreeMap::new(),
        }
    }

    /// Registers (or replaces) a base asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `asset` is the quote asset.
    pub fn register(&mut self, asset: AssetId, state: PoolAssetState) -> Result<()> {
        if asset == self.quote_asset {
            return Err(AmmError::InvalidToken(
                "quote asset cannot be registered as a base",
            ));
        }
        self.bases.insert(asset, state);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn with_asset(mut self, asset: AssetId, state: PoolAssetState) -> Result<Self> {
        self.register(asset, state)?;
        Ok(self)
    }

    /// Quote asset identifier.
    pub const fn quote_asset(&self) -> AssetId {
        self.quote_asset
    }

    /// Quote asset state.
    pub const fn quote(&self) -> &PoolAssetState {
        &self.quote
    }

    /// `true` if `asset` is the quote asset.
    #[must_use]
    pub fn is_quote(&self, asset: &AssetId) -> bool {
        *asset == self.quote_asset
    }

    /// State of a registered base asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AssetNotRegistered`] for unknown assets.
    pub fn asset(&self, asset: &AssetId) -> Result<&PoolAssetState> {
        self.bases
            .get(asset)
            .ok_or_else(|| AmmError::AssetNotRegistered(asset.to_string()))
    }

    /// Applies `f` to a registered base asset's state.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AssetNotRegistered`] for unknown assets, or
    /// whatever `f` returns.
    pub fn update_asset<F>(&mut self, asset: &AssetId, f: F) -> Result<()>
    where
        F: FnOnce(PoolAssetState) -> Result<PoolAssetState>,
    {
        let current = *self.asset(asset)?;
        let next = f(current)?;
        self.bases.insert(*asset, next);
        Ok(())
    }

    /// Replaces the quote reserve.
    pub fn set_quote_reserve(&mut self, reserve: Amount) {
        self.quote = self.quote.with_reserve(reserve);
    }

    /// Registered base assets in id order.
    pub fn base_assets(&self) -> impl Iterator<Item = &AssetId> {
        self.bases.keys()
    }
}

/// Pool and oracle state read together by every quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSnapshot {
    pool: PoolSnapshot,
    oracle: OracleSnapshot,
}

impl MarketSnapshot {
    /// Pairs a pool view with the oracle readings taken alongside it.
    pub const fn new(pool: PoolSnapshot, oracle: OracleSnapshot) -> Self {
        Self { pool, oracle }
    }

    /// Pool view.
    pub const fn pool(&self) -> &PoolSnapshot {
        &self.pool
    }

    /// Oracle readings.
    pub const fn oracle(&self) -> &OracleSnapshot {
        &self.oracle
    }

    /// Mutable pool view, for building the next snapshot.
    pub fn pool_mut(&mut self) -> &mut PoolSnapshot {
        &mut self.pool
    }

    /// Mutable oracle readings, for building the next snapshot.
    pub fn oracle_mut(&mut self) -> &mut OracleSnapshot {
        &mut self.oracle
    }
}
