//! Oracle price snapshot consumed by the engine.

use std::collections::BTreeMap;

use crate::domain::{Amount, AssetId, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{wad, CheckedArithmetic};

/// Price data for one base asset as published by the oracle.
///
/// - `price` — quote units per one base unit.
/// - `spread` — fraction in `[0, WAD)`; half of it is charged on each side.
/// - `coefficient` — per-unit slippage sensitivity `k`.
/// - `feasible` — whether the publisher considers the price usable now.
///
/// The engine only reads this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OracleState {
    price: Amount,
    spread: Amount,
    coefficient: Amount,
    feasible: bool,
}

impl OracleState {
    /// Creates a validated oracle reading.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `spread ≥ WAD`.
    pub fn new(price: Amount, spread: Amount, coefficient: Amount, feasible: bool) -> Result<Self> {
        if spread >= Amount::ONE {
            return Err(AmmError::InvalidConfiguration("oracle spread must be below 100%"));
        }
        Ok(Self {
            price,
            spread,
            coefficient,
            feasible,
        })
    }

    /// Mid price.
    pub const fn price(&self) -> Amount {
        self.price
    }

    /// Full bid/ask spread as a fraction.
    pub const fn spread(&self) -> Amount {
        self.spread
    }

    /// Slippage coefficient `k`.
    pub const fn coefficient(&self) -> Amount {
        self.coefficient
    }

    /// Publisher's feasibility flag.
    #[must_use]
    pub const fn feasible(&self) -> bool {
        self.feasible
    }

    /// `true` when the asset can be priced: feasible and a non-zero price.
    #[must_use]
    pub fn is_priceable(&self) -> bool {
        self.feasible && !self.price.is_zero()
    }

    /// Half the spread, rounded up so each side is charged at least half.
    fn half_spread(&self) -> Amount {
        // spread < WAD, so ⌈spread / 2⌉ ≤ spread and never overflows.
        self.spread
            .checked_div(&Amount::new(2), Rounding::Ceil)
            .unwrap_or(self.spread)
    }

    /// Price paid to a taker selling base: `price · (1 − spread/2)`, floored.
    ///
    /// # Errors
    ///
    /// Propagates [`AmmError::Overflow`] from the scaled multiply.
    pub fn sell_base_price(&self) -> Result<Amount> {
        let factor = Amount::ONE.safe_sub(&self.half_spread())?;
        wad::mul(self.price, factor, Rounding::Floor)
    }

    /// Price charged to a taker buying base: `price · (1 + spread/2)`, ceiled.
    ///
    /// # Errors
    ///
    /// Propagates [`AmmError::Overflow`] from the scaled multiply.
    pub fn sell_quote_price(&self) -> Result<Amount> {
        let factor = Amount::ONE.safe_add(&self.half_spread())?;
        wad::mul(self.price, factor, Rounding::Ceil)
    }
}

/// Oracle readings for every base asset, keyed by [`AssetId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleSnapshot {
    states: BTreeMap<AssetId, OracleState>,
}

impl OracleSnapshot {
    /// Empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the reading for `asset`.
    pub fn insert(&mut self, asset: AssetId, state: OracleState) {
        self.states.insert(asset, state);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, asset: AssetId, state: OracleState) -> Self {
        self.insert(asset, state);
        self
    }

    /// Reading for `asset`, if published.
    #[must_use]
    pub fn get(&self, asset: &AssetId) -> Option<&OracleState> {
        self.states.get(asset)
    }

    /// The reading for `asset`, only if it can be priced.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::OracleInfeasible`] if no reading exists, the
    /// feasibility flag is off, or the price is zero.
    pub fn priceable(&self, asset: &AssetId) -> Result<&OracleState> {
        match self.states.get(asset) {
            Some(state) if state.is_priceable() => Ok(state),
            _ => Err(AmmError::OracleInfeasible(asset.to_string())),
        }
    }

    /// Number of assets with a reading.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` when no reading is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
