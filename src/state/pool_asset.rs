//! Per-asset pool ledger state read by the engine.

use core::fmt;

use crate::domain::{Amount, FeeRate};
use crate::error::{AmmError, Result};

/// Where an asset's reserve sits relative to its target.
///
/// Exactly one side is non-zero; a reserve exactly at target is
/// `Surplus(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Imbalance {
    /// `reserve < target`: the pool wants to buy this much back.
    Deficit(Amount),
    /// `reserve ≥ target`: the pool holds this much extra.
    Surplus(Amount),
}

impl Imbalance {
    /// The deficit, or zero when in surplus.
    pub const fn deficit(&self) -> Amount {
        match self {
            Self::Deficit(a) => *a,
            Self::Surplus(_) => Amount::ZERO,
        }
    }

    /// The surplus, or zero when in deficit.
    pub const fn surplus(&self) -> Amount {
        match self {
            Self::Deficit(_) => Amount::ZERO,
            Self::Surplus(a) => *a,
        }
    }
}

/// Ledger snapshot for one registered asset.
///
/// `target` is the larger of reserve and threshold as of the last
/// registration or [`tune`](Self::tune); reserve updates after trades do
/// not move it.
///
/// # Invariants
///
/// - `fee_rate ≤ 0.01 · WAD` (enforced by [`FeeRate`]).
/// - `rebalance_factor ≤ WAD`.
///
/// # Examples
///
/// ```
/// use oracle_amm::domain::{Amount, FeeRate};
/// use oracle_amm::state::PoolAssetState;
///
/// let state = PoolAssetState::register(
///     Amount::from_whole(80),
///     Amount::from_whole(100),
///     FeeRate::ZERO,
///     Amount::ONE,
/// ).expect("valid");
/// assert_eq!(state.target(), Amount::from_whole(100));
/// assert_eq!(state.imbalance().deficit(), Amount::from_whole(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolAssetState {
    reserve: Amount,
    threshold: Amount,
    target: Amount,
    fee_rate: FeeRate,
    rebalance_factor: Amount,
    valid: bool,
}

impl PoolAssetState {
    /// Registers a new asset; the target snapshot is `max(reserve, threshold)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if
    /// `rebalance_factor > WAD`.
    pub fn register(
        reserve: Amount,
        threshold: Amount,
        fee_rate: FeeRate,
        rebalance_factor: Amount,
    ) -> Result<Self> {
        Self::from_parts(
            reserve,
            threshold,
            reserve.max(threshold),
            fee_rate,
            rebalance_factor,
            true,
        )
    }

    /// Rebuilds a state exactly as read from a ledger, target included.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if
    /// `rebalance_factor > WAD`.
    pub fn from_parts(
        reserve: Amount,
        threshold: Amount,
        target: Amount,
        fee_rate: FeeRate,
        rebalance_factor: Amount,
        valid: bool,
    ) -> Result<Self> {
        if rebalance_factor > Amount::ONE {
            return Err(AmmError::InvalidConfiguration(
                "rebalance factor must not exceed 1",
            ));
        }
        Ok(Self {
            reserve,
            threshold,
            target,
            fee_rate,
            rebalance_factor,
            valid,
        })
    }

    /// State for the quote asset: no fee, no threshold, zero target.
    pub const fn quote(reserve: Amount) -> Self {
        Self {
            reserve,
            threshold: Amount::ZERO,
            target: Amount::ZERO,
            fee_rate: FeeRate::ZERO,
            rebalance_factor: Amount::ONE,
            valid: true,
        }
    }

    /// Tracked reserve.
    pub const fn reserve(&self) -> Amount {
        self.reserve
    }

    /// Administrative threshold.
    pub const fn threshold(&self) -> Amount {
        self.threshold
    }

    /// Target level snapshot.
    pub const fn target(&self) -> Amount {
        self.target
    }

    /// Swap fee rate.
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Rebalance factor `R` applied to the bonus curve.
    pub const fn rebalance_factor(&self) -> Amount {
        self.rebalance_factor
    }

    /// Whether trading the asset is currently allowed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Deficit or surplus relative to target.
    pub fn imbalance(&self) -> Imbalance {
        match self.reserve.checked_sub(&self.target) {
            Some(surplus) => Imbalance::Surplus(surplus),
            None => Imbalance::Deficit(self.target.saturating_sub(&self.reserve)),
        }
    }

    /// Re-tunes the threshold and takes a fresh target snapshot.
    pub fn tune(mut self, threshold: Amount) -> Self {
        self.threshold = threshold;
        self.target = self.reserve.max(threshold);
        self
    }

    /// Replaces the tracked reserve, leaving the target untouched.
    pub fn with_reserve(mut self, reserve: Amount) -> Self {
        self.reserve = reserve;
        self
    }

    /// Replaces the fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `rate > 0.01 · WAD`.
    pub fn with_fee_rate(mut self, rate: Amount) -> Result<Self> {
        self.fee_rate = FeeRate::new(rate)?;
        Ok(self)
    }

    /// Replaces the rebalance factor.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `factor > WAD`.
    pub fn with_rebalance_factor(mut self, factor: Amount) -> Result<Self> {
        if factor > Amount::ONE {
            return Err(AmmError::InvalidConfiguration(
                "rebalance factor must not exceed 1",
            ));
        }
        self.rebalance_factor = factor;
        Ok(self)
    }

    /// Enables or disables trading.
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }
}

impl fmt::Display for PoolAssetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reserve={} target={} fee={} R={}{}",
            self.reserve.to_decimal_string(),
            self.target.to_decimal_string(),
            self.fee_rate,
            self.rebalance_factor.to_decimal_string(),
            if self.valid { "" } else { " (invalid)" }
        )
    }
}
