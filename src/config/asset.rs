//! Configuration for one base asset.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::oracle::{default_true, OracleConfig};
use crate::domain::{Amount, AssetId, FeeRate};
use crate::error::AmmError;
use crate::state::{OracleState, PoolAssetState};

/// Declarative description of a registered base asset and its oracle.
///
/// # Derived Values
///
/// - `target = max(reserve, threshold)` unless `target` is given
///   explicitly, as it would be when restoring a ledger snapshot taken
///   after trading.
///
/// # Validation
///
/// - `id` is 32 bytes of hex, optionally `0x`-prefixed.
/// - `fee_rate ≤ 0.01`.
/// - `rebalance_factor ≤ 1`.
/// - The oracle reading is valid (see [`OracleConfig`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetConfig {
    /// Hex asset identifier.
    pub id: String,
    /// Tracked reserve.
    pub reserve: Decimal,
    /// Administrative threshold.
    #[serde(default)]
    pub threshold: Decimal,
    /// Explicit target snapshot, overriding `max(reserve, threshold)`.
    #[serde(default)]
    pub target: Option<Decimal>,
    /// Swap fee as a fraction.
    #[serde(default)]
    pub fee_rate: Decimal,
    /// Bonus damping factor `R`.
    #[serde(default = "default_rebalance_factor")]
    pub rebalance_factor: Decimal,
    /// Whether trading is enabled.
    #[serde(default = "default_true")]
    pub valid: bool,
    /// Oracle reading for this asset.
    pub oracle: OracleConfig,
}

const fn default_rebalance_factor() -> Decimal {
    Decimal::ONE
}

impl AssetConfig {
    /// Creates a config with no threshold, no fee and `R = 1`.
    #[must_use]
    pub fn new(id: impl Into<String>, reserve: Decimal, oracle: OracleConfig) -> Self {
        Self {
            id: id.into(),
            reserve,
            threshold: Decimal::ZERO,
            target: None,
            fee_rate: Decimal::ZERO,
            rebalance_factor: Decimal::ONE,
            valid: true,
            oracle,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] for a malformed id, an `R`
    ///   above 1 or an invalid oracle spread.
    /// - [`AmmError::InvalidFee`] if `fee_rate > 0.01`.
    /// - [`AmmError::InvalidQuantity`] for negative or over-precise values.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.to_states().map(|_| ())
    }

    /// Parses the asset id.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `id` is not 32 hex
    /// bytes.
    pub fn asset_id(&self) -> Result<AssetId, AmmError> {
        self.id.parse()
    }

    /// Converts to the engine's ledger and oracle state.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn to_states(&self) -> Result<(AssetId, PoolAssetState, OracleState), AmmError> {
        let id = self.asset_id()?;
        let reserve = Amount::from_decimal(self.reserve)?;
        let threshold = Amount::from_decimal(self.threshold)?;
        let fee_rate = FeeRate::new(Amount::from_decimal(self.fee_rate)?)?;
        let rebalance_factor = Amount::from_decimal(self.rebalance_factor)?;
        let state = match self.target {
            Some(target) => PoolAssetState::from_parts(
                reserve,
                threshold,
                Amount::from_decimal(target)?,
                fee_rate,
                rebalance_factor,
                self.valid,
            )?,
            None => PoolAssetState::register(reserve, threshold, fee_rate, rebalance_factor)?
                .with_valid(self.valid),
        };
        Ok((id, state, self.oracle.to_state()?))
    }
}
