//! Oracle reading as it appears in configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Amount;
use crate::error::AmmError;
use crate::state::OracleState;

/// Human-decimal oracle reading for one base asset.
///
/// # Validation
///
/// - `price`, `spread` and `coefficient` must be non-negative with at most
///   18 fractional digits.
/// - `spread` must be below 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OracleConfig {
    /// Quote units per one base unit.
    pub price: Decimal,
    /// Full bid/ask spread as a fraction.
    #[serde(default)]
    pub spread: Decimal,
    /// Slippage coefficient `k`.
    #[serde(default)]
    pub coefficient: Decimal,
    /// Whether the reading is usable.
    #[serde(default = "default_true")]
    pub feasible: bool,
}

pub(crate) const fn default_true() -> bool {
    true
}

impl OracleConfig {
    /// Creates a feasible reading with no spread and no slippage.
    #[must_use]
    pub const fn at_price(price: Decimal) -> Self {
        Self {
            price,
            spread: Decimal::ZERO,
            coefficient: Decimal::ZERO,
            feasible: true,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] for negative or over-precise values.
    /// - [`AmmError::InvalidConfiguration`] if `spread ≥ 1`.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.to_state().map(|_| ())
    }

    /// Converts to the engine's WAD representation.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn to_state(&self) -> Result<OracleState, AmmError> {
        OracleState::new(
            Amount::from_decimal(self.price)?,
            Amount::from_decimal(self.spread)?,
            Amount::from_decimal(self.coefficient)?,
            self.feasible,
        )
    }
}
