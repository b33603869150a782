//! Top-level pool configuration and snapshot construction.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::AssetConfig;
use crate::domain::{Amount, AssetId};
use crate::error::AmmError;
use crate::state::{MarketSnapshot, OracleSnapshot, PoolSnapshot};
use crate::traits::FromConfig;

/// Declarative blueprint for a whole pool: the quote hub and every base
/// asset with its oracle reading.
///
/// # Example
///
/// ```rust
/// use oracle_amm::config::PoolConfig;
/// use oracle_amm::state::MarketSnapshot;
/// use oracle_amm::traits::FromConfig;
///
/// let json = r#"{
///     "quote_asset": "0x0000000000000000000000000000000000000000000000000000000000000000",
///     "quote_reserve": "1000000",
///     "assets": [{
///         "id": "0x0101010101010101010101010101010101010101010101010101010101010101",
///         "reserve": "100",
///         "fee_rate": "0.001",
///         "oracle": { "price": "2000", "spread": "0.0002", "coefficient": "0.000000001" }
///     }]
/// }"#;
///
/// let config = PoolConfig::from_json(json).expect("valid json");
/// let market = MarketSnapshot::from_config(&config).expect("valid config");
/// assert_eq!(market.oracle().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    /// Hex id of the quote asset.
    pub quote_asset: String,
    /// Quote reserve held by the pool.
    pub quote_reserve: Decimal,
    /// Registered base assets.
    #[serde(default)]
    pub assets: Vec<AssetConfig>,
}

impl PoolConfig {
    /// Creates a config with no base assets.
    #[must_use]
    pub fn new(quote_asset: impl Into<String>, quote_reserve: Decimal) -> Self {
        Self {
            quote_asset: quote_asset.into(),
            quote_reserve,
            assets: Vec::new(),
        }
    }

    /// Adds a base asset.
    #[must_use]
    pub fn with_asset(mut self, asset: AssetConfig) -> Self {
        self.assets.push(asset);
        self
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the document does not
    /// match the schema.  The parser's message is logged at `warn`.
    pub fn from_json(json: &str) -> Result<Self, AmmError> {
        serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "rejected pool configuration");
            AmmError::InvalidConfiguration("malformed pool configuration")
        })
    }

    /// Serialises to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, AmmError> {
        serde_json::to_string_pretty(self)
            .map_err(|_| AmmError::InvalidConfiguration("pool configuration not serialisable"))
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if a base asset repeats or equals the
    ///   quote asset.
    /// - Anything [`AssetConfig::validate`] returns.
    pub fn validate(&self) -> Result<(), AmmError> {
        let quote: AssetId = self.quote_asset.parse()?;
        Amount::from_decimal(self.quote_reserve).map(|_| ())?;
        let mut seen = BTreeSet::new();
        for asset in &self.assets {
            let id = asset.asset_id()?;
            if id == quote {
                return Err(AmmError::InvalidToken("base asset equals the quote asset"));
            }
            if !seen.insert(id) {
                return Err(AmmError::InvalidToken("base asset listed twice"));
            }
            asset.validate()?;
        }
        Ok(())
    }
}

impl FromConfig<PoolConfig> for MarketSnapshot {
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        let quote: AssetId = config.quote_asset.parse()?;
        let mut pool = PoolSnapshot::new(quote, Amount::from_decimal(config.quote_reserve)?);
        let mut oracle = OracleSnapshot::new();
        for asset in &config.assets {
            let (id, state, reading) = asset.to_states()?;
            debug!(asset = %id.short(), %state, "registered asset");
            pool.register(id, state)?;
            oracle.insert(id, reading);
        }
        Ok(Self::new(pool, oracle))
    }
}
