//! Generic construction trait for building engine state from configuration.
//!
//! [`FromConfig`] provides a uniform interface for turning a declarative,
//! deserialised configuration into validated runtime state.  The crate
//! implements it for [`MarketSnapshot`](crate::state::MarketSnapshot) from
//! [`PoolConfig`](crate::config::PoolConfig):
//!
//! ```text
//! PoolConfig ──validate()──► MarketSnapshot::from_config(&cfg)
//! ```
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed value is in a valid state:
//!
//! - every asset id is distinct from the quote asset and from each other
//! - every fee rate is within 1%
//! - every rebalance factor is within `[0, 1]`
//! - every oracle spread is below 100%

use crate::error::AmmError;

/// Builds `Self` from a configuration of type `C`.
///
/// There is no blanket implementation; each pairing is written out so
/// that its validation is explicit.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] (or a more specific
/// variant such as [`AmmError::InvalidFee`]) if the configuration is
/// invalid.
pub trait FromConfig<C> {
    /// Creates a validated instance from `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if any parameter is out of
    ///   range or inconsistent.
    /// - [`AmmError::InvalidToken`] if asset ids collide.
    /// - [`AmmError::InvalidFee`] if a fee rate exceeds the bound.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
