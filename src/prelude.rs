//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use oracle_amm::prelude::*;
//! ```
//!
//! This re-exports the domain value types, the engine and router, the
//! snapshot types, configuration and errors so that consumers don't need
//! to import from individual submodules.

// Re-export domain types
pub use crate::domain::{Amount, AssetId, FeeRate, Rounding, SignedAmount, SwapQuote, WAD};

// Re-export core traits
pub use crate::traits::{FromConfig, QuoteSource};

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export state
pub use crate::state::{MarketSnapshot, OracleSnapshot, OracleState, PoolAssetState, PoolSnapshot, SharedMarket};

// Re-export configuration
pub use crate::config::{AssetConfig, OracleConfig, PoolConfig};

// Re-export error types
pub use crate::error::{AmmError, Result};

// Re-export pricing
pub use crate::engine::QuoteEngine;
pub use crate::router::{Hop, Router};
