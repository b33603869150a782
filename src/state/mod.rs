//! Read-only state the engine prices against.
//!
//! | Type | Owner | Contents |
//! |------|-------|----------|
//! | [`OracleState`] | price publisher | price, spread, coefficient, feasibility |
//! | [`PoolAssetState`] | pool ledger | reserve, threshold, target, fee, `R`, validity |
//! | [`MarketSnapshot`] | caller | both of the above for every asset |
//! | [`SharedMarket`] | caller | a versioned, lock-protected `MarketSnapshot` |

mod oracle;
mod pool_asset;
mod shared;
mod snapshot;

pub use oracle::{OracleSnapshot, OracleState};
pub use pool_asset::{Imbalance, PoolAssetState};
pub use shared::SharedMarket;
pub use snapshot::{MarketSnapshot, PoolSnapshot};
