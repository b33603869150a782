//! Declarative pool configuration.
//!
//! [`PoolConfig`] is the top-level blueprint: a quote asset, its reserve,
//! and a list of [`AssetConfig`]s each carrying an [`OracleConfig`].
//! Values are human decimals (`rust_decimal`) and are converted to WAD
//! amounts exactly; anything finer than 18 fractional digits is rejected.
//!
//! A validated config becomes a
//! [`MarketSnapshot`](crate::state::MarketSnapshot) through
//! [`FromConfig`](crate::traits::FromConfig).

mod asset;
mod oracle;
mod pool;

pub use asset::AssetConfig;
pub use oracle::OracleConfig;
pub use pool::PoolConfig;
