//! # Oracle AMM
//!
//! Oracle-priced curve engine for a single-hub liquidity pool.
//!
//! Swaps between one quote asset and any number of base assets are priced
//! from an external oracle price rather than a reserve ratio.  Around that
//! price, each asset's reserve imbalance opens a *bonus window* that
//! rewards trades moving the pool back toward target, while everything
//! else pays ordinary slippage on a *penalty curve*.  All arithmetic is
//! deterministic WAD (`10^18`) fixed point with explicit rounding.
//!
//! # Quick Start
//!
//! ```rust
//! use oracle_amm::config::{AssetConfig, OracleConfig, PoolConfig};
//! use oracle_amm::domain::Amount;
//! use oracle_amm::engine::QuoteEngine;
//! use oracle_amm::router::Router;
//! use oracle_amm::state::MarketSnapshot;
//! use oracle_amm::traits::FromConfig;
//! use rust_decimal::Decimal;
//!
//! let usd = "00".repeat(32);
//! let eth = "01".repeat(32);
//! let btc = "02".repeat(32);
//!
//! // 1. Describe the pool
//! let config = PoolConfig::new(usd.clone(), Decimal::from(10_000_000))
//!     .with_asset(AssetConfig::new(eth.clone(), Decimal::from(1_000), OracleConfig::at_price(Decimal::from(2_000))))
//!     .with_asset(AssetConfig::new(btc.clone(), Decimal::from(100), OracleConfig::at_price(Decimal::from(40_000))));
//!
//! // 2. Build an immutable snapshot
//! let market = MarketSnapshot::from_config(&config).expect("valid config");
//!
//! // 3. Quote single hops
//! let engine = QuoteEngine::new(&market);
//! let eth_id = eth.parse().expect("hex id");
//! assert_eq!(engine.sell_base(&eth_id, Amount::ONE).expect("priced"), Amount::from_whole(2_000));
//!
//! // 4. Route base to base through the hub
//! let btc_id = btc.parse().expect("hex id");
//! let out = Router::new(engine).swap(&eth_id, &btc_id, Amount::from_whole(20)).expect("routed");
//! assert_eq!(out, Amount::ONE);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Router     │  A → quote → B, one QuoteSource call per hop
//! └──────┬──────┘
//!        │ QuoteSource
//!        ▼
//! ┌─────────────┐
//! │ QuoteEngine  │  spread, windows, fee, balance check
//! └──────┬──────┘
//!        │ compute_bought_amounts
//!        ▼
//! ┌─────────────┐
//! │   Curve      │  netting + four bonus/penalty primitives
//! └──────┬──────┘
//!        │ mul / div / reciprocal
//!        ▼
//! ┌─────────────┐
//! │  WAD math    │  U256-backed floor/ceil fixed point
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`AssetId`](domain::AssetId), [`FeeRate`](domain::FeeRate), [`SwapQuote`](domain::SwapQuote) |
//! | [`math`]   | WAD multiply/divide/reciprocal and checked arithmetic |
//! | [`state`]  | Oracle and pool ledger snapshots, [`SharedMarket`](state::SharedMarket) |
//! | [`curve`]  | Curve primitives and imbalance netting |
//! | [`engine`] | [`QuoteEngine`](engine::QuoteEngine): `sell_base` / `sell_quote` |
//! | [`router`] | [`Router`](router::Router) for asset-to-asset swaps |
//! | [`traits`] | [`QuoteSource`](traits::QuoteSource), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Serde pool configuration |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod curve;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod router;
pub mod state;
pub mod traits;
