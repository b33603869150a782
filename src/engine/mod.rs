//! Single-hop quote engine.
//!
//! # Pricing pipeline
//!
//! ```text
//! OracleState ──► effective price (± spread/2)
//!                        │
//! PoolAssetState ──► compute_bought_amounts ──► deficit windows
//!                        │
//!                        ▼
//!              bonus window / penalty curve ──► fee ──► balance check
//! ```
//!
//! | Call | Effective price | Fee charged on | Bonus window |
//! |------|-----------------|----------------|--------------|
//! | [`QuoteEngine::sell_base`]  | `price · (1 − spread/2)`, floor | quote output | base deficit |
//! | [`QuoteEngine::sell_quote`] | `price · (1 + spread/2)`, ceil  | quote input  | quote deficit |
//!
//! Outside its window a trade continues the penalty curve from the point
//! the opposite deficit implies, and pays only the marginal amount beyond
//! it.

mod quote_engine;

pub use quote_engine::QuoteEngine;
