//! Two-hop routing through the quote asset.
//!
//! The [`Router`] turns an asset-to-asset request into one or two
//! [`Hop`]s and prices them in order over a
//! [`QuoteSource`](crate::traits::QuoteSource):
//!
//! ```text
//! A → quote    : [SellBase(A)]
//! quote → B    : [SellQuote(B)]
//! A → B        : [SellBase(A), SellQuote(B)]
//! ```
//!
//! The two-hop result is exactly `sell_quote(B, sell_base(A, amount))`;
//! there is no combined discount.

mod hop_router;

pub use hop_router::{Hop, Router};
