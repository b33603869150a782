//! Single-hop pricing abstraction consumed by the router.
//!
//! [`QuoteSource`] is the seam between the [`Router`](crate::router::Router)
//! and whatever prices individual hops.  The crate's own implementor is
//! [`QuoteEngine`](crate::engine::QuoteEngine); tests and off-chain
//! clients may substitute their own.
//!
//! # Fee Placement
//!
//! Implementations charge fees where the hop defines them:
//!
//! ```text
//! sell base : fee = ⌈gross_quote_out × rate⌉, amount_out = gross − fee
//! sell quote: fee = ⌈quote_in × rate⌉,       amount_out = curve(quote_in − fee)
//! ```
//!
//! In both cases [`SwapQuote::fee`] is denominated in the quote asset.

use crate::domain::{Amount, AssetId, SwapQuote};
use crate::error::AmmError;

/// Prices single hops between the quote asset and a base asset.
///
/// Implementations must be pure with respect to their inputs: two calls
/// with the same arguments against the same source return the same
/// result.  The router's composition law depends on it.
///
/// # Errors
///
/// Methods return [`AmmError`] variants such as
/// [`AmmError::AssetNotRegistered`], [`AmmError::OracleInfeasible`] and
/// [`AmmError::InsufficientPoolBalance`].
pub trait QuoteSource {
    /// The hub asset every base asset is priced against.
    #[must_use]
    fn quote_asset(&self) -> AssetId;

    /// Prices selling `base_amount` of `asset` for quote.
    ///
    /// # Errors
    ///
    /// Any [`AmmError`] raised while validating or pricing the hop.
    fn quote_sell_base(&self, asset: &AssetId, base_amount: Amount) -> Result<SwapQuote, AmmError>;

    /// Prices selling `quote_amount` of quote for `asset`.
    ///
    /// # Errors
    ///
    /// Any [`AmmError`] raised while validating or pricing the hop.
    fn quote_sell_quote(&self, asset: &AssetId, quote_amount: Amount)
        -> Result<SwapQuote, AmmError>;
}
