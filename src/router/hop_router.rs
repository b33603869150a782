//! Asset-to-asset routing through the quote hub.

use core::fmt;

use tracing::debug;

use crate::domain::{Amount, AssetId, SwapQuote};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::QuoteSource;

/// One leg of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hop {
    /// Sell the base asset for quote.
    SellBase(AssetId),
    /// Sell quote for the base asset.
    SellQuote(AssetId),
}

impl Hop {
    /// The base asset this hop trades against the hub.
    pub const fn asset(&self) -> AssetId {
        match self {
            Self::SellBase(a) | Self::SellQuote(a) => *a,
        }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SellBase(a) => write!(f, "sell {}", a.short()),
            Self::SellQuote(a) => write!(f, "buy {}", a.short()),
        }
    }
}

/// Routes swaps between any two assets over a [`QuoteSource`].
///
/// Trades touching the quote asset are a single hop.  Anything else is
/// `sell_base(a)` followed by `sell_quote(b)` against the same source, so
/// each leg pays its own asset's fee and slippage.
///
/// # Example
///
/// ```rust
/// use oracle_amm::domain::{Amount, AssetId, FeeRate};
/// use oracle_amm::engine::QuoteEngine;
/// use oracle_amm::router::Router;
/// use oracle_amm::state::{MarketSnapshot, OracleSnapshot, OracleState, PoolAssetState, PoolSnapshot};
///
/// let usd = AssetId::from_bytes([0; 32]);
/// let eth = AssetId::from_bytes([1; 32]);
/// let btc = AssetId::from_bytes([2; 32]);
/// let asset = |n| PoolAssetState::register(Amount::from_whole(n), Amount::ZERO, FeeRate::ZERO, Amount::ONE)
///     .expect("valid");
/// let price = |p| OracleState::new(Amount::from_whole(p), Amount::ZERO, Amount::ZERO, true).expect("valid");
///
/// let pool = PoolSnapshot::new(usd, Amount::from_whole(1_000_000))
///     .with_asset(eth, asset(100)).expect("registered")
///     .with_asset(btc, asset(10)).expect("registered");
/// let oracle = OracleSnapshot::new().with(eth, price(2_000)).with(btc, price(40_000));
/// let market = MarketSnapshot::new(pool, oracle);
///
/// let router = Router::new(QuoteEngine::new(&market));
/// assert_eq!(router.swap(&eth, &btc, Amount::from_whole(20)).expect("routed"), Amount::ONE);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Router<Q> {
    source: Q,
}

impl<Q: QuoteSource> Router<Q> {
    /// Creates a router over `source`.
    pub const fn new(source: Q) -> Self {
        Self { source }
    }

    /// The underlying hop pricer.
    pub const fn source(&self) -> &Q {
        &self.source
    }

    /// Legs needed to trade `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `from == to`.
    pub fn route(&self, from: &AssetId, to: &AssetId) -> Result<Vec<Hop>> {
        if from == to {
            return Err(AmmError::InvalidToken("cannot swap an asset for itself"));
        }
        let hub = self.source.quote_asset();
        let hops = if *from == hub {
            vec![Hop::SellQuote(*to)]
        } else if *to == hub {
            vec![Hop::SellBase(*from)]
        } else {
            vec![Hop::SellBase(*from), Hop::SellQuote(*to)]
        };
        Ok(hops)
    }

    /// Output of swapping `amount` of `from` into `to`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidToken`] for identical assets, or any error from
    /// either hop.
    pub fn swap(&self, from: &AssetId, to: &AssetId, amount: Amount) -> Result<Amount> {
        Ok(self.quote(from, to, amount)?.amount_out())
    }

    /// Like [`swap`](Self::swap), with the total fee across legs.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap).
    pub fn quote(&self, from: &AssetId, to: &AssetId, amount: Amount) -> Result<SwapQuote> {
        let hops = self.route(from, to)?;
        let mut carried = amount;
        let mut fee = Amount::ZERO;
        for hop in &hops {
            let leg = match hop {
                Hop::SellBase(asset) => self.source.quote_sell_base(asset, carried)?,
                Hop::SellQuote(asset) => self.source.quote_sell_quote(asset, carried)?,
            };
            debug!(hop = %hop, amount_in = %carried, amount_out = %leg.amount_out(), "routed leg");
            fee = fee.safe_add(&leg.fee())?;
            carried = leg.amount_out();
        }
        Ok(SwapQuote::new(amount, carried, fee))
    }

    /// [`swap`](Self::swap) guarded by a caller slippage bound.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MinimumOutputNotMet`] if the output is below
    /// `min_out`, plus everything [`swap`](Self::swap) returns.
    pub fn swap_with_min_out(
        &self,
        from: &AssetId,
        to: &AssetId,
        amount: Amount,
        min_out: Amount,
    ) -> Result<Amount> {
        let out = self.swap(from, to, amount)?;
        if out < min_out {
            return Err(AmmError::MinimumOutputNotMet {
                actual: out.to_string(),
                minimum: min_out.to_string(),
            });
        }
        Ok(out)
    }
}
