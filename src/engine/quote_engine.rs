//! Single-hop pricing against one market snapshot.

use tracing::{debug, warn};

use crate::curve::{
    base_from_quote_bonus, base_from_quote_penalty, compute_bought_amounts, quote_from_base_bonus,
    quote_from_base_penalty,
};
use crate::domain::{Amount, AssetId, SwapQuote};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::state::{MarketSnapshot, OracleState, PoolAssetState};
use crate::traits::QuoteSource;

/// Prices single-hop swaps between the quote asset and one base asset.
///
/// The engine borrows a [`MarketSnapshot`] and never mutates it, so every
/// call made through one engine sees the same pool and oracle state.
///
/// # Examples
///
/// ```
/// use oracle_amm::domain::{Amount, AssetId, FeeRate};
/// use oracle_amm::engine::QuoteEngine;
/// use oracle_amm::state::{MarketSnapshot, OracleSnapshot, OracleState, PoolAssetState, PoolSnapshot};
///
/// let usd = AssetId::from_bytes([0; 32]);
/// let eth = AssetId::from_bytes([1; 32]);
///
/// let pool = PoolSnapshot::new(usd, Amount::from_whole(1_000_000))
///     .with_asset(
///         eth,
///         PoolAssetState::register(Amount::from_whole(100), Amount::ZERO, FeeRate::ZERO, Amount::ONE)
///             .expect("valid"),
///     )
///     .expect("registered");
/// let oracle = OracleSnapshot::new().with(
///     eth,
///     OracleState::new(Amount::from_whole(2_000), Amount::ZERO, Amount::ZERO, true).expect("valid"),
/// );
/// let market = MarketSnapshot::new(pool, oracle);
///
/// let engine = QuoteEngine::new(&market);
/// assert_eq!(engine.sell_base(&eth, Amount::ONE).expect("priced"), Amount::from_whole(2_000));
/// assert_eq!(engine.sell_quote(&eth, Amount::from_whole(2_000)).expect("priced"), Amount::ONE);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuoteEngine<'a> {
    market: &'a MarketSnapshot,
}

impl<'a> QuoteEngine<'a> {
    /// Creates an engine reading `market`.
    pub const fn new(market: &'a MarketSnapshot) -> Self {
        Self { market }
    }

    /// The snapshot this engine prices against.
    pub const fn market(&self) -> &'a MarketSnapshot {
        self.market
    }

    /// Quote received for selling `base_amount` of `asset`, after fees.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `asset` is the quote asset.
    /// - [`AmmError::AssetNotRegistered`] / [`AmmError::AssetInvalid`].
    /// - [`AmmError::OracleInfeasible`] if the asset cannot be priced.
    /// - [`AmmError::InsufficientPoolBalance`] if the output exceeds the
    ///   quote reserve.
    /// - Arithmetic errors from the curve.
    pub fn sell_base(&self, asset: &AssetId, base_amount: Amount) -> Result<Amount> {
        Ok(self.quote_sell_base(asset, base_amount)?.amount_out())
    }

    /// Base received for selling `quote_amount` into `asset`, after fees.
    ///
    /// # Errors
    ///
    /// As [`sell_base`](Self::sell_base), with the balance check against
    /// the base reserve.
    pub fn sell_quote(&self, asset: &AssetId, quote_amount: Amount) -> Result<Amount> {
        Ok(self.quote_sell_quote(asset, quote_amount)?.amount_out())
    }

    /// [`sell_base`](Self::sell_base) with the fee broken out.
    ///
    /// The fee is charged on the quote output.
    ///
    /// # Errors
    ///
    /// Same as [`sell_base`](Self::sell_base).
    pub fn quote_sell_base(&self, asset: &AssetId, base_amount: Amount) -> Result<SwapQuote> {
        self.price_sell_base(asset, base_amount).map_err(|e| {
            warn!(asset = %asset, amount = %base_amount, error = %e, "sell_base rejected");
            e
        })
    }

    /// [`sell_quote`](Self::sell_quote) with the fee broken out.
    ///
    /// The fee is charged on the quote input before conversion.
    ///
    /// # Errors
    ///
    /// Same as [`sell_quote`](Self::sell_quote).
    pub fn quote_sell_quote(&self, asset: &AssetId, quote_amount: Amount) -> Result<SwapQuote> {
        self.price_sell_quote(asset, quote_amount).map_err(|e| {
            warn!(asset = %asset, amount = %quote_amount, error = %e, "sell_quote rejected");
            e
        })
    }

    /// Preview of [`sell_base`](Self::sell_base); `None` when the swap
    /// would fail.
    #[must_use]
    pub fn try_sell_base(&self, asset: &AssetId, base_amount: Amount) -> Option<Amount> {
        self.price_sell_base(asset, base_amount)
            .ok()
            .map(|q| q.amount_out())
    }

    /// Preview of [`sell_quote`](Self::sell_quote); `None` when the swap
    /// would fail.
    #[must_use]
    pub fn try_sell_quote(&self, asset: &AssetId, quote_amount: Amount) -> Option<Amount> {
        self.price_sell_quote(asset, quote_amount)
            .ok()
            .map(|q| q.amount_out())
    }

    // -- validation ----------------------------------------------------------

    fn tradable(&self, asset: &AssetId) -> Result<(&'a PoolAssetState, &'a OracleState)> {
        let pool = self.market.pool();
        if pool.is_quote(asset) {
            return Err(AmmError::InvalidToken("quote asset is not priced against itself"));
        }
        let state = pool.asset(asset)?;
        if !state.is_valid() {
            return Err(AmmError::AssetInvalid(asset.to_string()));
        }
        let oracle = self.market.oracle().priceable(asset)?;
        Ok((state, oracle))
    }

    // -- pricing -------------------------------------------------------------

    fn price_sell_base(&self, asset: &AssetId, base_amount: Amount) -> Result<SwapQuote> {
        let (state, oracle) = self.tradable(asset)?;
        let quote_state = self.market.pool().quote();
        let price = oracle.sell_base_price()?;
        let k = oracle.coefficient();
        let bought = compute_bought_amounts(state, quote_state, price, k, true)?;

        let gross = if bought.bought_base.is_zero() {
            // Base already in surplus: continue the penalty curve from the
            // base the quote deficit implies was sold before.
            let already_sold = base_from_quote_bonus(price, k, Amount::ONE, bought.bought_quote)?;
            let total =
                quote_from_base_penalty(price, k, Amount::ONE, already_sold.safe_add(&base_amount)?)?;
            total.saturating_sub(&bought.bought_quote)
        } else {
            let window = bought.bought_base;
            let r = state.rebalance_factor();
            let full = quote_from_base_bonus(price, k, r, window)?;
            match base_amount.checked_sub(&window) {
                Some(beyond) => {
                    full.safe_add(&quote_from_base_penalty(price, k, Amount::ONE, beyond)?)?
                }
                None => {
                    let unused = window.saturating_sub(&base_amount);
                    full.safe_sub(&quote_from_base_bonus(price, k, r, unused)?)?
                }
            }
        };

        let fee = state.fee_rate().apply(gross)?;
        let amount_out = gross.safe_sub(&fee)?;
        let available = quote_state.reserve();
        if amount_out > available {
            return Err(AmmError::InsufficientPoolBalance {
                required: amount_out.to_string(),
                available: available.to_string(),
            });
        }

        debug!(
            asset = %asset,
            amount_in = %base_amount,
            amount_out = %amount_out,
            fee = %fee,
            price = %price,
            bought_base = %bought.bought_base,
            bought_quote = %bought.bought_quote,
            "priced sell_base"
        );
        Ok(SwapQuote::new(base_amount, amount_out, fee))
    }

    fn price_sell_quote(&self, asset: &AssetId, quote_amount: Amount) -> Result<SwapQuote> {
        let (state, oracle) = self.tradable(asset)?;
        let quote_state = self.market.pool().quote();
        let price = oracle.sell_quote_price()?;
        let k = oracle.coefficient();

        let fee = state.fee_rate().apply(quote_amount)?;
        let net_in = quote_amount.safe_sub(&fee)?;
        let bought = compute_bought_amounts(state, quote_state, price, k, false)?;

        let amount_out = if bought.bought_quote.is_zero() {
            // Quote already in surplus: continue the penalty curve from the
            // quote the base deficit implies was sold before.
            let already_sold = quote_from_base_bonus(price, k, Amount::ONE, bought.bought_base)?;
            let total =
                base_from_quote_penalty(price, k, Amount::ONE, already_sold.safe_add(&net_in)?)?;
            total.saturating_sub(&bought.bought_base)
        } else {
            let window = bought.bought_quote;
            let r = state.rebalance_factor();
            let full = base_from_quote_bonus(price, k, r, window)?;
            match net_in.checked_sub(&window) {
                Some(beyond) => {
                    full.safe_add(&base_from_quote_penalty(price, k, Amount::ONE, beyond)?)?
                }
                None => {
                    let unused = window.saturating_sub(&net_in);
                    full.safe_sub(&base_from_quote_bonus(price, k, r, unused)?)?
                }
            }
        };

        let available = state.reserve();
        if amount_out > available {
            return Err(AmmError::InsufficientPoolBalance {
                required: amount_out.to_string(),
                available: available.to_string(),
            });
        }

        debug!(
            asset = %asset,
            amount_in = %quote_amount,
            amount_out = %amount_out,
            fee = %fee,
            price = %price,
            bought_base = %bought.bought_base,
            bought_quote = %bought.bought_quote,
            "priced sell_quote"
        );
        Ok(SwapQuote::new(quote_amount, amount_out, fee))
    }
}

impl QuoteSource for QuoteEngine<'_> {
    fn quote_asset(&self) -> AssetId {
        self.market.pool().quote_asset()
    }

    fn quote_sell_base(&self, asset: &AssetId, base_amount: Amount) -> Result<SwapQuote> {
        QuoteEngine::quote_sell_base(self, asset, base_amount)
    }

    fn quote_sell_quote(&self, asset: &AssetId, quote_amount: Amount) -> Result<SwapQuote> {
        QuoteEngine::quote_sell_quote(self, asset, quote_amount)
    }
}
