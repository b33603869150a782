//! Netting of base and quote imbalance into one curve coordinate.
//!
//! The pool can be off-target on both sides at once.  Netting converts the
//! base surplus into quote at the effective price, subtracts it from the
//! quote surplus, and turns whatever is left into a *virtual* deficit on
//! the opposite side.  The caller then prices against the tighter of the
//! raw and virtual deficits.

use tracing::trace;

use super::primitives::{base_from_quote_penalty, quote_from_base_penalty};
use crate::domain::{Amount, Rounding, SignedAmount};
use crate::error::Result;
use crate::math::wad;
use crate::state::PoolAssetState;

/// Deficit windows after netting, both non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoughtAmounts {
    /// Base the pool still wants back.
    pub bought_base: Amount,
    /// Quote the pool still wants back.
    pub bought_quote: Amount,
}

/// Computes the deficit windows seen by a trade in one direction.
///
/// 1. Each asset is in deficit (`target − reserve`) or surplus
///    (`reserve − target`).
/// 2. `net = sold_quote − price · sold_base`, signed.
/// 3. A non-negative `net` is a quote surplus, which implies a virtual base
///    deficit `base_from_quote_penalty(net)`.  A negative one is a base
///    surplus `|net| / price`, implying a virtual quote deficit
///    `quote_from_base_penalty(|net| / price)`.  Both use `r = WAD`.
/// 4. The base window is the smaller of the raw and virtual base deficits;
///    the quote window is the larger of the two quote deficits.
///
/// `is_selling_base` only picks the rounding of the cross-conversions in
/// steps 2 and 3, so that the bonus window never rounds in the taker's
/// favour.
///
/// # Errors
///
/// Propagates [`DivideByZero`](crate::error::AmmError::DivideByZero) for a
/// zero price and [`Overflow`](crate::error::AmmError::Overflow) from the
/// curve primitives.
///
/// # Examples
///
/// ```
/// use oracle_amm::curve::compute_bought_amounts;
/// use oracle_amm::domain::{Amount, FeeRate};
/// use oracle_amm::state::PoolAssetState;
///
/// let base = PoolAssetState::register(Amount::from_whole(100), Amount::ZERO, FeeRate::ZERO, Amount::ONE)
///     .expect("valid")
///     .with_reserve(Amount::from_whole(90));
/// let quote = PoolAssetState::quote(Amount::from_whole(1_000));
///
/// let windows = compute_bought_amounts(&base, &quote, Amount::from_whole(10), Amount::ZERO, true)
///     .expect("priced");
/// // Quote surplus of 1000 would buy 100 base; the raw deficit of 10 is tighter.
/// assert_eq!(windows.bought_base, Amount::from_whole(10));
/// assert_eq!(windows.bought_quote, Amount::ZERO);
/// ```
pub fn compute_bought_amounts(
    base: &PoolAssetState,
    quote: &PoolAssetState,
    price: Amount,
    coefficient: Amount,
    is_selling_base: bool,
) -> Result<BoughtAmounts> {
    let base_imbalance = base.imbalance();
    let quote_imbalance = quote.imbalance();

    // Selling base: overstate the base surplus, narrowing the base window
    // and widening the quote one.  Selling quote: the reverse.
    let rounding = if is_selling_base {
        Rounding::Ceil
    } else {
        Rounding::Floor
    };

    let sold_base_in_quote = wad::mul(base_imbalance.surplus(), price, rounding)?;
    let net = SignedAmount::difference(quote_imbalance.surplus(), sold_base_in_quote);

    let (virtual_base, virtual_quote) = match net.non_negative() {
        Some(quote_net) => (
            base_from_quote_penalty(price, coefficient, Amount::ONE, quote_net)?,
            Amount::ZERO,
        ),
        None => {
            let base_net = wad::div(net.magnitude(), price, rounding)?;
            (
                Amount::ZERO,
                quote_from_base_penalty(price, coefficient, Amount::ONE, base_net)?,
            )
        }
    };

    let raw_base = base_imbalance.deficit();
    let raw_quote = quote_imbalance.deficit();
    let bought = BoughtAmounts {
        bought_base: raw_base.min(virtual_base),
        bought_quote: raw_quote.max(virtual_quote),
    };

    trace!(
        %net,
        raw_base = %raw_base,
        raw_quote = %raw_quote,
        virtual_base = %virtual_base,
        virtual_quote = %virtual_quote,
        bought_base = %bought.bought_base,
        bought_quote = %bought.bought_quote,
        is_selling_base,
        "netted pool imbalance"
    );
    Ok(bought)
}
