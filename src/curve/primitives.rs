//! The four oracle curve primitives.
//!
//! Each primitive converts an amount of one asset into the other at an
//! effective price `p`, bent by a slippage term `k·r·(…)`:
//!
//! | Function | Price factor | Output |
//! |----------|--------------|--------|
//! | [`quote_from_base_penalty`] | `1 + k·p·r·b` | `b·p / factor` |
//! | [`quote_from_base_bonus`]   | `1 − k·p·r·b` | `b·p / factor` |
//! | [`base_from_quote_penalty`] | `1 + k·r·q`   | `q / p / factor` |
//! | [`base_from_quote_bonus`]   | `1 − k·r·q`   | `q / p / factor` |
//!
//! All four are thin wrappers over [`curve`], which is the only place the
//! formulas are written down.
//!
//! # Rounding
//!
//! Every step rounds against the taker: the value and the final division
//! floor, the penalty term rounds up (larger denominator) and the bonus
//! term rounds down (smaller subtraction).
//!
//! # Inverse pairs
//!
//! With equal `k` and `r`, the bonus form on one side undoes the penalty
//! form on the other, up to rounding:
//! `quote_from_base_bonus(base_from_quote_penalty(q)) ≈ q`.  Netting and
//! the engine rely on this to move between "amount already traded" and
//! "imbalance it caused".

use crate::domain::{Amount, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{wad, CheckedArithmetic};

/// Which way the slippage term bends the price factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveDirection {
    /// `1 − term`: output grows faster than linearly (rebalancing reward).
    Bonus,
    /// `1 + term`: output grows slower than linearly (ordinary slippage).
    Penalty,
}

impl CurveDirection {
    /// Rounding applied to the slippage term so the factor favours the pool.
    const fn term_rounding(self) -> Rounding {
        match self {
            Self::Bonus => Rounding::Floor,
            Self::Penalty => Rounding::Ceil,
        }
    }
}

/// Which asset the input amount is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSide {
    /// Input is base; output is quote.
    Base,
    /// Input is quote; output is base.
    Quote,
}

/// Evaluates one curve primitive.
///
/// `price` is quote per base, `coefficient` is `k`, `rebalance` is `r` in
/// `[0, WAD]`.  A zero `amount` always yields zero.
///
/// # Errors
///
/// - [`AmmError::CurveSaturated`] if a bonus factor would be `≤ 0`.
/// - [`AmmError::DivideByZero`] when converting quote to base at a zero
///   price.
/// - [`AmmError::Overflow`] if an intermediate product exceeds 256 bits.
pub fn curve(
    direction: CurveDirection,
    side: AssetSide,
    price: Amount,
    coefficient: Amount,
    rebalance: Amount,
    amount: Amount,
) -> Result<Amount> {
    if amount.is_zero() {
        return Ok(Amount::ZERO);
    }
    let rounding = direction.term_rounding();

    // Slippage term: k·r·q, or k·p·r·b when sizing base.
    let mut term = wad::mul(coefficient, rebalance, rounding)?;
    if side == AssetSide::Base {
        term = wad::mul(term, price, rounding)?;
    }
    term = wad::mul(term, amount, rounding)?;

    let factor = match direction {
        CurveDirection::Penalty => Amount::ONE.safe_add(&term)?,
        CurveDirection::Bonus => {
            if term >= Amount::ONE {
                return Err(AmmError::CurveSaturated("slippage term reaches 1"));
            }
            Amount::ONE.safe_sub(&term)?
        }
    };

    let value = match side {
        AssetSide::Base => wad::mul(amount, price, Rounding::Floor)?,
        AssetSide::Quote => wad::div(amount, price, Rounding::Floor)?,
    };
    wad::div(value, factor, Rounding::Floor)
}

/// Quote received for `base` under ordinary slippage.
///
/// # Errors
///
/// See [`curve`].
pub fn quote_from_base_penalty(
    price: Amount,
    coefficient: Amount,
    rebalance: Amount,
    base: Amount,
) -> Result<Amount> {
    curve(CurveDirection::Penalty, AssetSide::Base, price, coefficient, rebalance, base)
}

/// Quote received for `base` while base is in deficit.
///
/// # Errors
///
/// See [`curve`].
pub fn quote_from_base_bonus(
    price: Amount,
    coefficient: Amount,
    rebalance: Amount,
    base: Amount,
) -> Result<Amount> {
    curve(CurveDirection::Bonus, AssetSide::Base, price, coefficient, rebalance, base)
}

/// Base received for `quote` under ordinary slippage.
///
/// # Errors
///
/// See [`curve`].
pub fn base_from_quote_penalty(
    price: Amount,
    coefficient: Amount,
    rebalance: Amount,
    quote: Amount,
) -> Result<Amount> {
    curve(CurveDirection::Penalty, AssetSide::Quote, price, coefficient, rebalance, quote)
}

/// Base received for `quote` while quote is in deficit.
///
/// # Errors
///
/// See [`curve`].
pub fn base_from_quote_bonus(
    price: Amount,
    coefficient: Amount,
    rebalance: Amount,
    quote: Amount,
) -> Result<Amount> {
    curve(CurveDirection::Bonus, AssetSide::Quote, price, coefficient, rebalance, quote)
}
