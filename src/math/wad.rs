//! WAD fixed-point primitives.
//!
//! Every quantity the curve engine touches is an [`Amount`] scaled by
//! `10^18`.  These functions are the only place the scale is applied and
//! removed, and each one names its rounding direction.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`mul_floor`] / [`mul_ceil`] | `a·b / WAD` |
//! | [`div_floor`] / [`div_ceil`] | `a·WAD / b` |
//! | [`reciprocal_floor`] / [`reciprocal_ceil`] | `WAD·WAD / a` |
//!
//! # Failure modes
//!
//! - A zero divisor returns [`AmmError::DivideByZero`].
//! - A 256-bit intermediate product that would wrap returns
//!   [`AmmError::Overflow`].  Nothing is ever truncated silently.
//!
//! # Examples
//!
//! ```
//! use oracle_amm::domain::Amount;
//! use oracle_amm::math::{div_ceil, div_floor, mul_ceil, mul_floor};
//!
//! let wad = Amount::ONE;
//! assert_eq!(mul_floor(Amount::from_whole(2), Amount::from_whole(12)), Ok(Amount::from_whole(24)));
//! assert_eq!(mul_floor(Amount::new(300_000_000), Amount::new(3_000_000_000)), Ok(Amount::ZERO));
//! assert_eq!(mul_ceil(Amount::new(200_000_000), Amount::new(1_000_000_000)), Ok(Amount::new(1)));
//! assert_eq!(div_floor(Amount::new(1), Amount::from_whole(2)), Ok(Amount::ZERO));
//! assert_eq!(div_ceil(Amount::new(1), Amount::from_whole(2)), Ok(Amount::new(1)));
//! assert!(div_floor(wad, Amount::ZERO).is_err());
//! ```

use primitive_types::U256;

use crate::domain::{Amount, Rounding, WAD};
use crate::error::{AmmError, Result};

/// `WAD · WAD`, the numerator of every reciprocal.
const WAD_SQUARED: U256 = U256([0xb34b_9f10_0000_0000, 0x00c0_97ce_7bc9_0715, 0, 0]);

/// Divides a raw numerator, rounding as requested.
fn div_rounded(numerator: U256, denominator: U256, rounding: Rounding) -> Amount {
    let (q, r) = numerator.div_mod(denominator);
    // r != 0 implies denominator > 1, so q < U256::MAX and q + 1 cannot wrap.
    if rounding.is_ceil() && !r.is_zero() {
        Amount::from_raw(q + U256::one())
    } else {
        Amount::from_raw(q)
    }
}

/// `a·b / WAD` with explicit rounding.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if `a·b` does not fit in 256 bits.
pub fn mul(a: Amount, b: Amount, rounding: Rounding) -> Result<Amount> {
    let product = a
        .get()
        .checked_mul(b.get())
        .ok_or(AmmError::Overflow("wad multiplication product"))?;
    Ok(div_rounded(product, WAD, rounding))
}

/// `a·WAD / b` with explicit rounding.
///
/// # Errors
///
/// - [`AmmError::DivideByZero`] if `b` is zero.
/// - [`AmmError::Overflow`] if `a·WAD` does not fit in 256 bits.
pub fn div(a: Amount, b: Amount, rounding: Rounding) -> Result<Amount> {
    if b.is_zero() {
        return Err(AmmError::DivideByZero);
    }
    let scaled = a
        .get()
        .checked_mul(WAD)
        .ok_or(AmmError::Overflow("wad division numerator"))?;
    Ok(div_rounded(scaled, b.get(), rounding))
}

/// `WAD·WAD / a` with explicit rounding.
///
/// # Errors
///
/// Returns [`AmmError::DivideByZero`] if `a` is zero.
pub fn reciprocal(a: Amount, rounding: Rounding) -> Result<Amount> {
    if a.is_zero() {
        return Err(AmmError::DivideByZero);
    }
    Ok(div_rounded(WAD_SQUARED, a.get(), rounding))
}

/// `⌊a·b / WAD⌋`.
///
/// # Errors
///
/// See [`mul`].
pub fn mul_floor(a: Amount, b: Amount) -> Result<Amount> {
    mul(a, b, Rounding::Floor)
}

/// `⌈a·b / WAD⌉`.
///
/// # Errors
///
/// See [`mul`].
pub fn mul_ceil(a: Amount, b: Amount) -> Result<Amount> {
    mul(a, b, Rounding::Ceil)
}

/// `⌊a·WAD / b⌋`.
///
/// # Errors
///
/// See [`div`].
pub fn div_floor(a: Amount, b: Amount) -> Result<Amount> {
    div(a, b, Rounding::Floor)
}

/// `⌈a·WAD / b⌉`.
///
/// # Errors
///
/// See [`div`].
pub fn div_ceil(a: Amount, b: Amount) -> Result<Amount> {
    div(a, b, Rounding::Ceil)
}

/// `⌊WAD² / a⌋`.
///
/// # Errors
///
/// See [`reciprocal`].
pub fn reciprocal_floor(a: Amount) -> Result<Amount> {
    reciprocal(a, Rounding::Floor)
}

/// `⌈WAD² / a⌉`.
///
/// # Errors
///
/// See [`reciprocal`].
pub fn reciprocal_ceil(a: Amount) -> Result<Amount> {
    reciprocal(a, Rounding::Ceil)
}
