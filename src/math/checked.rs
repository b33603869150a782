//! Checked arithmetic trait for [`Amount`].
//!
//! [`CheckedArithmetic`] turns the `Option`-returning raw operations on
//! [`Amount`] into `Result`s carrying a specific [`AmmError`] variant, and
//! exposes WAD-scaled multiply/divide with an explicit [`Rounding`].  Curve
//! code chains these with `?`.
//!
//! # Examples
//!
//! ```
//! use oracle_amm::domain::{Amount, Rounding};
//! use oracle_amm::math::CheckedArithmetic;
//!
//! let price = Amount::from_whole(50_000);
//! let half = Amount::new(500_000_000_000_000_000);
//! assert_eq!(price.safe_mul(&half, Rounding::Floor), Ok(Amount::from_whole(25_000)));
//! assert!(Amount::ZERO.safe_sub(&Amount::ONE).is_err());
//! ```

use super::wad;
use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

/// Fallible arithmetic for WAD amounts.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead of clamping.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] past 256 bits.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// WAD-scaled multiplication, `self·other / WAD`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the raw product overflows.
    fn safe_mul(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;

    /// WAD-scaled division, `self·WAD / other`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivideByZero`] or [`AmmError::Overflow`].
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        wad::mul(*self, *other, rounding)
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        wad::div(*self, *other, rounding)
    }
}
