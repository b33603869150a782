//! WAD-scaled fixed-point amount with checked arithmetic.

use core::fmt;

use primitive_types::U256;
use rust_decimal::Decimal;

use super::Rounding;
use crate::error::AmmError;

/// Number of fractional decimal digits carried by every [`Amount`].
pub const WAD_DECIMALS: u32 = 18;

/// The fixed-point scale, `10^18`.
pub const WAD: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// A non-negative fixed-point value scaled by [`WAD`].
///
/// Prices, reserves, fee rates, coefficients and swap outputs are all
/// `Amount`s.  The raw representation is a 256-bit unsigned integer, so
/// `Amount::ONE` is stored as `10^18`.
///
/// Integer-level arithmetic (`checked_*`) operates on the raw value and
/// returns `None` on overflow, underflow, or division by zero.  Scaled
/// multiplication and division live in [`crate::math::wad`].
///
/// # Examples
///
/// ```
/// use oracle_amm::domain::Amount;
///
/// let a = Amount::from_whole(2);
/// let b = Amount::from_whole(3);
/// assert_eq!(a.checked_add(&b), Some(Amount::from_whole(5)));
/// assert_eq!(Amount::ONE.raw_u128(), Some(1_000_000_000_000_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero.
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// One whole unit (`10^18` raw).
    pub const ONE: Self = Self(WAD);

    /// Largest representable raw value.
    pub const MAX: Self = Self(U256::MAX);

    /// Creates an amount from a raw (already scaled) `u128`.
    pub const fn new(raw: u128) -> Self {
        Self(U256([raw as u64, (raw >> 64) as u64, 0, 0]))
    }

    /// Creates an amount from a raw (already scaled) 256-bit value.
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Creates an amount representing `whole` units, i.e. `whole · 10^18`.
    ///
    /// Cannot overflow: `u128::MAX · 10^18 < 2^256`.
    pub fn from_whole(whole: u128) -> Self {
        Self(U256::from(whole) * WAD)
    }

    /// Converts a human decimal such as `0.0001` into a WAD amount.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `value` is negative or carries
    ///   more than 18 fractional digits (the conversion would be lossy).
    pub fn from_decimal(value: Decimal) -> crate::error::Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmmError::InvalidQuantity("decimal amount must not be negative"));
        }
        let normalized = value.normalize();
        let scale = normalized.scale();
        if scale > WAD_DECIMALS {
            return Err(AmmError::InvalidQuantity(
                "decimal amount has more than 18 fractional digits",
            ));
        }
        let mantissa = normalized.mantissa().unsigned_abs();
        let factor = U256::exp10((WAD_DECIMALS - scale) as usize);
        Ok(Self(U256::from(mantissa) * factor))
    }

    /// Returns the underlying raw value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns the raw value as `u128` if it fits.
    #[must_use]
    pub fn raw_u128(&self) -> Option<u128> {
        u128::try_from(self.0).ok()
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Subtraction floored at zero.
    pub fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Checked raw multiplication (no rescaling). Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Checked raw division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0.is_zero() {
            return None;
        }
        let (q, r) = self.0.div_mod(divisor.0);
        match rounding {
            Rounding::Floor => Some(Self(q)),
            // q + 1 cannot overflow: r != 0 implies divisor > 1, so q < MAX.
            Rounding::Ceil if !r.is_zero() => Some(Self(q + U256::one())),
            Rounding::Ceil => Some(Self(q)),
        }
    }

    /// Renders the amount as a human decimal with trailing zeros trimmed,
    /// e.g. `1500000000000000000` → `"1.5"`.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        let (whole, frac) = self.0.div_mod(WAD);
        if frac.is_zero() {
            return whole.to_string();
        }
        let frac = format!("{:0>18}", frac.to_string());
        format!("{whole}.{}", frac.trim_end_matches('0'))
    }
}

impl From<U256> for Amount {
    fn from(raw: U256) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
