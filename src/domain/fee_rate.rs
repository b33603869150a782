//! Per-asset swap fee expressed as a WAD fraction.

use core::fmt;

use super::Amount;
use crate::error::AmmError;
use crate::math::mul_ceil;

/// A fee rate as a WAD fraction, bounded by [`FeeRate::MAX`] (1%).
///
/// The bound is enforced at construction, so a `FeeRate` in hand is always
/// configurable.  Fees are computed rounding up, in the pool's favour.
///
/// # Examples
///
/// ```
/// use oracle_amm::domain::{Amount, FeeRate};
///
/// // 0.25%
/// let fee = FeeRate::new(Amount::new(2_500_000_000_000_000)).expect("within bound");
/// assert_eq!(fee.apply(Amount::from_whole(100)).expect("fits"), Amount::new(250_000_000_000_000_000));
///
/// // 2% is rejected
/// assert!(FeeRate::new(Amount::new(20_000_000_000_000_000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeeRate(Amount);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(Amount::ZERO);

    /// Highest configurable rate, `0.01 · WAD`.
    pub const MAX: Self = Self(Amount::new(10_000_000_000_000_000));

    /// Creates a fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `rate > 0.01 · WAD`.
    pub fn new(rate: Amount) -> crate::error::Result<Self> {
        if rate > Self::MAX.0 {
            return Err(AmmError::InvalidFee("fee rate must not exceed 1%"));
        }
        Ok(Self(rate))
    }

    /// Returns the rate as a WAD fraction.
    pub const fn get(&self) -> Amount {
        self.0
    }

    /// `true` when no fee is charged.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Fee owed on `amount`, `⌈amount · rate⌉`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the raw product overflows.
    pub fn apply(&self, amount: Amount) -> crate::error::Result<Amount> {
        mul_ceil(amount, self.0)
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeRate({})", self.0.to_decimal_string())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn max_is_one_percent() {
        assert_eq!(FeeRate::MAX.get(), Amount::new(10_000_000_000_000_000));
        assert!(FeeRate::new(FeeRate::MAX.get()).is_ok());
    }

    #[test]
    fn above_max_rejected() {
        let Some(just_over) = FeeRate::MAX.get().checked_add(&Amount::new(1)) else {
            panic!("no overflow");
        };
        let Err(AmmError::InvalidFee(_)) = FeeRate::new(just_over) else {
            panic!("expected InvalidFee");
        };
    }

    #[test]
    fn apply_rounds_up() {
        let Ok(fee) = FeeRate::new(Amount::new(1_000_000_000_000_000)) else {
            panic!("expected Ok");
        };
        // 0.1% of 1 raw unit is a fraction of a unit; the pool keeps one.
        assert_eq!(fee.apply(Amount::new(1)), Ok(Amount::new(1)));
        assert_eq!(fee.apply(Amount::from_whole(1_000)), Ok(Amount::ONE));
    }

    #[test]
    fn zero_fee_charges_nothing() {
        assert!(FeeRate::ZERO.is_zero());
        assert_eq!(FeeRate::ZERO.apply(Amount::from_whole(10)), Ok(Amount::ZERO));
    }

    #[test]
    fn display_uses_decimal() {
        assert_eq!(FeeRate::MAX.to_string(), "FeeRate(0.01)");
    }
}
