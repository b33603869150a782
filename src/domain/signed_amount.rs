//! Sign-magnitude amount used only for the netting intermediate.

use core::cmp::Ordering;
use core::fmt;

use super::Amount;

/// A signed WAD value stored as sign plus [`Amount`] magnitude.
///
/// Zero is always non-negative, so two representations of zero never
/// compare unequal.  This type exists for the surplus-netting step, where
/// one surplus minus a cross-converted surplus may fall below zero; it is
/// never returned from a public pricing operation.
///
/// # Examples
///
/// ```
/// use oracle_amm::domain::{Amount, SignedAmount};
///
/// let net = SignedAmount::difference(Amount::new(3), Amount::new(10));
/// assert!(net.is_negative());
/// assert_eq!(net.magnitude(), Amount::new(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SignedAmount {
    negative: bool,
    magnitude: Amount,
}

impl SignedAmount {
    /// Zero.
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: Amount::ZERO,
    };

    /// A non-negative value.
    pub const fn positive(magnitude: Amount) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }

    /// `lhs − rhs`, exact for any pair of amounts.
    pub fn difference(lhs: Amount, rhs: Amount) -> Self {
        match lhs.cmp(&rhs) {
            Ordering::Less => Self {
                negative: true,
                magnitude: rhs.saturating_sub(&lhs),
            },
            _ => Self::positive(lhs.saturating_sub(&rhs)),
        }
    }

    /// `true` when strictly below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value.
    pub const fn magnitude(&self) -> Amount {
        self.magnitude
    }

    /// The value if non-negative, otherwise `None`.
    #[must_use]
    pub const fn non_negative(&self) -> Option<Amount> {
        if self.negative {
            None
        } else {
            Some(self.magnitude)
        }
    }
}

impl PartialOrd for SignedAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SignedAmount {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl fmt::Display for SignedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}
