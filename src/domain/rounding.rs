//! Explicit rounding direction for fixed-point operations.

/// Rounding direction for scaled multiplication and division.
///
/// Every WAD operation names its direction.  The engine always rounds
/// against the taker: outputs use [`Rounding::Floor`], fees and the
/// denominators that shrink outputs use [`Rounding::Ceil`].
///
/// # Examples
///
/// ```
/// use oracle_amm::domain::Rounding;
///
/// assert!(Rounding::Ceil.is_ceil());
/// assert_eq!(Rounding::Floor.opposite(), Rounding::Ceil);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round toward zero.
    Floor,
    /// Round up whenever any remainder is left.
    Ceil,
}

impl Rounding {
    /// Returns `true` for [`Rounding::Ceil`].
    #[must_use]
    pub const fn is_ceil(&self) -> bool {
        matches!(self, Self::Ceil)
    }

    /// The other direction.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Floor => Self::Ceil,
            Self::Ceil => Self::Floor,
        }
    }
}
