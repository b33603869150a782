//! Outcome of pricing a single hop or a routed swap.

use core::fmt;

use super::{Amount, Rounding};
use crate::math::wad;

/// A priced swap: what goes in, what comes out, and the fee charged.
///
/// `fee` is denominated in the asset it was charged in: the quote output
/// when selling base, the quote input when selling quote.  For a routed
/// two-hop swap it is the sum of both legs' fees, each in quote units.
///
/// # Examples
///
/// ```
/// use oracle_amm::domain::{Amount, SwapQuote};
///
/// let q = SwapQuote::new(Amount::from_whole(2), Amount::from_whole(99_990), Amount::from_whole(10));
/// assert_eq!(q.amount_out(), Amount::from_whole(99_990));
/// assert_eq!(q.execution_rate().expect("non-zero input"), Amount::from_whole(49_995));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapQuote {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapQuote {
    /// Creates a new quote record.
    pub const fn new(amount_in: Amount, amount_out: Amount, fee: Amount) -> Self {
        Self {
            amount_in,
            amount_out,
            fee,
        }
    }

    /// Input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output amount after fees.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Fee charged.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Realised rate `amount_out / amount_in`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivideByZero`](crate::error::AmmError::DivideByZero)
    /// for a zero input.
    pub fn execution_rate(&self) -> crate::error::Result<Amount> {
        wad::div(self.amount_out, self.amount_in, Rounding::Floor)
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote(in={}, out={}, fee={})",
            self.amount_in.to_decimal_string(),
            self.amount_out.to_decimal_string(),
            self.fee.to_decimal_string()
        )
    }
}
