//! Unified error types for the oracle-priced curve engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every failure is terminal for the single call that raised
//! it: the engine performs no retries and never suppresses an error by
//! clamping a value.

use thiserror::Error;

/// Errors produced by the fixed-point math, the curve engine and the router.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The asset has no feasible oracle price right now.
    #[error("oracle price infeasible for asset {0}")]
    OracleInfeasible(String),

    /// The asset was never registered with the pool.
    #[error("asset {0} is not registered")]
    AssetNotRegistered(String),

    /// The asset is registered but currently marked invalid.
    #[error("asset {0} is registered but not valid for trading")]
    AssetInvalid(String),

    /// The requested output exceeds the pool's tracked balance.
    #[error("insufficient pool balance: need {required}, have {available}")]
    InsufficientPoolBalance {
        /// Output the trade would pay out (raw WAD units).
        required: String,
        /// Reserve currently tracked for the output asset (raw WAD units).
        available: String,
    },

    /// A divisor was zero.
    #[error("division by zero")]
    DivideByZero,

    /// An intermediate or final value exceeded 256 bits.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would have produced a negative amount.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A bonus-curve denominator reached zero or below.
    #[error("bonus curve saturated: {0}")]
    CurveSaturated(&'static str),

    /// The caller-supplied slippage bound was not met.
    #[error("minimum output not met: got {actual}, wanted at least {minimum}")]
    MinimumOutputNotMet {
        /// Output the route produced (raw WAD units).
        actual: String,
        /// Caller's bound (raw WAD units).
        minimum: String,
    },

    /// A fee rate outside the permitted range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A configuration value is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The token combination is not tradable (e.g. identical assets).
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// An amount is not acceptable for the requested operation.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),
}

impl AmmError {
    /// Short machine-friendly code for this error, stable across releases.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::OracleInfeasible(_) => "oracle_infeasible",
            Self::AssetNotRegistered(_) => "asset_not_registered",
            Self::AssetInvalid(_) => "asset_invalid",
            Self::InsufficientPoolBalance { .. } => "insufficient_pool_balance",
            Self::DivideByZero => "divide_by_zero",
            Self::Overflow(_) => "overflow",
            Self::Underflow(_) => "underflow",
            Self::CurveSaturated(_) => "curve_saturated",
            Self::MinimumOutputNotMet { .. } => "minimum_output_not_met",
            Self::InvalidFee(_) => "invalid_fee",
            Self::InvalidConfiguration(_) => "invalid_configuration",
            Self::InvalidToken(_) => "invalid_token",
            Self::InvalidQuantity(_) => "invalid_quantity",
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
