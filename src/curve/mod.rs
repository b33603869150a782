//! Curve primitives and imbalance netting.
//!
//! [`primitives`] holds the four pure price-factor conversions;
//! [`netting`] reduces the pool's two-sided imbalance to the deficit
//! windows the engine prices against.

pub mod netting;
pub mod primitives;

#[cfg(test)]
mod proptest_properties;

pub use netting::{compute_bought_amounts, BoughtAmounts};
pub use primitives::{
    base_from_quote_bonus, base_from_quote_penalty, curve, quote_from_base_bonus,
    quote_from_base_penalty, AssetSide, CurveDirection,
};
