//! Value types shared by every layer of the engine.
//!
//! All types are newtypes with validated constructors where an invariant
//! exists (e.g. [`FeeRate`] is bounded by 1%).  Quantities are WAD-scaled
//! [`Amount`]s; [`SignedAmount`] appears only inside netting.

mod amount;
mod asset_id;
mod fee_rate;
mod rounding;
mod signed_amount;
mod swap_quote;

pub use amount::{Amount, WAD, WAD_DECIMALS};
pub use asset_id::AssetId;
pub use fee_rate::FeeRate;
pub use rounding::Rounding;
pub use signed_amount::SignedAmount;
pub use swap_quote::SwapQuote;
