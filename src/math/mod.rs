//! Fixed-point arithmetic for curve calculations.
//!
//! [`wad`] holds the six floor/ceil primitives every curve computation is
//! built on; [`CheckedArithmetic`] wraps them (and raw add/sub) as
//! `Result`-returning methods on [`Amount`](crate::domain::Amount).

mod checked;
pub mod wad;

pub use checked::CheckedArithmetic;
pub use wad::{div_ceil, div_floor, mul_ceil, mul_floor, reciprocal_ceil, reciprocal_floor};
