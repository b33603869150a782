//! Core trait abstractions.
//!
//! [`QuoteSource`] prices single hops for the router; [`FromConfig`]
//! builds validated state from declarative configuration.

mod from_config;
mod quote_source;

pub use from_config::FromConfig;
pub use quote_source::QuoteSource;
