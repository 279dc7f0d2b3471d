//! Endpoint wrappers for the CoinGecko REST API.
//!
//! Each method builds the route and required query parameters for one
//! upstream endpoint and delegates to
//! [`CoinGeckoSession::request()`](crate::CoinGeckoSession::request),
//! returning the JSON payload unchanged. Optional query parameters go in
//! the `extra` argument; a required parameter always overwrites an extra of
//! the same name.

mod coins;
mod contract;
mod derivatives;
mod exchanges;
mod global;
mod indexes;
mod simple;
