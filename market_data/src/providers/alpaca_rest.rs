//! Alpaca Market Data REST implementation of [`DataProvider`](crate::providers::DataProvider).

pub mod params;
pub mod provider;
pub mod response;
