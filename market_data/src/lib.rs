//! Market data acquisition for the analysis pipeline.
//!
//! This crate defines the canonical price-bar models ([`models`]) and the
//! [`providers::DataProvider`] trait for fetching a daily price series from
//! an external market data vendor, together with an Alpaca Market Data REST
//! implementation.

pub mod models;
pub mod providers;
