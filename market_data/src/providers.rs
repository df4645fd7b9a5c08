//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, which serves as a unified
//! interface for fetching a daily price series from any market data vendor
//! (e.g., Alpaca, Polygon.io).
//!
//! Each concrete provider implementation should implement [`DataProvider`]
//! to handle vendor-specific API logic and validation.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) for runtime selection of providers.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_data::models::{request::BarsRequest, series::PriceSeries};
//! use market_data::providers::{DataProvider, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     async fn fetch_daily_bars(
//!         &self,
//!         req: &BarsRequest,
//!     ) -> Result<PriceSeries, ProviderError> {
//!         Ok(PriceSeries::empty(req.symbol.clone()))
//!     }
//! }
//! ```

pub mod alpaca_rest;

use async_trait::async_trait;
use shared_utils::env::MissingEnvVarError;
use snafu::{Backtrace, Snafu};

use crate::models::{request::BarsRequest, series::PriceSeries};

/// Trait for fetching a daily price series from a market data provider.
///
/// Implement this trait for each concrete data vendor (e.g., Alpaca,
/// Polygon). A symbol/range with no data is represented by an **empty
/// series**, not an error; errors are reserved for connectivity, lookup,
/// and validation failures.
#[async_trait]
pub trait DataProvider {
    /// Fetches the daily bars for the given request parameters.
    ///
    /// # Arguments
    ///
    /// * `req` - The parameters specifying symbol and date range.
    ///
    /// # Returns
    ///
    /// * `Ok(PriceSeries)` - The series, empty when no data exists.
    /// * `Err(ProviderError)` - If the request itself fails.
    async fn fetch_daily_bars(&self, req: &BarsRequest) -> Result<PriceSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// missed environment variable.
    #[snafu(display("Missing environment variable: {source}"))]
    MissingEnvVar {
        source: MissingEnvVarError,
        backtrace: Backtrace,
    },

    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// API key contains invalid characters.
    #[snafu(display("Invalid API key format: {source}"))]
    InvalidApiKey {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned a specific error message (e.g., invalid
    /// API key, unknown symbol).
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The request parameters were invalid for this specific provider.
    #[snafu(display("Invalid parameters for provider: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },

    /// An error during provider configuration or initialization.
    #[snafu(display("Provider initialization error: {source}"))]
    Init {
        #[snafu(backtrace)]
        source: ProviderInitError,
    },
}
