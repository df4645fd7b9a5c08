//! Canonical in-memory representation of one trading-day observation.
//!
//! This struct is used as the standard output element for all
//! [`DataProvider`](crate::providers::DataProvider) implementations,
//! regardless of the vendor the data came from.

use chrono::NaiveDate;

/// A single daily price bar (OHLCV) for a given calendar date.
///
/// This struct is vendor-agnostic and immutable once retrieved: nothing in
/// the pipeline writes to it after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBar {
    /// The trading day this bar covers.
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price during the session.
    pub high: f64,

    /// Lowest price during the session.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume traded during the session.
    pub volume: f64,
}
