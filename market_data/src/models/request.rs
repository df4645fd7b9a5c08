use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::providers::alpaca_rest::params::AlpacaBarsParams;

/// Universal parameters for requesting a daily price series from any
/// market data provider.
///
/// This struct is vendor-agnostic and is the standard input for all
/// [`DataProvider`](crate::providers::DataProvider) implementations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarsRequest {
    /// The symbol to request (e.g., `"AAPL"`).
    pub symbol: String,

    /// Start of the requested date range (inclusive).
    pub start: NaiveDate,

    /// End of the requested date range (inclusive).
    ///
    /// Providers should return bars up to and including this calendar day.
    pub end: NaiveDate,

    /// Optional, provider-specific parameters.
    #[serde(default)]
    pub provider_specific: ProviderParams,
}

impl BarsRequest {
    /// A request for `symbol` over `[start, end]` with no provider-specific
    /// overrides.
    pub fn new(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
            provider_specific: ProviderParams::default(),
        }
    }
}

/// An enum to hold provider-specific request parameters.
///
/// This allows callers to specify detailed, per-request options for a
/// particular provider without cluttering the universal `BarsRequest`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum ProviderParams {
    #[default]
    None,
    Alpaca(AlpacaBarsParams),
    // Add other providers here later, e.g., Polygon(PolygonBarsParams)
}
