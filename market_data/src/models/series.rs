//! An ordered collection of daily bars for a single symbol.

use chrono::NaiveDate;

use crate::models::bar::PriceBar;

/// A complete daily price series for a single symbol.
///
/// Bars are strictly increasing by date with no duplicate dates. The
/// constructor enforces this regardless of the order the provider returned
/// pages in, so downstream consumers can index the series positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    /// The symbol this series represents (e.g., "AAPL").
    pub symbol: String,
    /// The bars, sorted ascending by date.
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Builds a series from bars in arbitrary order.
    ///
    /// Bars are sorted ascending by date; when two bars share a date, the
    /// first occurrence wins and later ones are dropped.
    pub fn from_bars(symbol: impl Into<String>, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// An empty series for a symbol with no data in the requested range.
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The closing prices, in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|b| b.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }
}
