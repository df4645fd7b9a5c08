//! The pipeline orchestrator: composes the pure indicator stages into one
//! immutable result.

use market_data::models::series::PriceSeries;
use thiserror::Error;
use tracing::debug;

use crate::{
    indicators::{
        bollinger::{self, BollingerBands},
        moving_average::{self, MovingAverages},
        returns::daily_returns,
    },
    signal::{Signal, crossover_signals},
    stats::SummaryStatistics,
};

/// Errors from the analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The provider returned no bars for the symbol; nothing to compute.
    #[error("No data available for {symbol} in the requested date range")]
    EmptySeries { symbol: String },

    /// A window parameter that the windowed kernels cannot accept.
    #[error("Invalid analysis parameter: {message}")]
    InvalidParams { message: String },
}

/// Window sizes and band width for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisParams {
    pub short_window: usize,
    pub long_window: usize,
    pub bollinger_window: usize,
    pub bollinger_multiplier: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            short_window: moving_average::DEFAULT_SHORT_WINDOW,
            long_window: moving_average::DEFAULT_LONG_WINDOW,
            bollinger_window: bollinger::DEFAULT_WINDOW,
            bollinger_multiplier: bollinger::DEFAULT_MULTIPLIER,
        }
    }
}

impl AnalysisParams {
    fn validate(&self) -> Result<(), AnalysisError> {
        for (name, value) in [
            ("short_window", self.short_window),
            ("long_window", self.long_window),
            ("bollinger_window", self.bollinger_window),
        ] {
            if value == 0 {
                return Err(AnalysisError::InvalidParams {
                    message: format!("{name} must be at least 1"),
                });
            }
        }
        Ok(())
    }
}

/// All per-bar derived series, aligned 1:1 with the price series by index.
///
/// Every field has exactly one value per bar; warm-up indices hold the
/// expanding-window value (or `None` for the first daily return), never a
/// shortened vector.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub short_ma: Vec<f64>,
    pub long_ma: Vec<f64>,
    pub rolling_mean: Vec<f64>,
    pub upper_band: Vec<f64>,
    pub lower_band: Vec<f64>,
    pub daily_returns: Vec<Option<f64>>,
    pub signals: Vec<Signal>,
}

impl IndicatorSet {
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// The finished analysis of one ticker: the input series, the aligned
/// indicator set, and the whole-series summary statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerAnalysis {
    pub series: PriceSeries,
    pub indicators: IndicatorSet,
    pub statistics: SummaryStatistics,
}

/// Runs every indicator stage over the series and assembles the result.
///
/// The stages are pure functions of the closing prices; re-running on an
/// unchanged series reproduces the identical result. The series must be
/// non-empty: the caller decides how to surface the no-data case before the
/// engines run.
pub fn analyze(series: PriceSeries, params: &AnalysisParams) -> Result<TickerAnalysis, AnalysisError> {
    params.validate()?;

    if series.is_empty() {
        return Err(AnalysisError::EmptySeries {
            symbol: series.symbol.clone(),
        });
    }

    let closes = series.closes();
    debug!(symbol = %series.symbol, bars = closes.len(), ?params, "running indicator pipeline");

    let mas = MovingAverages::compute(&closes, params.short_window, params.long_window);
    let bands = BollingerBands::compute(
        &closes,
        params.bollinger_window,
        params.bollinger_multiplier,
    );
    let returns = daily_returns(&closes);
    let signals = crossover_signals(&mas.short, &mas.long);

    // Unreachable: emptiness was checked above.
    let statistics =
        SummaryStatistics::from_closes(&closes).ok_or_else(|| AnalysisError::EmptySeries {
            symbol: series.symbol.clone(),
        })?;

    let indicators = IndicatorSet {
        short_ma: mas.short,
        long_ma: mas.long,
        rolling_mean: bands.middle,
        upper_band: bands.upper,
        lower_band: bands.lower,
        daily_returns: returns,
        signals,
    };
    debug_assert_eq!(indicators.len(), series.len());

    Ok(TickerAnalysis {
        series,
        indicators,
        statistics,
    })
}
