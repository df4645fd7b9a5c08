//! Short/long simple moving averages over closing price.

use crate::indicators::rolling::rolling_mean;

/// Default short window, in trading days.
pub const DEFAULT_SHORT_WINDOW: usize = 20;

/// Default long window, in trading days.
pub const DEFAULT_LONG_WINDOW: usize = 50;

/// The two crossover moving averages, aligned 1:1 with the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverages {
    pub short: Vec<f64>,
    pub long: Vec<f64>,
}

impl MovingAverages {
    /// Computes both averages with the expanding warm-up rule of
    /// [`rolling_mean`]. Both windows must be at least 1.
    pub fn compute(closes: &[f64], short_window: usize, long_window: usize) -> Self {
        Self {
            short: rolling_mean(closes, short_window),
            long: rolling_mean(closes, long_window),
        }
    }
}
