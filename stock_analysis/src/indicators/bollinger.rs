//! Bollinger Bands: a rolling mean with a ±k·σ envelope.

use crate::indicators::rolling::{rolling_mean, rolling_std};

/// Default look-back window, in trading days.
pub const DEFAULT_WINDOW: usize = 20;

/// Default band width, in standard deviations.
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

/// The three band series, aligned 1:1 with the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    /// Rolling mean of closing price (the middle band).
    pub middle: Vec<f64>,
    /// `middle + multiplier · rolling σ`.
    pub upper: Vec<f64>,
    /// `middle − multiplier · rolling σ`.
    pub lower: Vec<f64>,
}

impl BollingerBands {
    /// Computes the bands with the expanding warm-up rule shared with the
    /// moving-average engine. While the window holds a single observation
    /// the deviation is 0.0 and the bands collapse onto the middle.
    /// `window` must be at least 1.
    pub fn compute(closes: &[f64], window: usize, multiplier: f64) -> Self {
        let middle = rolling_mean(closes, window);
        let std = rolling_std(closes, window);

        let upper = middle
            .iter()
            .zip(std.iter())
            .map(|(m, s)| m + multiplier * s)
            .collect();
        let lower = middle
            .iter()
            .zip(std.iter())
            .map(|(m, s)| m - multiplier * s)
            .collect();

        Self {
            middle,
            upper,
            lower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn output_lengths_match_input() {
        let closes: Vec<f64> = (0..90).map(|i| (i as f64).sin() + 10.0).collect();
        let bands = BollingerBands::compute(&closes, DEFAULT_WINDOW, DEFAULT_MULTIPLIER);
        assert_eq!(bands.middle.len(), closes.len());
        assert_eq!(bands.upper.len(), closes.len());
        assert_eq!(bands.lower.len(), closes.len());
    }

    #[test]
    fn constant_series_collapses_bands() {
        let closes = [100.0; 40];
        let bands = BollingerBands::compute(&closes, 20, 2.0);
        for i in 0..closes.len() {
            assert!((bands.middle[i] - 100.0).abs() < TOL);
            assert!((bands.upper[i] - 100.0).abs() < TOL);
            assert!((bands.lower[i] - 100.0).abs() < TOL);
        }
    }

    #[test]
    fn bands_straddle_the_middle() {
        let closes: Vec<f64> = (1..=60).map(|i| i as f64).collect();
        let bands = BollingerBands::compute(&closes, 20, 2.0);
        // Warm-up index 0 has a single observation: bands touch the middle.
        assert!((bands.upper[0] - bands.middle[0]).abs() < TOL);
        assert!((bands.lower[0] - bands.middle[0]).abs() < TOL);
        for i in 1..closes.len() {
            assert!(bands.upper[i] > bands.middle[i]);
            assert!(bands.lower[i] < bands.middle[i]);
        }
    }

    #[test]
    fn envelope_is_symmetric() {
        let closes: Vec<f64> = (0..50).map(|i| ((i * 7) % 13) as f64).collect();
        let bands = BollingerBands::compute(&closes, 10, 2.5);
        for i in 0..closes.len() {
            let above = bands.upper[i] - bands.middle[i];
            let below = bands.middle[i] - bands.lower[i];
            assert!((above - below).abs() < TOL);
        }
    }
}
