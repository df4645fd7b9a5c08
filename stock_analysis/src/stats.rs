//! Summary statistics of the closing-price series.

/// Five scalar descriptive statistics computed once over the full series.
///
/// Unlike the indicator series these are not aligned per-bar; they describe
/// the closing prices as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator); 0.0 for a single
    /// observation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl SummaryStatistics {
    /// Computes the statistics, or `None` for an empty slice.
    pub fn from_closes(closes: &[f64]) -> Option<Self> {
        if closes.is_empty() {
            return None;
        }

        let n = closes.len() as f64;
        let mean = closes.iter().sum::<f64>() / n;
        let std_dev = crate::indicators::rolling::sample_std(closes);

        let mut sorted = closes.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let median = if sorted.len() % 2 == 1 {
            sorted[sorted.len() / 2]
        } else {
            let upper = sorted.len() / 2;
            (sorted[upper - 1] + sorted[upper]) / 2.0
        };

        Some(Self {
            mean,
            std_dev,
            min,
            max,
            median,
        })
    }
}
