//! Presentation seam: console rendering plus a chart-data export.
//!
//! Charts themselves are drawn by external consumers; this module renders
//! the textual blocks the CLI prints and writes the full aligned per-bar
//! table to disk so a charting tool can pick it up.

use std::path::PathBuf;

use async_trait::async_trait;
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::info;

use crate::analysis::TickerAnalysis;

/// The "Basic Statistics" console block.
pub fn render_statistics(analysis: &TickerAnalysis) -> String {
    let stats = &analysis.statistics;
    let mut out = format!("Basic Statistics for {} Stock:\n\n", analysis.series.symbol);
    out.push_str(&format!("Mean: {:.4}\n", stats.mean));
    out.push_str(&format!("Std Dev: {:.4}\n", stats.std_dev));
    out.push_str(&format!("Min: {:.4}\n", stats.min));
    out.push_str(&format!("Max: {:.4}\n", stats.max));
    out.push_str(&format!("Median: {:.4}\n", stats.median));
    out
}

/// The trading-recommendations table: one row per bar whose signal carries
/// a label. On a flat crossover regime the same label repeats day after
/// day; that is the signal contract, not a rendering defect.
pub fn render_recommendations(analysis: &TickerAnalysis) -> String {
    let mut out = String::from("Trading Recommendations:\n");
    out.push_str(&format!(
        "{:<12} {:<14} {:>12}\n",
        "Date", "Recommendation", "Close"
    ));

    let mut rows = 0usize;
    for (bar, signal) in analysis
        .series
        .bars()
        .iter()
        .zip(analysis.indicators.signals.iter())
    {
        if let Some(label) = signal.recommendation() {
            out.push_str(&format!(
                "{:<12} {:<14} {:>12.4}\n",
                bar.date.to_string(),
                label,
                bar.close
            ));
            rows += 1;
        }
    }

    if rows == 0 {
        out.push_str("(no recommendations in this range)\n");
    }
    out
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// An error occurred while trying to write the data.
    #[snafu(display("Failed to write chart data: {message}"))]
    Write {
        message: String,
        backtrace: Backtrace,
    },

    /// A generic I/O error.
    #[snafu(display("I/O error: {source}"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

/// Destination for a finished analysis.
#[async_trait]
pub trait ReportSink {
    /// The type of output returned after a successful write operation.
    ///
    /// This makes the trait flexible. For example:
    /// - A file sink might return `PathBuf`, the path to the created file.
    /// - A database sink might return `usize`, the number of rows inserted.
    type Output;

    /// Writes the analysis to the destination.
    async fn write(&self, analysis: &TickerAnalysis) -> Result<Self::Output, SinkError>;
}

/// Writes the aligned per-bar table as CSV into a per-application temp
/// directory, one file per run, and returns the path.
///
/// Columns: date, close, short MA, long MA, rolling mean, upper band,
/// lower band, daily return, signal. The first daily return is an empty
/// field, the defined no-value marker.
pub struct CsvChartSink {
    base_dir: PathBuf,
}

impl CsvChartSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl Default for CsvChartSink {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("stock_analysis"))
    }
}

#[async_trait]
impl ReportSink for CsvChartSink {
    type Output = PathBuf;

    async fn write(&self, analysis: &TickerAnalysis) -> Result<PathBuf, SinkError> {
        let series = &analysis.series;
        let set = &analysis.indicators;

        let (first, last) = match (series.first_date(), series.last_date()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return WriteSnafu {
                    message: "cannot export an empty series".to_string(),
                }
                .fail();
            }
        };

        std::fs::create_dir_all(&self.base_dir).context(IoSnafu)?;
        let path = self
            .base_dir
            .join(format!("{}_{}_{}_chart.csv", series.symbol, first, last));

        let mut content = String::from(
            "date,close,short_ma,long_ma,rolling_mean,upper_band,lower_band,daily_return,signal\n",
        );
        for (i, bar) in series.bars().iter().enumerate() {
            let daily_return = set.daily_returns[i]
                .map(|r| format!("{r:.9}"))
                .unwrap_or_default();
            content.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                bar.date,
                bar.close,
                set.short_ma[i],
                set.long_ma[i],
                set.rolling_mean[i],
                set.upper_band[i],
                set.lower_band[i],
                daily_return,
                set.signals[i],
            ));
        }

        std::fs::write(&path, content).context(IoSnafu)?;
        info!(path = %path.display(), rows = series.len(), "wrote chart data");
        Ok(path)
    }
}
