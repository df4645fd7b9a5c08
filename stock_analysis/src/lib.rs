//! Descriptive statistics, technical indicators, and a moving-average
//! crossover signal over a daily price series.
//!
//! The pipeline is a sequence of pure transformations: each stage takes the
//! closing-price series and returns a new aligned series, and the
//! [`analysis::analyze`] orchestrator assembles the results into one
//! [`analysis::TickerAnalysis`]. Nothing here mutates shared state or talks
//! to the network; data acquisition lives in the `market_data` crate and
//! chart rendering is left to consumers of the exported table.

pub mod analysis;
pub mod indicators;
pub mod report;
pub mod settings;
pub mod signal;
pub mod stats;
