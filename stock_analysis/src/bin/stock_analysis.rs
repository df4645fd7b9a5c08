use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use market_data::{
    models::request::BarsRequest,
    providers::{DataProvider, alpaca_rest::provider::AlpacaProvider},
};
use stock_analysis::{
    analysis::analyze,
    report::{self, CsvChartSink, ReportSink},
    settings::AnalysisSettings,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Daily stock trend analysis")]
struct Cli {
    /// Ticker symbol to analyze (e.g. AAPL); case-insensitive
    ticker: String,

    /// Start date, YYYY-MM-DD (default: 2022-01-01, or the settings file)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// End date, YYYY-MM-DD (default: today)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Path to a TOML settings file overriding the default windows
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip writing the chart-data CSV
    #[arg(long)]
    no_export: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => AnalysisSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => AnalysisSettings::default(),
    };

    let ticker = cli.ticker.to_uppercase();
    let start = cli.start.unwrap_or(settings.start_date);
    let end = cli.end.unwrap_or_else(|| Utc::now().date_naive());

    let provider = AlpacaProvider::new().context("initializing the Alpaca provider")?;
    let req = BarsRequest::new(ticker.clone(), start, end);
    let series = provider
        .fetch_daily_bars(&req)
        .await
        .with_context(|| format!("fetching daily bars for {ticker}"))?;

    if series.is_empty() {
        println!("No data available for {ticker} between {start} and {end}.");
        return Ok(());
    }

    let analysis = analyze(series, &settings.params())?;

    println!();
    println!("{}", report::render_statistics(&analysis));
    println!("{}", report::render_recommendations(&analysis));

    if !cli.no_export {
        let sink = CsvChartSink::default();
        let path = sink.write(&analysis).await?;
        println!("Chart data written to {}", path.display());
    }

    Ok(())
}
