// =============================================================================
// swingstop CLI — compute a stop-loss signal from a candle payload file
// =============================================================================
//
// Reads an exchange candle payload (JSON array, most-recent candle first)
// from disk, runs the stop-loss pipeline, and prints the result as JSON plus
// the alert line a notification relay would forward.  No network I/O: the
// caller is responsible for fetching the payload.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use swingstop::{compute_stop_loss, parse_recent_first_json, StopLossError, StopLossParams};

#[derive(Debug, Parser)]
#[command(name = "swingstop", about = "Swing-low stop-loss signal from candle data")]
struct Cli {
    /// Path to a JSON file holding the exchange candle payload.
    candle_file: String,

    /// Ticker label carried into the result.
    #[arg(long, default_value = "KRW-BTC")]
    ticker: String,

    /// ATR look-back period.
    #[arg(long, default_value_t = 14)]
    atr_period: usize,

    /// Bars to the left of a pivot candidate.
    #[arg(long, default_value_t = 15)]
    left_bars: usize,

    /// Bars to the right of a pivot candidate.
    #[arg(long, default_value_t = 15)]
    right_bars: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.candle_file)
        .with_context(|| format!("failed to read candle file {}", cli.candle_file))?;
    let candles = parse_recent_first_json(&raw)?;
    info!(ticker = %cli.ticker, candles = candles.len(), "Candle payload loaded");

    let params = StopLossParams {
        atr_period: cli.atr_period,
        pivot_left_bars: cli.left_bars,
        pivot_right_bars: cli.right_bars,
    };

    match compute_stop_loss(&cli.ticker, &candles, &params) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            println!("{}", result.alert_message());
            Ok(())
        }
        Err(e) if e.is_business_condition() => {
            warn!(ticker = %cli.ticker, "Insufficient data for a signal: {e}");
            std::process::exit(2);
        }
        Err(e) => Err(e).context("stop-loss computation failed"),
    }
}
