// =============================================================================
// Swing-low stop-loss — ATR + pivot-low orchestration
// =============================================================================
//
// Pipeline for one ticker:
//
//   1. Split the oldest-first candle series into high / low / close columns.
//   2. Compute the Wilder ATR series over `atr_period`.
//   3. Scan the lows for pivot lows over the configured windows.
//   4. Take the most recent pivot (last element of the ascending-index list)
//      and look up the ATR value aligned to it.
//   5. suggested stop = pivot low - ATR at that pivot.
//
// Alignment: the ATR series is shorter than the candle series by `atr_period`
// elements, so the ATR value for the pivot at candle index `i` lives at
// series index `i - (atr_period - 1)`.  A pivot too early in the series for
// any ATR value to exist is a parameter-configuration error, reported as
// `IndexOutOfRange` rather than silently clamped.

use serde::Serialize;
use tracing::debug;

use crate::error::StopLossError;
use crate::indicators::atr::compute_atr;
use crate::indicators::pivot::find_pivot_lows;
use crate::market_data::Candle;

// ---------------------------------------------------------------------------
// Parameters & result
// ---------------------------------------------------------------------------

/// Tuning knobs for the stop-loss computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopLossParams {
    pub atr_period: usize,
    pub pivot_left_bars: usize,
    pub pivot_right_bars: usize,
}

impl Default for StopLossParams {
    fn default() -> Self {
        Self {
            atr_period: 14,
            pivot_left_bars: 15,
            pivot_right_bars: 15,
        }
    }
}

/// Derived stop-loss signal for one ticker.  Recomputed per request, never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossResult {
    pub ticker: String,
    pub current_price: f64,
    pub recent_pivot_low: f64,
    pub atr: f64,
    #[serde(rename = "swingLowMinusATR")]
    pub swing_low_minus_atr: f64,
}

impl StopLossResult {
    /// Human-readable alert line for the notification relay.
    pub fn alert_message(&self) -> String {
        format!(
            "[{}] stop-loss alert: current price {:.2}, recent swing low {:.2}, \
             ATR {:.2} -> suggested stop {:.2}",
            self.ticker,
            self.current_price,
            self.recent_pivot_low,
            self.atr,
            self.swing_low_minus_atr
        )
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute a swing-low stop-loss signal from an oldest-first candle series.
///
/// # Errors
/// - `InvalidInput` — the series is too short for `atr_period` or contains
///   non-finite prices (raised before any computation).
/// - `NoPivotFound` — no strict pivot low exists in the scannable range; the
///   caller should surface this as "insufficient data for a signal".
/// - `IndexOutOfRange` — the most recent pivot predates the first ATR value;
///   the windows and `atr_period` are inconsistent with the series length.
pub fn compute_stop_loss(
    ticker: &str,
    candles: &[Candle],
    params: &StopLossParams,
) -> Result<StopLossResult, StopLossError> {
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let atr_series = compute_atr(&highs, &lows, &closes, params.atr_period)?;

    let pivots = find_pivot_lows(&lows, params.pivot_left_bars, params.pivot_right_bars);
    debug!(
        ticker,
        candles = candles.len(),
        atr_values = atr_series.len(),
        pivots = pivots.len(),
        "Stop-loss pipeline inputs ready"
    );

    let recent_pivot = pivots.last().copied().ok_or(StopLossError::NoPivotFound)?;

    // ATR[j] covers candle index j + atr_period; the original signal keys the
    // pivot to series index i - (period - 1).
    let atr_index = recent_pivot
        .index
        .checked_sub(params.atr_period - 1)
        .filter(|&j| j < atr_series.len())
        .ok_or(StopLossError::IndexOutOfRange {
            pivot_index: recent_pivot.index,
            atr_len: atr_series.len(),
            atr_period: params.atr_period,
        })?;
    let atr_at_pivot = atr_series[atr_index];

    // Oldest-first ordering: the last close is the live price.  compute_atr
    // already guaranteed the series is non-empty.
    let current_price = closes[closes.len() - 1];

    let result = StopLossResult {
        ticker: ticker.to_string(),
        current_price,
        recent_pivot_low: recent_pivot.value,
        atr: atr_at_pivot,
        swing_low_minus_atr: recent_pivot.value - atr_at_pivot,
    };
    debug!(
        ticker,
        pivot_index = recent_pivot.index,
        pivot_low = recent_pivot.value,
        atr = atr_at_pivot,
        stop = result.swing_low_minus_atr,
        "Stop-loss signal computed"
    );
    Ok(result)
}
