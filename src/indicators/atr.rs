// =============================================================================
// Average True Range (ATR) — Wilder's Smoothing Method
// =============================================================================
//
// ATR measures market volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR is then the smoothed average of TR using Wilder's method:
//   ATR_0   = SMA of first `period` TR values
//   ATR_t   = (ATR_{t-1} * (period - 1) + TR_t) / period
//
// Inputs are three parallel columns (high, low, close), oldest first.  For
// `n` candles there are `n - 1` TR values and therefore `n - period` ATR
// values: ATR[j] summarizes the bar at candle index `j + period`.
//
// Default period: 14
// =============================================================================

use crate::error::StopLossError;

/// Compute the full Wilder-smoothed ATR series for three equal-length price
/// columns ordered oldest first.
///
/// # Errors
/// `InvalidInput` when:
/// - `period` is zero;
/// - the three columns differ in length;
/// - there are fewer than `period + 1` candles (we need `period` TR values,
///   each requiring a previous close);
/// - any price is non-finite.
///
/// Validation runs before any arithmetic, so a returned series is always
/// complete: exactly `highs.len() - period` values, all finite and `>= 0`.
pub fn compute_atr(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Result<Vec<f64>, StopLossError> {
    if period == 0 {
        return Err(StopLossError::InvalidInput("ATR period must be >= 1".into()));
    }
    if highs.len() != lows.len() || highs.len() != closes.len() {
        return Err(StopLossError::InvalidInput(format!(
            "price columns differ in length: highs={}, lows={}, closes={}",
            highs.len(),
            lows.len(),
            closes.len()
        )));
    }
    if highs.len() < period + 1 {
        return Err(StopLossError::InvalidInput(format!(
            "need at least {} candles for ATR period {}, got {}",
            period + 1,
            period,
            highs.len()
        )));
    }
    for column in [highs, lows, closes] {
        if column.iter().any(|v| !v.is_finite()) {
            return Err(StopLossError::InvalidInput(
                "price columns contain a non-finite value".into(),
            ));
        }
    }

    // --- Step 1: True Range for each consecutive pair ------------------------
    let mut tr_values: Vec<f64> = Vec::with_capacity(highs.len() - 1);
    for i in 1..highs.len() {
        let hl = highs[i] - lows[i];
        let hc = (highs[i] - closes[i - 1]).abs();
        let lc = (lows[i] - closes[i - 1]).abs();
        tr_values.push(hl.max(hc).max(lc));
    }

    // --- Step 2: Seed ATR with SMA of first `period` TR values ---------------
    let period_f = period as f64;
    let seed: f64 = tr_values[..period].iter().sum::<f64>() / period_f;

    // --- Step 3: Wilder's smoothing for remaining TR values ------------------
    let mut series = Vec::with_capacity(tr_values.len() - period + 1);
    series.push(seed);
    let mut atr = seed;
    for &tr in &tr_values[period..] {
        atr = (atr * (period_f - 1.0) + tr) / period_f;
        series.push(atr);
    }

    Ok(series)
}
