// =============================================================================
// Market data ingress — schema-checked candle payloads
// =============================================================================
//
// The exchange feed delivers hourly candles as a JSON array of objects with
// `high_price`, `low_price`, and `trade_price` fields, most-recent candle
// first.  Everything downstream of this module works on validated `Candle`
// records ordered oldest first, so the indicator math never has to reason
// about feed orientation or malformed numbers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StopLossError;

// ---------------------------------------------------------------------------
// Engine-side candle
// ---------------------------------------------------------------------------

/// One validated OHLC candle.  Series handed to the engine are ordered
/// oldest first; the last element is the most recent bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(high: f64, low: f64, close: f64) -> Self {
        Self { high, low, close }
    }
}

// ---------------------------------------------------------------------------
// Exchange payload record
// ---------------------------------------------------------------------------

/// Raw candle object as the exchange REST API serialises it.  Only the three
/// price columns are required; the rest is metadata we tolerate but do not
/// depend on.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeCandle {
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub candle_date_time_utc: Option<NaiveDateTime>,
    #[serde(default)]
    pub timestamp: i64,
    pub high_price: f64,
    pub low_price: f64,
    pub trade_price: f64,
}

impl ExchangeCandle {
    /// Validate the price columns and convert into an engine candle.
    fn validate(&self, position: usize) -> Result<Candle, StopLossError> {
        for (name, value) in [
            ("high_price", self.high_price),
            ("low_price", self.low_price),
            ("trade_price", self.trade_price),
        ] {
            if !value.is_finite() {
                return Err(StopLossError::InvalidInput(format!(
                    "candle {position}: {name} is not a finite number"
                )));
            }
        }
        if self.low_price > self.high_price {
            return Err(StopLossError::InvalidInput(format!(
                "candle {position}: low_price {} exceeds high_price {}",
                self.low_price, self.high_price
            )));
        }
        Ok(Candle::new(self.high_price, self.low_price, self.trade_price))
    }
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Validate a most-recent-first exchange payload and return the candles
/// oldest first, ready for the indicator engine.
pub fn candles_from_recent_first(
    payload: &[ExchangeCandle],
) -> Result<Vec<Candle>, StopLossError> {
    let mut candles = Vec::with_capacity(payload.len());
    for (position, raw) in payload.iter().enumerate() {
        candles.push(raw.validate(position)?);
    }
    candles.reverse();
    debug!(count = candles.len(), "Exchange payload validated");
    Ok(candles)
}

/// Parse a raw JSON exchange payload (most-recent-first) into an oldest-first
/// candle series.  Schema violations and malformed JSON both map to
/// `InvalidInput`.
pub fn parse_recent_first_json(raw: &str) -> Result<Vec<Candle>, StopLossError> {
    let payload: Vec<ExchangeCandle> = serde_json::from_str(raw)
        .map_err(|e| StopLossError::InvalidInput(format!("malformed candle payload: {e}")))?;
    candles_from_recent_first(&payload)
}
