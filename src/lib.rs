// =============================================================================
// swingstop — swing-low stop-loss engine
// =============================================================================
//
// Computes a heuristic stop-loss price for a ticker from recent candlestick
// data: Wilder ATR over the series, strict pivot lows over a symmetric
// window, then `stop = most recent pivot low - ATR at that pivot`.
//
// The engine is pure and synchronous: it never performs I/O, holds no state
// between calls, and fails with a typed error the caller can route (report
// to the user vs. fix the configuration).  Candle series are ordered oldest
// first; `market_data` converts most-recent-first exchange payloads.
// =============================================================================

pub mod error;
pub mod indicators;
pub mod market_data;
pub mod stop_loss;

pub use error::StopLossError;
pub use indicators::atr::compute_atr;
pub use indicators::pivot::{find_pivot_lows, PivotPoint};
pub use market_data::{candles_from_recent_first, parse_recent_first_json, Candle, ExchangeCandle};
pub use stop_loss::{compute_stop_loss, StopLossParams, StopLossResult};
