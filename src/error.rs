// =============================================================================
// Error taxonomy for the stop-loss engine
// =============================================================================
//
// Three distinct failure classes, each with a different meaning for the
// caller:
//
//   InvalidInput    — malformed or insufficiently long input; raised before
//                     any computation starts.
//   NoPivotFound    — well-formed input, but no pivot low exists. A business
//                     condition the caller should surface to the end user as
//                     "insufficient data for a signal", not a system fault.
//   IndexOutOfRange — the pivot-to-ATR alignment fell outside the ATR series.
//                     Indicates inconsistent tuning parameters; a caller
//                     configuration bug, not a transient condition.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StopLossError {
    /// Input arrays are malformed or too short for the requested parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The pivot scan produced zero pivot lows.
    #[error("no pivot lows found in the dataset")]
    NoPivotFound,

    /// The most recent pivot does not line up with any ATR value.
    #[error(
        "pivot at index {pivot_index} maps outside the ATR series \
         (length {atr_len}, period {atr_period})"
    )]
    IndexOutOfRange {
        pivot_index: usize,
        atr_len: usize,
        atr_period: usize,
    },
}

impl StopLossError {
    /// `true` for failures the caller should report to the end user rather
    /// than treat as a defect.
    pub fn is_business_condition(&self) -> bool {
        matches!(self, Self::NoPivotFound)
    }
}
