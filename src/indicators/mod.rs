// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators the stop-loss
// engine is built from.  Public functions return either a typed `Result` or a
// (possibly empty) series, so callers are forced to handle insufficient-data
// and numerical-edge-case scenarios.

pub mod atr;
pub mod pivot;
