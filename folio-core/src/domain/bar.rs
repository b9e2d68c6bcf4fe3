//! Bar — the fundamental price series unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLC bar for a single symbol on a single sampled period (day, week, month).
///
/// A series is ordered oldest-to-newest with unique dates. Missing trading
/// days simply don't appear as entries. A NaN `close` marks a bar whose close
/// is missing (a halted session, or a hole left by a multi-source merge);
/// each indicator stage defines how that gap propagates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    /// Returns true if any OHLC field is NaN (void bar).
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLC sanity check: high >= low, both open and close inside the range.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.close > 0.0
    }
}
