//! Technical indicator stages.
//!
//! Indicators are pure functions: bar history in, positionally aligned
//! numeric series out. Warm-up indices hold `f64::NAN`; the enrichment
//! pipeline converts NaN to `None` at the `EnrichedBar` boundary, so only
//! the internal series use the sentinel.
//!
//! Multi-line indicators (stochastic KD, MACD) return typed series structs
//! instead of forcing each line through the single-series trait.
//!
//! # Look-ahead contamination guard
//! No indicator value at bar t may depend on price data from bar t+1 or
//! later.

pub mod ema;
pub mod macd;
pub mod sma;
pub mod stochastic;

pub use ema::{ema_of_series, Ema};
pub use macd::{Macd, MacdSeries};
pub use sma::Sma;
pub use stochastic::{Stochastic, StochasticSeries};

use crate::domain::Bar;

/// Trait for single-series indicators.
///
/// `compute` returns a `Vec<f64>` of the same length as `bars`. The first
/// `lookback()` values are `f64::NAN` (warm-up); later values may also be
/// NaN when a gap in the inputs made them uncomputable.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20", "ema_12").
    fn name(&self) -> &str;

    /// Number of bars consumed before the first valid output.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire bar series.
    fn compute(&self, bars: &[Bar]) -> Vec<f64>;
}

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHL: open = prev_close (or close for first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Bar {
                symbol: "TEST".to_string(),
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
