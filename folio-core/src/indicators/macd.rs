//! MACD — moving average convergence/divergence.
//!
//! DIF = EMA(fast) − EMA(slow) of close; Signal = EMA(signal) of DIF;
//! OSC = DIF − Signal. Every subtraction propagates NaN operands, so a
//! value is only present where both inputs are.
//!
//! Lookback: slow + signal - 2 (slow EMA seed, then the signal EMA seeds
//! over the DIF line).

use crate::domain::Bar;
use crate::indicators::ema::ema_of_series;

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
}

/// DIF, signal and histogram lines, positionally aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub dif: Vec<f64>,
    pub signal: Vec<f64>,
    pub osc: Vec<f64>,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast >= 1, "MACD fast period must be >= 1");
        assert!(slow > fast, "MACD slow period must be > fast period");
        assert!(signal >= 1, "MACD signal period must be >= 1");
        Self { fast, slow, signal }
    }

    pub fn lookback(&self) -> usize {
        self.slow + self.signal - 2
    }

    pub fn compute(&self, bars: &[Bar]) -> MacdSeries {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

        // Both close EMAs complete before DIF; DIF completes before the
        // signal pass runs over it.
        let ema_fast = ema_of_series(&closes, self.fast);
        let ema_slow = ema_of_series(&closes, self.slow);

        let dif: Vec<f64> = ema_fast
            .iter()
            .zip(ema_slow.iter())
            .map(|(fast, slow)| fast - slow)
            .collect();

        let signal = ema_of_series(&dif, self.signal);

        let osc: Vec<f64> = dif
            .iter()
            .zip(signal.iter())
            .map(|(dif, signal)| dif - signal)
            .collect();

        MacdSeries { dif, signal, osc }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn macd_warmup_layout() {
        // fast=3, slow=6, signal=3 over 20 rising closes.
        // DIF first valid at index 5 (slow seed); signal seeds over DIF at
        // index 5 + 3 - 1 = 7; OSC follows signal.
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let macd = Macd::new(3, 6, 3);
        let result = macd.compute(&bars);

        for i in 0..5 {
            assert!(result.dif[i].is_nan(), "DIF must be NaN at index {i}");
        }
        assert!(!result.dif[5].is_nan());
        for i in 0..7 {
            assert!(result.signal[i].is_nan(), "signal must be NaN at index {i}");
            assert!(result.osc[i].is_nan(), "OSC must be NaN at index {i}");
        }
        assert!(!result.signal[7].is_nan());
        assert!(!result.osc[7].is_nan());
        assert_eq!(macd.lookback(), 7);
    }

    #[test]
    fn macd_dif_is_ema_difference() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + (i as f64) * 2.0).collect();
        let bars = make_bars(&closes);
        let result = Macd::new(3, 6, 3).compute(&bars);

        let ema_fast = ema_of_series(&closes, 3);
        let ema_slow = ema_of_series(&closes, 6);
        for i in 5..15 {
            assert_approx(result.dif[i], ema_fast[i] - ema_slow[i], DEFAULT_EPSILON);
        }
    }

    #[test]
    fn macd_osc_identity() {
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0)
            .collect();
        let bars = make_bars(&closes);
        let result = Macd::new(3, 6, 3).compute(&bars);

        for i in 0..30 {
            if !result.osc[i].is_nan() {
                // Exact: OSC is computed as this very difference.
                assert_eq!(result.osc[i], result.dif[i] - result.signal[i]);
            }
        }
    }

    #[test]
    fn macd_rising_series_has_positive_dif() {
        // In a steady uptrend the fast EMA sits above the slow EMA.
        let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let result = Macd::new(3, 6, 3).compute(&bars);
        for i in 10..25 {
            assert!(result.dif[i] > 0.0, "DIF must be positive at index {i}");
        }
    }

    #[test]
    fn macd_gap_poisons_downstream() {
        let mut closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        closes[10] = f64::NAN;
        let bars = make_bars(&closes);
        let result = Macd::new(3, 6, 3).compute(&bars);
        // Both close EMAs are poisoned from index 10, so DIF, signal and
        // OSC never recover.
        for i in 10..25 {
            assert!(result.dif[i].is_nan());
            assert!(result.signal[i].is_nan());
            assert!(result.osc[i].is_nan());
        }
    }

    #[test]
    fn macd_too_short_series_is_all_nan() {
        let bars = make_bars(&[100.0, 101.0, 102.0]);
        let result = Macd::new(3, 6, 3).compute(&bars);
        assert!(result.dif.iter().all(|v| v.is_nan()));
        assert!(result.signal.iter().all(|v| v.is_nan()));
        assert!(result.osc.iter().all(|v| v.is_nan()));
    }

    #[test]
    #[should_panic(expected = "MACD slow period must be > fast period")]
    fn macd_rejects_slow_leq_fast() {
        Macd::new(26, 12, 9);
    }
}
