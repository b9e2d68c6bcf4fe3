//! Stochastic oscillator (KD).
//!
//! RSV compares the close to the trailing high/low range; K and D are
//! recursive smoothings (2/3 previous state, 1/3 new input) seeded at the
//! 50 neutral midpoint. The filter runs continuously once the first window
//! fills — state carries bar to bar and never resets. High/low/close are
//! assumed present whenever the window is full.
//!
//! Lookback: period - 1.

use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Stochastic {
    period: usize,
}

/// K and D lines, positionally aligned with the input bars.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticSeries {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

impl Stochastic {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "stochastic period must be >= 1");
        Self { period }
    }

    pub fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    pub fn compute(&self, bars: &[Bar]) -> StochasticSeries {
        let n = bars.len();
        let mut k_series = vec![f64::NAN; n];
        let mut d_series = vec![f64::NAN; n];

        if n < self.period {
            return StochasticSeries {
                k: k_series,
                d: d_series,
            };
        }

        // Accumulator state; frozen until the first full window.
        let mut k = 50.0;
        let mut d = 50.0;

        for i in (self.period - 1)..n {
            let window = &bars[(i + 1 - self.period)..=i];
            let highest = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
            let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);

            let rsv = if highest == lowest {
                50.0 // flat window: no range to normalize against
            } else {
                (bars[i].close - lowest) / (highest - lowest) * 100.0
            };

            k = 2.0 / 3.0 * k + rsv / 3.0;
            d = 2.0 / 3.0 * d + k / 3.0;
            k_series[i] = k;
            d_series[i] = d;
        }

        StochasticSeries {
            k: k_series,
            d: d_series,
        }
    }
}
