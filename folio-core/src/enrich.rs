//! Series enrichment — the indicator pipeline.
//!
//! Applies the dashboard's standard indicator set to an ordered OHLC series
//! and merges the results into per-bar records: SMA 20/60/120 of close,
//! stochastic KD(9), MACD(12,26,9).
//!
//! The input must already be chronologically ascending; the pipeline does
//! not sort and holds no state between calls. Identical input yields
//! identical output, and the caller's bars are never mutated.

use crate::domain::{Bar, EnrichedBar};
use crate::indicators::{Indicator, Macd, Sma, Stochastic};

/// Trailing windows for the three moving-average overlays.
pub const MA_PERIODS: [usize; 3] = [20, 60, 120];

/// Stochastic oscillator window.
pub const STOCHASTIC_PERIOD: usize = 9;

/// MACD fast/slow/signal periods.
pub const MACD_PERIODS: (usize, usize, usize) = (12, 26, 9);

/// Bars consumed before every indicator column is populated.
///
/// The 120-bar moving average dominates the standard set.
pub fn warmup_bars() -> usize {
    let (fast, slow, signal) = MACD_PERIODS;
    MA_PERIODS
        .iter()
        .map(|&period| Sma::new(period).lookback())
        .chain([
            Stochastic::new(STOCHASTIC_PERIOD).lookback(),
            Macd::new(fast, slow, signal).lookback(),
        ])
        .max()
        .unwrap_or(0)
}

/// Enrich an ordered bar series with the standard indicator set.
///
/// Empty input is a valid, trivial case and returns an empty series.
/// Indicator values that are not yet computable (warm-up, or a gap in the
/// inputs) come back as `None` — never zero.
pub fn enrich_series(bars: &[Bar]) -> Vec<EnrichedBar> {
    if bars.is_empty() {
        return Vec::new();
    }

    let [ma20, ma60, ma120] = MA_PERIODS.map(|period| Sma::new(period).compute(bars));
    let kd = Stochastic::new(STOCHASTIC_PERIOD).compute(bars);
    let (fast, slow, signal) = MACD_PERIODS;
    let macd = Macd::new(fast, slow, signal).compute(bars);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| EnrichedBar {
            symbol: bar.symbol.clone(),
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            ma20: present(ma20[i]),
            ma60: present(ma60[i]),
            ma120: present(ma120[i]),
            k: present(kd.k[i]),
            d: present(kd.d[i]),
            dif: present(macd.dif[i]),
            signal: present(macd.signal[i]),
            osc: present(macd.osc[i]),
        })
        .collect()
}

/// NaN is the internal "not computable" sentinel; the public record carries
/// `None` instead.
fn present(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(enrich_series(&[]).is_empty());
    }

    #[test]
    fn output_is_positionally_aligned() {
        let bars = make_bars(&(0..150).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let enriched = enrich_series(&bars);
        assert_eq!(enriched.len(), bars.len());
        for (bar, row) in bars.iter().zip(enriched.iter()) {
            assert_eq!(bar.date, row.date);
            assert_eq!(bar.close, row.close);
            assert_eq!(bar.volume, row.volume);
        }
    }

    #[test]
    fn warmup_columns_fill_in_stage_order() {
        let bars = make_bars(&(0..130).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect::<Vec<_>>());
        let enriched = enrich_series(&bars);

        // First valid index per column follows each stage's lookback.
        assert!(enriched[18].ma20.is_none());
        assert!(enriched[19].ma20.is_some());
        assert!(enriched[58].ma60.is_none());
        assert!(enriched[59].ma60.is_some());
        assert!(enriched[118].ma120.is_none());
        assert!(enriched[119].ma120.is_some());
        assert!(enriched[7].k.is_none());
        assert!(enriched[8].k.is_some());
        assert!(enriched[8].d.is_some());
        assert!(enriched[24].dif.is_none());
        assert!(enriched[25].dif.is_some());
        assert!(enriched[32].signal.is_none());
        assert!(enriched[33].signal.is_some());
        assert!(enriched[33].osc.is_some());
    }

    #[test]
    fn short_series_has_all_null_long_columns() {
        let bars = make_bars(&(0..30).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let enriched = enrich_series(&bars);
        assert!(enriched.iter().all(|row| row.ma60.is_none()));
        assert!(enriched.iter().all(|row| row.ma120.is_none()));
        // The short columns still populate.
        assert!(enriched[19].ma20.is_some());
        assert!(enriched[8].k.is_some());
        assert!(enriched[25].dif.is_some());
    }

    #[test]
    fn warmup_is_longest_lookback() {
        assert_eq!(warmup_bars(), 119);
    }

    #[test]
    fn determinism_bit_identical() {
        let bars = make_bars(&(0..140).map(|i| 100.0 + (i as f64 * 0.2).cos() * 7.0).collect::<Vec<_>>());
        let first = enrich_series(&bars);
        let second = enrich_series(&bars);
        assert_eq!(first, second);
    }

    #[test]
    fn input_is_not_mutated() {
        let bars = make_bars(&(0..25).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let snapshot = bars.clone();
        let _ = enrich_series(&bars);
        for (before, after) in snapshot.iter().zip(bars.iter()) {
            assert_eq!(before.close, after.close);
            assert_eq!(before.date, after.date);
        }
    }
}
