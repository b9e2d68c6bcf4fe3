//! EnrichedBar — a Bar extended with indicator fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Bar;

/// One bar of an enriched series: the raw OHLC fields plus every indicator
/// column the pipeline computes.
///
/// Indicator fields are `None` until enough history exists (warm-up) or when
/// a gap in the inputs made the value uncomputable. Consumers must treat
/// `None` as "not yet computable" — never as zero. Serialized JSON carries
/// `null` for absent values, so chart and narrative consumers see no
/// sentinel numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,

    /// Simple moving averages of close over the trailing 20/60/120 bars.
    pub ma20: Option<f64>,
    pub ma60: Option<f64>,
    pub ma120: Option<f64>,

    /// Stochastic oscillator lines, both in [0, 100].
    pub k: Option<f64>,
    pub d: Option<f64>,

    /// MACD line (EMA12 − EMA26 of close), its signal line (EMA9 of the
    /// MACD line), and the histogram (dif − signal).
    pub dif: Option<f64>,
    pub signal: Option<f64>,
    pub osc: Option<f64>,
}

impl EnrichedBar {
    /// An enriched bar with every indicator column still empty.
    pub fn from_bar(bar: &Bar) -> Self {
        Self {
            symbol: bar.symbol.clone(),
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            ma20: None,
            ma60: None,
            ma120: None,
            k: None,
            d: None,
            dif: None,
            signal: None,
            osc: None,
        }
    }
}
