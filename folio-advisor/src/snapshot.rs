//! Technical snapshot — the last bar's indicator state.
//!
//! The narrow record handed to chart and narrative consumers. Cross
//! detection compares the latest bar against the one before it, so the
//! previous K/D/OSC readings ride along.

use chrono::NaiveDate;
use folio_core::domain::EnrichedBar;
use serde::{Deserialize, Serialize};

/// Indicator state of the most recent bar of an enriched series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    pub symbol: String,
    pub date: NaiveDate,
    pub close: f64,

    pub ma20: Option<f64>,
    pub ma60: Option<f64>,
    pub ma120: Option<f64>,

    pub k: Option<f64>,
    pub d: Option<f64>,

    pub dif: Option<f64>,
    pub signal: Option<f64>,
    pub osc: Option<f64>,

    /// Previous bar's readings, for cross detection. `None` on a
    /// single-bar series or while the previous bar was still warming up.
    pub prev_k: Option<f64>,
    pub prev_d: Option<f64>,
    pub prev_osc: Option<f64>,
}

impl TechnicalSnapshot {
    /// Snapshot the last bar of an enriched series; `None` when empty.
    pub fn from_series(series: &[EnrichedBar]) -> Option<Self> {
        let last = series.last()?;
        let prev = series.len().checked_sub(2).map(|i| &series[i]);

        Some(Self {
            symbol: last.symbol.clone(),
            date: last.date,
            close: last.close,
            ma20: last.ma20,
            ma60: last.ma60,
            ma120: last.ma120,
            k: last.k,
            d: last.d,
            dif: last.dif,
            signal: last.signal,
            osc: last.osc,
            prev_k: prev.and_then(|bar| bar.k),
            prev_d: prev.and_then(|bar| bar.d),
            prev_osc: prev.and_then(|bar| bar.osc),
        })
    }
}
