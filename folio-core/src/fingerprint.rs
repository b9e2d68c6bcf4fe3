//! Series fingerprinting — deterministic identity for an analyzed series.
//!
//! Callers use the id to key reports and downstream caches; the engine
//! itself caches nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Bar;

/// Identity of one analyzed price series: symbol, covered range, bar count.
///
/// `id()` hashes the canonical JSON encoding, so two series covering the
/// same symbol and range produce the same id across processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesFingerprint {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub bars: usize,
}

impl SeriesFingerprint {
    /// Fingerprint an ordered series; `None` for an empty one.
    pub fn of(bars: &[Bar]) -> Option<Self> {
        let first = bars.first()?;
        let last = bars.last()?;
        Some(Self {
            symbol: first.symbol.clone(),
            start: first.date,
            end: last.date,
            bars: bars.len(),
        })
    }

    /// Hex blake3 hash of the canonical JSON encoding.
    pub fn id(&self) -> String {
        let json = serde_json::to_string(self).expect("SeriesFingerprint must serialize");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
