//! Watchlist analysis orchestration.
//!
//! Fans out over the configured symbols, and for each one: fetch history,
//! enrich, fingerprint, snapshot, recommend. A failed symbol becomes a
//! failed report entry — one bad ticker never sinks the batch.

use chrono::NaiveDate;
use folio_core::data::{MarketDataError, MarketDataProvider};
use folio_core::domain::EnrichedBar;
use folio_core::enrich::enrich_series;
use folio_core::fingerprint::SeriesFingerprint;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::config::AdvisorConfig;
use crate::recommendation::{recommend, Recommendation};
use crate::snapshot::TechnicalSnapshot;

/// Why a symbol could not be analyzed.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Fetch(#[from] MarketDataError),

    #[error("no history returned for {symbol}")]
    EmptyHistory { symbol: String },
}

/// Everything the dashboard shows for one analyzed symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolAnalysis {
    pub symbol: String,
    /// Stable id of the analyzed series, for keying reports downstream.
    pub series_id: String,
    pub bars: Vec<EnrichedBar>,
    pub snapshot: TechnicalSnapshot,
    pub recommendation: Recommendation,
}

/// Per-symbol outcome of a watchlist run.
#[derive(Debug)]
pub struct SymbolReport {
    pub symbol: String,
    pub result: Result<SymbolAnalysis, AnalyzeError>,
}

/// Analyze one symbol over an inclusive date range.
pub fn analyze_symbol(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    config: &AdvisorConfig,
) -> Result<SymbolAnalysis, AnalyzeError> {
    let bars = provider.fetch_history(symbol, start, end)?;

    let fingerprint = SeriesFingerprint::of(&bars).ok_or_else(|| AnalyzeError::EmptyHistory {
        symbol: symbol.to_string(),
    })?;

    let enriched = enrich_series(&bars);
    let snapshot = TechnicalSnapshot::from_series(&enriched).ok_or_else(|| {
        AnalyzeError::EmptyHistory {
            symbol: symbol.to_string(),
        }
    })?;
    let recommendation = recommend(&snapshot, &config.thresholds);

    Ok(SymbolAnalysis {
        symbol: symbol.to_string(),
        series_id: fingerprint.id(),
        bars: enriched,
        snapshot,
        recommendation,
    })
}

/// Analyze the whole watchlist as of `today`, in parallel.
///
/// Each symbol's engine call is independent, so the fan-out is safe; the
/// reports come back in watchlist order.
pub fn analyze_watchlist(
    provider: &dyn MarketDataProvider,
    config: &AdvisorConfig,
    today: NaiveDate,
) -> Vec<SymbolReport> {
    let start = today - chrono::Duration::days(config.history_days);

    config
        .watchlist
        .par_iter()
        .map(|symbol| SymbolReport {
            symbol: symbol.clone(),
            result: analyze_symbol(provider, symbol, start, today, config),
        })
        .collect()
}
