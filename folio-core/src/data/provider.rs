//! Market data provider trait and structured error types.
//!
//! The engine consumes bars produced by an external market-data
//! collaborator. This trait is the narrow interface that collaborator
//! plugs into; transport concerns (HTTP, retries, fallbacks) stay behind
//! it and never leak into the enrichment pipeline.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Bar, Quote};

/// Structured errors for market data operations.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("network error: {0}")]
    Network(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("provider error: {0}")]
    Provider(String),
}

/// Trait for market data providers.
///
/// Implementations must return history in chronologically ascending order
/// with unique dates — the enrichment pipeline relies on that ordering and
/// does not sort.
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily OHLC bars for a symbol over a date range (inclusive).
    fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, MarketDataError>;

    /// Fetch the latest quote for a symbol.
    fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
