//! In-memory market data fixture.
//!
//! Serves canned history and quotes for tests and offline runs.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{Bar, Quote};

use super::provider::{MarketDataError, MarketDataProvider};

/// Provider backed by in-memory series, keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    history: HashMap<String, Vec<Bar>>,
    quotes: HashMap<String, Quote>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bar series for a symbol. Bars must already be in
    /// ascending date order.
    pub fn with_history(mut self, symbol: impl Into<String>, bars: Vec<Bar>) -> Self {
        self.history.insert(symbol.into(), bars);
        self
    }

    /// Register a quote for a symbol.
    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quotes.insert(quote.symbol.clone(), quote);
        self
    }
}

impl MarketDataProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, MarketDataError> {
        let bars = self
            .history
            .get(symbol)
            .ok_or_else(|| MarketDataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;
        Ok(bars
            .iter()
            .filter(|bar| bar.date >= start && bar.date <= end)
            .cloned()
            .collect())
    }

    fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.quotes
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })
    }
}
