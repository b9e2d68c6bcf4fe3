//! HTTP market data provider.
//!
//! Fetches daily OHLC bars from a chart-style JSON endpoint and adapts them
//! to the core provider trait. One request, one attempt: retry, backoff and
//! proxy fallback belong to the orchestration outside this library.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use folio_core::data::{MarketDataError, MarketDataProvider};
use folio_core::domain::{Bar, Quote};
use serde::Deserialize;

/// Chart API response envelope.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartSeries>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartSeries {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

/// Provider backed by an HTTP chart endpoint.
pub struct HttpMarketData {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpMarketData {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn fetch_chart(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, MarketDataError> {
        let url = format!(
            "{}/v8/finance/chart/{symbol}?period1={}&period2={}&interval=1d",
            self.base_url,
            unix_timestamp(start),
            // The endpoint's period2 is exclusive; push it past the end date.
            unix_timestamp(end) + 86_400,
        );

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(MarketDataError::Provider(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let parsed: ChartResponse = response
            .json()
            .map_err(|e| MarketDataError::MalformedResponse(e.to_string()))?;
        bars_from_chart(parsed, symbol)
    }
}

fn unix_timestamp(date: NaiveDate) -> i64 {
    NaiveDateTime::new(date, NaiveTime::MIN).and_utc().timestamp()
}

/// Decode a chart response into ordered bars.
///
/// Rows with any missing OHLC component are skipped: a missing trading day
/// simply doesn't appear in the series, it never becomes a zero price.
pub fn bars_from_chart(response: ChartResponse, symbol: &str) -> Result<Vec<Bar>, MarketDataError> {
    let body = response.chart;

    if let Some(error) = body.error {
        return Err(if error.code == "Not Found" {
            MarketDataError::SymbolNotFound {
                symbol: symbol.to_string(),
            }
        } else {
            MarketDataError::Provider(format!("{}: {}", error.code, error.description))
        });
    }

    let series = body
        .result
        .and_then(|mut result| {
            if result.is_empty() {
                None
            } else {
                Some(result.remove(0))
            }
        })
        .ok_or_else(|| MarketDataError::MalformedResponse("empty result".into()))?;

    let timestamps = series.timestamp.unwrap_or_default();
    let quote = series
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| MarketDataError::MalformedResponse("missing quote block".into()))?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let date = DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| MarketDataError::MalformedResponse(format!("bad timestamp {ts}")))?
            .date_naive();

        let row = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
        );
        let (Some(open), Some(high), Some(low), Some(close)) = row else {
            continue;
        };

        bars.push(Bar {
            symbol: symbol.to_string(),
            date,
            open,
            high,
            low,
            close,
            volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
        });
    }

    Ok(bars)
}

impl MarketDataProvider for HttpMarketData {
    fn name(&self) -> &str {
        "http-chart"
    }

    fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, MarketDataError> {
        self.fetch_chart(symbol, start, end)
    }

    fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        // The latest close of a short trailing window is the quote; a
        // dedicated realtime endpoint is not part of this surface.
        let end = chrono::Utc::now().date_naive();
        let start = end - chrono::Duration::days(7);
        let bars = self.fetch_chart(symbol, start, end)?;
        let last = bars.last().ok_or_else(|| MarketDataError::Provider(format!(
            "no recent bars for {symbol}"
        )))?;
        Ok(Quote {
            symbol: symbol.to_string(),
            price: last.close,
            as_of: last.date,
        })
    }
}
